use std::collections::{HashSet, VecDeque};

use crate::geometry::Cell;
use crate::input::{direction_change_is_valid, Direction};

/// Body every run starts from, head first.
pub const START_BODY: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];

/// Heading every run starts with.
pub const START_DIRECTION: Direction = Direction::Right;

/// Mutable snake state: body cells, heading and the one-shot growth flag.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_growth: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Creates the three-cell starting snake facing right.
    #[must_use]
    pub fn new() -> Self {
        Self::from_segments(START_BODY.to_vec(), START_DIRECTION)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty; every snake has a head.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least a head");

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_growth: false,
        }
    }

    /// Moves one cell along the current heading.
    ///
    /// The new head is pushed first; only then is the growth flag consulted,
    /// so food eaten on tick `t` lengthens the snake on tick `t + 1`.
    pub fn advance(&mut self) {
        let next_head = self.head().offset(self.direction);
        self.body.push_front(next_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Changes heading unless `direction` reverses the current one.
    ///
    /// Returns whether the change was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.direction = direction;
        true
    }

    /// Restores the starting body and heading. Leaves the growth flag alone.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(START_BODY);
        self.direction = START_DIRECTION;
    }

    /// Queues growth on the next movement tick.
    pub fn grow_next(&mut self) {
        self.pending_growth = true;
    }

    pub fn clear_growth(&mut self) {
        self.pending_growth = false;
    }

    #[must_use]
    pub fn has_pending_growth(&self) -> bool {
        self.pending_growth
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Snapshot of every occupied cell, for placement checks.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Cell;
    use crate::input::Direction;

    use super::{Snake, START_BODY};

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn starts_with_three_cells_facing_right() {
        let snake = Snake::new();

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 9));
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.has_pending_growth());
    }

    #[test]
    fn three_advances_without_input() {
        let mut snake = Snake::new();

        for _ in 0..3 {
            snake.advance();
        }

        assert_eq!(snake.head(), Cell::new(9, 9));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn advance_without_growth_drops_the_tail() {
        let mut snake = Snake::new();
        let old_head = snake.head();

        snake.advance();

        assert_eq!(snake.head(), old_head.offset(Direction::Right));
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Cell::new(4, 9)));
    }

    #[test]
    fn growth_keeps_the_tail_exactly_once() {
        let mut snake = Snake::new();

        snake.grow_next();
        snake.advance();
        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Cell::new(4, 9)));
        assert!(!snake.has_pending_growth());

        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn set_direction_rejects_only_reversal() {
        for current in ALL_DIRECTIONS {
            for requested in ALL_DIRECTIONS {
                let mut snake = Snake::from_segments(vec![Cell::new(5, 5)], current);
                let accepted = snake.set_direction(requested);

                if requested == current.opposite() {
                    assert!(!accepted);
                    assert_eq!(snake.direction(), current);
                } else {
                    assert!(accepted);
                    assert_eq!(snake.direction(), requested);
                }
            }
        }
    }

    #[test]
    fn reversal_request_keeps_heading_right() {
        let mut snake = Snake::new();

        snake.set_direction(Direction::Left);
        snake.advance();

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Cell::new(7, 9));
    }

    #[test]
    fn reset_restores_body_and_heading_but_not_growth() {
        let mut snake = Snake::new();
        snake.set_direction(Direction::Down);
        snake.advance();
        snake.advance();
        snake.grow_next();

        snake.reset();

        assert_eq!(snake.segments().copied().collect::<Vec<_>>(), START_BODY);
        assert_eq!(snake.direction(), Direction::Right);
        assert!(snake.has_pending_growth());
    }

    #[test]
    fn head_overlap_detects_self_collision() {
        let snake = Snake::from_segments(
            vec![
                Cell::new(2, 2),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 3),
                Cell::new(2, 2),
            ],
            Direction::Up,
        );

        assert!(snake.head_overlaps_body());
        assert!(!Snake::new().head_overlaps_body());
    }

    #[test]
    #[should_panic(expected = "snake needs at least a head")]
    fn empty_body_is_rejected_at_construction() {
        let _ = Snake::from_segments(Vec::new(), Direction::Right);
    }

    #[test]
    fn no_bounds_checking_on_advance() {
        let mut snake = Snake::from_segments(vec![Cell::new(0, 0)], Direction::Left);

        snake.advance();

        assert_eq!(snake.head(), Cell::new(-1, 0));
    }
}
