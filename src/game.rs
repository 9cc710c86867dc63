use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{MIN_GRID_SIZE, Settings};
use crate::error::ConfigError;
use crate::food::Food;
use crate::geometry::Geometry;
use crate::input::GameInput;
use crate::snake::Snake;

/// Whether ticks currently advance the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunState {
    Running,
    Stopped,
}

/// What ended the last run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl DeathReason {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::WallCollision => "hit the wall",
            Self::SelfCollision => "hit yourself",
        }
    }
}

/// Complete mutable game state for one process.
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub run_state: RunState,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    best_score: u32,
    preserve_high_score: bool,
    grid: Geometry,
    rng: StdRng,
}

impl Game {
    /// Creates a game with an entropy-seeded food placement source.
    ///
    /// `grid` must have at least `MIN_GRID_SIZE` cells per side so the fixed
    /// starting body lies on the board. Use `from_settings` for a checked
    /// constructor.
    #[must_use]
    pub fn new(grid: Geometry) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: Geometry, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    /// Validates `settings` and builds a game from them.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let grid = settings.geometry();
        let game = match settings.seed {
            Some(seed) => Self::new_with_seed(grid, seed),
            None => Self::new(grid),
        };

        Ok(game.with_preserve_high_score(settings.preserve_high_score))
    }

    fn with_rng(grid: Geometry, mut rng: StdRng) -> Self {
        debug_assert!(
            grid.cells_per_side >= MIN_GRID_SIZE,
            "starting body does not fit on a {0}x{0} board",
            grid.cells_per_side
        );

        let snake = Snake::new();
        let food = Food::spawn(&mut rng, grid, &snake.occupied_cells());

        Self {
            snake,
            food,
            score: 0,
            run_state: RunState::Running,
            death_reason: None,
            tick_count: 0,
            best_score: 0,
            preserve_high_score: false,
            grid,
            rng,
        }
    }

    #[must_use]
    pub fn with_preserve_high_score(mut self, preserve: bool) -> Self {
        self.preserve_high_score = preserve;
        self
    }

    #[must_use]
    pub fn grid(&self) -> Geometry {
        self.grid
    }

    /// Best score reached this session, only when high-score keeping is on.
    #[must_use]
    pub fn high_score(&self) -> Option<u32> {
        self.preserve_high_score.then_some(self.best_score)
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Checks run in a fixed order: food, edges, tail. A check that ends the
    /// run skips the rest.
    pub fn update(&mut self) {
        if self.run_state != RunState::Running {
            return;
        }

        self.tick_count += 1;
        self.snake.advance();

        self.check_collision_with_food();
        if self.check_collision_with_edges() {
            return;
        }
        if self.check_collision_with_tail() {
            return;
        }

        debug_assert_eq!(
            self.snake.occupied_cells().len(),
            self.snake.len(),
            "snake body holds a duplicate cell without a collision"
        );
    }

    /// Applies one external input event.
    ///
    /// Any key wakes a stopped game before its direction is considered, so
    /// a reversing key restarts the run without turning the snake.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                self.resume();
                self.snake.set_direction(direction);
            }
            GameInput::Other => self.resume(),
            GameInput::Quit => {}
        }
    }

    /// Leaves the stopped state. No-op while running.
    pub fn resume(&mut self) {
        if self.run_state == RunState::Stopped {
            debug!("resuming after {:?}", self.death_reason);
            self.run_state = RunState::Running;
            self.death_reason = None;
        }
    }

    /// Eats the food under the head. Returns whether food was eaten.
    fn check_collision_with_food(&mut self) -> bool {
        if self.snake.head() != self.food.position {
            return false;
        }

        let occupied = self.snake.occupied_cells();
        if !self.food.relocate(&mut self.rng, self.grid, &occupied) {
            warn!("no free cell left for food on a {0}x{0} board", self.grid.cells_per_side);
        }
        debug_assert!(
            !self.snake.occupies(self.food.position) || occupied.len() >= self.grid.total_cells(),
            "food placed on the snake"
        );

        self.snake.grow_next();
        self.score += 1;
        self.best_score = self.best_score.max(self.score);
        debug!("food eaten, score {}", self.score);
        true
    }

    /// Ends the run when the head left the board. Returns whether it did.
    fn check_collision_with_edges(&mut self) -> bool {
        let head = self.snake.head();
        if self.grid.contains(head) {
            return false;
        }

        debug_assert!(self.grid.is_just_outside(head));
        self.game_over(DeathReason::WallCollision);
        true
    }

    /// Ends the run when the head overlaps the body. Returns whether it did.
    fn check_collision_with_tail(&mut self) -> bool {
        if !self.snake.head_overlaps_body() {
            return false;
        }

        self.game_over(DeathReason::SelfCollision);
        true
    }

    /// Resets the board and stops. The score is not carried over.
    fn game_over(&mut self, reason: DeathReason) {
        info!(
            "game over: {} with score {} after {} ticks",
            reason.describe(),
            self.score,
            self.tick_count
        );

        self.best_score = self.best_score.max(self.score);

        self.snake.reset();
        self.snake.clear_growth();

        let occupied = self.snake.occupied_cells();
        if !self.food.relocate(&mut self.rng, self.grid, &occupied) {
            warn!("no free cell left for food after reset");
        }

        self.run_state = RunState::Stopped;
        self.death_reason = Some(reason);
        self.score = 0;
    }
}
