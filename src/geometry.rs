use ratatui::layout::Rect;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Positions one step outside the board (`-1` or `N`) are representable so
/// the controller can observe a wall hit after the snake advances.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square board dimensions plus the screen metrics the renderer needs.
///
/// Collision logic only ever looks at `cells_per_side`; the remaining fields
/// describe how one logical cell maps onto terminal columns and rows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Geometry {
    pub cells_per_side: u16,
    /// Terminal columns per cell.
    pub cell_width: u16,
    /// Terminal rows per cell.
    pub cell_height: u16,
    /// Border around the board, in terminal units, on every side.
    pub offset: u16,
}

impl Geometry {
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cells_per_side) * usize::from(self.cells_per_side)
    }

    /// Returns true when `cell` lies on the board.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        let side = i32::from(self.cells_per_side);
        (0..side).contains(&cell.x) && (0..side).contains(&cell.y)
    }

    /// Returns true when `cell` sits exactly one step past a board edge.
    #[must_use]
    pub fn is_just_outside(self, cell: Cell) -> bool {
        let side = i32::from(self.cells_per_side);
        cell.x == -1 || cell.x == side || cell.y == -1 || cell.y == side
    }

    /// Board size in terminal units, without the border offset.
    #[must_use]
    pub fn board_size(self) -> (u16, u16) {
        (
            self.cells_per_side.saturating_mul(self.cell_width),
            self.cells_per_side.saturating_mul(self.cell_height),
        )
    }

    /// Full canvas size: the board plus `offset` on every side.
    #[must_use]
    pub fn canvas_size(self) -> (u16, u16) {
        let (width, height) = self.board_size();
        let margin = self.offset.saturating_mul(2);
        (width.saturating_add(margin), height.saturating_add(margin))
    }

    /// Board rect inside a canvas whose top-left corner is `origin`.
    #[must_use]
    pub fn board_rect(self, origin: (u16, u16)) -> Rect {
        let (width, height) = self.board_size();
        Rect::new(
            origin.0.saturating_add(self.offset),
            origin.1.saturating_add(self.offset),
            width,
            height,
        )
    }

    /// Screen rect covered by `cell`, or `None` for cells off the board.
    #[must_use]
    pub fn cell_rect(self, origin: (u16, u16), cell: Cell) -> Option<Rect> {
        if !self.contains(cell) {
            return None;
        }

        let board = self.board_rect(origin);
        let column = u16::try_from(cell.x).ok()?.checked_mul(self.cell_width)?;
        let row = u16::try_from(cell.y).ok()?.checked_mul(self.cell_height)?;

        Some(Rect::new(
            board.x.checked_add(column)?,
            board.y.checked_add(row)?,
            self.cell_width,
            self.cell_height,
        ))
    }
}
