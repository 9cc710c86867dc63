use std::collections::HashSet;

use log::warn;
use rand::Rng;

use crate::geometry::{Cell, Geometry};

/// Food entity currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    #[must_use]
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns food on a free cell.
    ///
    /// A completely covered board has no free cell; that is a logic error
    /// (debug builds panic) and release builds fall back to the origin cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Geometry, occupied: &HashSet<Cell>) -> Self {
        let placed = place_random_avoiding(rng, grid, occupied);
        debug_assert!(placed.is_some(), "no free cell to spawn food on");

        let position = placed.unwrap_or_else(|| {
            warn!(
                "no free cell to spawn food on a {0}x{0} board",
                grid.cells_per_side
            );
            Cell::new(0, 0)
        });
        Self::new(position)
    }

    /// Moves the food to a fresh free cell.
    ///
    /// Returns `false` and keeps the current position when no cell is free.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: Geometry,
        occupied: &HashSet<Cell>,
    ) -> bool {
        match place_random_avoiding(rng, grid, occupied) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}

/// Draws uniformly from the whole board until the cell is not in `occupied`.
///
/// Rejection sampling keeps every free cell equally likely. Returns `None`
/// when `occupied` covers every board cell, since no draw could succeed.
#[must_use]
pub fn place_random_avoiding<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Geometry,
    occupied: &HashSet<Cell>,
) -> Option<Cell> {
    let side = i32::from(grid.cells_per_side);
    if side == 0 {
        return None;
    }

    let covered = occupied.iter().filter(|cell| grid.contains(**cell)).count();
    if covered >= grid.total_cells() {
        return None;
    }

    loop {
        let candidate = Cell::new(rng.gen_range(0..side), rng.gen_range(0..side));
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }
}
