use std::collections::HashSet;

use rand::Rng;

use crate::config::GridSize;
use crate::error::SimulationError;
use crate::snake::Position;

/// Picks food cells with an injected random source.
#[derive(Debug, Clone)]
pub struct FoodSpawner<R> {
    rng: R,
}

impl<R: Rng> FoodSpawner<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a uniformly random cell of `grid` that is not in `occupied`.
    ///
    /// Fails with [`SimulationError::GridExhausted`] when the grid has no free
    /// cell left. Never loops: the free cells are enumerated and one is drawn.
    pub fn spawn(
        &mut self,
        grid: GridSize,
        occupied: &HashSet<Position>,
    ) -> Result<Position, SimulationError> {
        let free = free_cells(grid, occupied);
        if free.is_empty() {
            return Err(SimulationError::GridExhausted {
                width: grid.width,
                height: grid.height,
            });
        }

        let index = self.rng.gen_range(0..free.len());
        Ok(free[index])
    }
}

/// Every in-bounds cell not present in `occupied`, in row-major order.
fn free_cells(grid: GridSize, occupied: &HashSet<Position>) -> Vec<Position> {
    let in_bounds_occupied = occupied
        .iter()
        .filter(|position| position.is_within_bounds(grid))
        .count();
    let mut candidates = Vec::with_capacity(grid.total_cells().saturating_sub(in_bounds_occupied));

    for y in 0..i32::from(grid.height) {
        for x in 0..i32::from(grid.width) {
            let position = Position { x, y };
            if !occupied.contains(&position) {
                candidates.push(position);
            }
        }
    }

    candidates
}
