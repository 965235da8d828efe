use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::PlacementError;
use crate::grid::Cell;
use crate::occupancy::OccupancyIndex;
use crate::snake::Snake;

/// The single apple on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub cell: Cell,
}

impl Apple {
    #[must_use]
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    /// Places an apple on a uniformly random free cell.
    pub fn place<R: Rng + ?Sized>(
        rng: &mut R,
        occupancy: &OccupancyIndex,
        snake: &Snake,
    ) -> Result<Self, PlacementError> {
        spawn_cell(rng, occupancy, snake).map(Self::at)
    }

    /// Moves this apple to a new free cell after it was eaten. On failure the
    /// apple keeps its old cell.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        occupancy: &OccupancyIndex,
        snake: &Snake,
    ) -> Result<(), PlacementError> {
        self.cell = spawn_cell(rng, occupancy, snake)?;
        Ok(())
    }
}

/// Picks a cell free of obstacles and placed snake segments.
pub fn spawn_cell<R: Rng + ?Sized>(
    rng: &mut R,
    occupancy: &OccupancyIndex,
    snake: &Snake,
) -> Result<Cell, PlacementError> {
    let candidates = occupancy.free_cells(snake.cells());

    candidates
        .choose(rng)
        .copied()
        .ok_or(PlacementError::NoFreeCell {
            size: occupancy.size(),
        })
}
