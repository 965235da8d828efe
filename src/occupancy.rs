use crate::grid::{Cell, GridSize};
use crate::obstacles::ObstacleSet;

/// Occupancy of board cells by obstacles and snake segments.
///
/// The obstacle layer is fixed for the session and copied once. Snake cells
/// change every tick, so they are passed to each query instead of being
/// tracked here.
#[derive(Debug, Clone)]
pub struct OccupancyIndex {
    size: GridSize,
    blocked: Vec<bool>,
}

impl OccupancyIndex {
    #[must_use]
    pub fn new(obstacles: &ObstacleSet) -> Self {
        Self {
            size: obstacles.size(),
            blocked: obstacles.mask().to_vec(),
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Every on-board cell not covered by an obstacle or a snake cell, in
    /// row-major order.
    #[must_use]
    pub fn free_cells(&self, snake_cells: impl IntoIterator<Item = Cell>) -> Vec<Cell> {
        let mut occupied = self.blocked.clone();
        for cell in snake_cells {
            if let Some(index) = self.size.index_of(cell) {
                occupied[index] = true;
            }
        }

        occupied
            .iter()
            .enumerate()
            .filter(|(_, taken)| !**taken)
            .map(|(index, _)| self.size.cell_at(index))
            .collect()
    }

    /// Returns true if an obstacle or one of `snake_cells` covers `cell`.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell, snake_cells: impl IntoIterator<Item = Cell>) -> bool {
        let blocked = self
            .size
            .index_of(cell)
            .is_some_and(|index| self.blocked[index]);

        blocked || snake_cells.into_iter().any(|segment| segment == cell)
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, GridSize};
    use crate::obstacles::ObstacleSet;

    use super::OccupancyIndex;

    fn board() -> GridSize {
        GridSize {
            width: 20,
            height: 20,
        }
    }

    #[test]
    fn free_cell_count_excludes_obstacles() {
        let obstacles = ObstacleSet::new(
            board(),
            [Cell::new(3, 3), Cell::new(4, 3), Cell::new(19, 19)],
        );
        let index = OccupancyIndex::new(&obstacles);

        let free = index.free_cells([]);

        assert_eq!(free.len(), board().total_cells() - obstacles.len());
        assert!(free.iter().all(|cell| !obstacles.contains(*cell)));
    }

    #[test]
    fn free_cells_exclude_snake_and_ignore_off_board_segments() {
        let obstacles = ObstacleSet::empty(GridSize {
            width: 3,
            height: 2,
        });
        let index = OccupancyIndex::new(&obstacles);

        let free = index.free_cells([Cell::new(0, 0), Cell::new(1, 0), Cell::new(-1, 0)]);

        assert_eq!(
            free,
            vec![
                Cell::new(2, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(2, 1)
            ]
        );
    }

    #[test]
    fn free_cells_is_stable_for_equal_inputs() {
        let obstacles = ObstacleSet::new(board(), [Cell::new(5, 5)]);
        let index = OccupancyIndex::new(&obstacles);
        let snake = [Cell::new(1, 1), Cell::new(1, 2)];

        assert_eq!(index.free_cells(snake), index.free_cells(snake));
    }

    #[test]
    fn occupancy_checks_obstacles_and_snake() {
        let obstacles = ObstacleSet::new(board(), [Cell::new(7, 2)]);
        let index = OccupancyIndex::new(&obstacles);
        let snake = [Cell::new(1, 1)];

        assert!(index.is_occupied(Cell::new(7, 2), snake));
        assert!(index.is_occupied(Cell::new(1, 1), snake));
        assert!(!index.is_occupied(Cell::new(2, 1), snake));
        assert!(!index.is_occupied(Cell::new(-3, 1), snake));
    }

    #[test]
    fn full_board_has_no_free_cells() {
        let size = GridSize {
            width: 2,
            height: 2,
        };
        let obstacles = ObstacleSet::new(size, [Cell::new(1, 0), Cell::new(0, 1)]);
        let index = OccupancyIndex::new(&obstacles);

        assert!(index.free_cells([Cell::new(0, 0), Cell::new(1, 1)]).is_empty());
    }
}
