use tracing::warn;

use crate::grid::{Cell, GridSize};

/// Fixed set of blocked cells for one session.
#[derive(Debug, Clone)]
pub struct ObstacleSet {
    size: GridSize,
    cells: Vec<Cell>,
    mask: Vec<bool>,
}

impl ObstacleSet {
    /// Builds the set from raw cells. Off-board cells are dropped (the head
    /// always hits the wall first) and duplicates are merged.
    #[must_use]
    pub fn new(size: GridSize, raw: impl IntoIterator<Item = Cell>) -> Self {
        let mut mask = vec![false; size.total_cells()];
        let mut cells = Vec::new();
        let mut dropped = 0usize;

        for cell in raw {
            let Some(index) = size.index_of(cell) else {
                dropped += 1;
                continue;
            };
            if !mask[index] {
                mask[index] = true;
                cells.push(cell);
            }
        }

        if dropped > 0 {
            warn!(
                dropped,
                width = size.width,
                height = size.height,
                "ignoring obstacles outside the board"
            );
        }

        Self { size, cells, mask }
    }

    /// Board without obstacles.
    #[must_use]
    pub fn empty(size: GridSize) -> Self {
        Self::new(size, [])
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.size
            .index_of(cell)
            .is_some_and(|index| self.mask[index])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Obstacles in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    pub(crate) fn mask(&self) -> &[bool] {
        &self.mask
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, GridSize};

    use super::ObstacleSet;

    const SIZE: GridSize = GridSize {
        width: 5,
        height: 4,
    };

    #[test]
    fn duplicates_are_merged() {
        let set = ObstacleSet::new(SIZE, [Cell::new(2, 2), Cell::new(2, 2), Cell::new(0, 3)]);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Cell::new(2, 2)));
        assert!(set.contains(Cell::new(0, 3)));
        assert!(!set.contains(Cell::new(3, 3)));
    }

    #[test]
    fn off_board_obstacles_are_dropped() {
        let set = ObstacleSet::new(SIZE, [Cell::new(5, 0), Cell::new(-1, 2), Cell::new(4, 3)]);

        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![Cell::new(4, 3)]);
        assert!(!set.contains(Cell::new(-1, 2)));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set = ObstacleSet::empty(SIZE);
        assert!(set.is_empty());
        assert!(SIZE.cells().all(|cell| !set.contains(cell)));
    }
}
