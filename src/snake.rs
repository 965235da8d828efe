use crate::grid::Cell;
use crate::input::{direction_change_is_valid, Direction};

/// One body segment.
///
/// A freshly grown segment has no board position until the next walk shifts
/// it into the cell the tail just left.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Segment {
    Placed(Cell),
    Pending,
}

impl Segment {
    #[must_use]
    pub fn cell(self) -> Option<Cell> {
        match self {
            Self::Placed(cell) => Some(cell),
            Self::Pending => None,
        }
    }
}

/// Whether the snake can still move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Vitality {
    Alive,
    Dead,
}

/// Mutable snake state: ordered body, heading and buffered turn.
#[derive(Debug, Clone)]
pub struct Snake {
    head: Cell,
    /// Segments behind the head; index 0 here is body index 1.
    trailing: Vec<Segment>,
    direction: Direction,
    requested_direction: Option<Direction>,
    vitality: Vitality,
}

impl Snake {
    /// Creates a snake of `length` segments (at least one), all stacked on `start`.
    #[must_use]
    pub fn new(start: Cell, direction: Direction, length: usize) -> Self {
        Self {
            head: start,
            trailing: vec![Segment::Placed(start); length.saturating_sub(1)],
            direction,
            requested_direction: None,
            vitality: Vitality::Alive,
        }
    }

    /// Creates a snake from explicit cells, head first.
    #[must_use]
    pub fn from_cells(head: Cell, body: &[Cell], direction: Direction) -> Self {
        Self {
            head,
            trailing: body.iter().copied().map(Segment::Placed).collect(),
            direction,
            requested_direction: None,
            vitality: Vitality::Alive,
        }
    }

    /// Requests a new heading for the next walk.
    ///
    /// A reversal of the committed direction is ignored. Among several valid
    /// requests before one walk the last one wins.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.vitality == Vitality::Dead {
            return;
        }
        if direction_change_is_valid(self.direction, requested) {
            self.requested_direction = Some(requested);
        }
    }

    /// Shifts every segment into its predecessor's cell and moves the head one
    /// step. Never clamps; an off-board head is for the collision check to judge.
    pub fn walk(&mut self) {
        if self.vitality == Vitality::Dead {
            return;
        }

        if let Some(direction) = self.requested_direction.take() {
            self.direction = direction;
        }

        if !self.trailing.is_empty() {
            self.trailing.rotate_right(1);
            self.trailing[0] = Segment::Placed(self.head);
        }
        self.head = self.head.step(self.direction);
    }

    /// Appends a pending tail segment. Length grows immediately.
    pub fn grow(&mut self) {
        self.trailing.push(Segment::Pending);
    }

    /// Marks the snake dead; further walks and turns are ignored.
    pub fn kill(&mut self) {
        self.vitality = Vitality::Dead;
        self.requested_direction = None;
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.vitality == Vitality::Alive
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.head
    }

    /// Returns current segment count, pending segments included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trailing.len() + 1
    }

    /// Always false; a snake has at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        std::iter::once(Segment::Placed(self.head)).chain(self.trailing.iter().copied())
    }

    /// Iterates the cells of placed segments from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments().filter_map(Segment::cell)
    }

    /// Returns true if any placed segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells().any(|segment| segment == cell)
    }
}
