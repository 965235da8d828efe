use crate::input::Direction;

/// Grid position in logical cell coordinates.
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
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Logical board dimensions in cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns true when `cell` lies inside the board.
    #[must_use]
    pub fn on_board(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.width)
            && cell.y < i32::from(self.height)
    }

    /// Row-major index of an on-board cell.
    #[must_use]
    pub fn index_of(self, cell: Cell) -> Option<usize> {
        if !self.on_board(cell) {
            return None;
        }
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        Some(y * usize::from(self.width) + x)
    }

    /// Inverse of [`GridSize::index_of`].
    #[must_use]
    pub fn cell_at(self, index: usize) -> Cell {
        let width = usize::from(self.width).max(1);
        // Both quotient and remainder are bounded by u16 dimensions.
        Cell {
            x: (index % width) as i32,
            y: (index / width) as i32,
        }
    }

    /// Iterates every on-board cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..i32::from(self.height))
            .flat_map(move |y| (0..i32::from(self.width)).map(move |x| Cell { x, y }))
    }
}

/// Square screen area covered by one cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub edge: u16,
}

/// Maps cell coordinates onto a pixel (or character) raster.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridGeometry {
    size: GridSize,
    cell_edge: u16,
}

impl GridGeometry {
    #[must_use]
    pub fn new(size: GridSize, cell_edge: u16) -> Self {
        Self { size, cell_edge }
    }

    #[must_use]
    pub fn size(self) -> GridSize {
        self.size
    }

    /// Raster rectangle of `cell`. Off-board cells map outside the board area.
    #[must_use]
    pub fn cell_to_pixel(self, cell: Cell) -> PixelRect {
        let edge = i32::from(self.cell_edge);
        PixelRect {
            x: cell.x * edge,
            y: cell.y * edge,
            edge: self.cell_edge,
        }
    }

    #[must_use]
    pub fn on_board(self, cell: Cell) -> bool {
        self.size.on_board(cell)
    }

    /// Board extent on the raster as `(width, height)`.
    #[must_use]
    pub fn pixel_extent(self) -> (u32, u32) {
        let edge = u32::from(self.cell_edge);
        (
            u32::from(self.size.width) * edge,
            u32::from(self.size.height) * edge,
        )
    }
}
