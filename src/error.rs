use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::grid::GridSize;

/// Apple placement failure.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    /// Every cell is covered by an obstacle or the snake.
    #[error("no free cell left on the {}x{} board", .size.width, .size.height)]
    NoFreeCell { size: GridSize },
}

/// Board configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read board file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed board file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("board edges must be between {min} and {max} cells, got {width}x{height}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        min: u32,
        max: u32,
    },

    #[error("start cell ({x}, {y}) is covered by an obstacle")]
    BlockedStart { x: i32, y: i32 },
}
