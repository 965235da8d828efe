use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::grid::{Cell, GridSize};
use crate::input::Direction;

/// Board width used when no board file is given.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Board height used when no board file is given.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Smallest accepted board edge.
pub const MIN_GRID_EDGE: u16 = 2;

/// Largest accepted board edge. A 100-wide board needs 202 terminal columns.
pub const MAX_GRID_EDGE: u16 = 100;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 2;

/// Where every new snake starts, all segments stacked.
pub const START_CELL: Cell = Cell::new(1, 1);

/// Heading of every new snake.
pub const START_DIRECTION: Direction = Direction::Down;

/// Difficulty tier chosen before a session starts.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// Delay between two ticks of the outer loop.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        let millis = match self {
            Self::Easy => 900,
            Self::Medium => 600,
            Self::Hard => 300,
            Self::Extreme => 100,
        };
        Duration::from_millis(millis)
    }

    /// Score multiplier applied per grown segment.
    #[must_use]
    pub fn score_multiplier(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Extreme => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
            Self::Extreme => "EXTREME",
        }
    }
}

/// Raw board file layout: `{"x": 20, "y": 15, "obstacle_list": [[3, 4], ...]}`.
#[derive(Debug, Clone, Deserialize)]
struct BoardFile {
    x: u32,
    y: u32,
    #[serde(default)]
    obstacle_list: Vec<[i32; 2]>,
}

/// Board dimensions and obstacle cells supplied at session start.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardConfig {
    pub size: GridSize,
    pub obstacles: Vec<Cell>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            obstacles: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// Loads a board file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parses and validates board JSON.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let file: BoardFile = serde_json::from_str(raw)?;
        let size = validated_size(file.x, file.y)?;

        let obstacles: Vec<Cell> = file
            .obstacle_list
            .into_iter()
            .map(|[x, y]| Cell { x, y })
            .collect();

        if obstacles.contains(&START_CELL) {
            return Err(ConfigError::BlockedStart {
                x: START_CELL.x,
                y: START_CELL.y,
            });
        }

        Ok(Self { size, obstacles })
    }
}

fn validated_size(width: u32, height: u32) -> Result<GridSize, ConfigError> {
    let invalid = || ConfigError::InvalidDimensions {
        width,
        height,
        min: u32::from(MIN_GRID_EDGE),
        max: u32::from(MAX_GRID_EDGE),
    };

    let edges = MIN_GRID_EDGE..=MAX_GRID_EDGE;
    let width_cells = u16::try_from(width).map_err(|_| invalid())?;
    let height_cells = u16::try_from(height).map_err(|_| invalid())?;
    if !edges.contains(&width_cells) || !edges.contains(&height_cells) {
        return Err(invalid());
    }

    Ok(GridSize {
        width: width_cells,
        height: height_cells,
    })
}

/// Colors for every drawn element.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub apple: Color,
    pub obstacle: Color,
    /// Checkerboard background, even cells.
    pub grass_light: Color,
    /// Checkerboard background, odd cells.
    pub grass_dark: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub popup_title: Color,
}

/// Daylight palette.
pub const THEME_DAY: Theme = Theme {
    name: "Day",
    snake_head: Color::Blue,
    snake_body: Color::LightBlue,
    apple: Color::Red,
    obstacle: Color::Gray,
    grass_light: Color::Rgb(0, 230, 0),
    grass_dark: Color::Rgb(0, 179, 0),
    border_fg: Color::White,
    hud_text: Color::White,
    popup_title: Color::Red,
};

/// Night palette.
pub const THEME_NIGHT: Theme = Theme {
    name: "Night",
    snake_head: Color::Cyan,
    snake_body: Color::DarkGray,
    apple: Color::LightRed,
    obstacle: Color::Gray,
    grass_light: Color::Rgb(111, 104, 104),
    grass_dark: Color::Rgb(30, 29, 29),
    border_fg: Color::DarkGray,
    hud_text: Color::Gray,
    popup_title: Color::LightRed,
};

/// Glyph for the snake head, by heading.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀■";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "■▶";

pub const GLYPH_SNAKE_BODY: &str = "██";
pub const GLYPH_APPLE: &str = "()";
pub const GLYPH_OBSTACLE: &str = "▓▓";
pub const GLYPH_GRASS: &str = "  ";

/// Terminal columns used to draw one cell, keeping cells roughly square.
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;
