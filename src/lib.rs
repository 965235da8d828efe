//! Grid snake: a snake that grows on a fixed board with obstacles.
//!
//! The game core (`grid`, `obstacles`, `occupancy`, `snake`, `apple`,
//! `collision`, `game`) is synchronous and timing-free; one call to
//! [`game::GameState::advance`] is one tick. The terminal front end in
//! `renderer`, `ui`, `input` and `terminal_runtime` drives it.

pub mod apple;
pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod obstacles;
pub mod occupancy;
pub mod renderer;
pub mod score;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
