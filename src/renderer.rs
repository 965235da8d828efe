use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    Theme, GLYPH_APPLE, GLYPH_GRASS, GLYPH_OBSTACLE, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, TERMINAL_COLUMNS_PER_CELL,
};
use crate::game::{GameState, GameStatus};
use crate::grid::{Cell, GridGeometry};
use crate::input::Direction;
use crate::session::Session;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_board_full_menu, render_game_over_menu, render_pause_menu};

/// Frame-level values the game state does not carry.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    /// High score before the current game ended, for the "new high" banner.
    pub previous_high_score: u32,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, session: &Session, info: FrameInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, session);
    let theme = session.theme();

    // Terminal rows are one cell tall, so the raster edge is one row.
    let geometry = GridGeometry::new(state.bounds(), 1);
    let (columns, rows) = geometry.pixel_extent();
    let board_area = centered_board(
        play_area,
        bordered_span(columns.saturating_mul(u32::from(TERMINAL_COLUMNS_PER_CELL))),
        bordered_span(rows),
    );

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_grass(frame, inner, geometry, theme);
    render_obstacles(frame, inner, geometry, state, theme);
    render_apple(frame, inner, geometry, state, theme);
    render_snake(frame, inner, geometry, state, theme);

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            state.score(),
            info.previous_high_score,
            state.death_reason,
            theme,
        ),
        GameStatus::BoardFull => render_board_full_menu(frame, play_area, state.score(), theme),
        GameStatus::Running => {}
    }
}

/// Terminal span of a board edge plus its two border cells.
fn bordered_span(cells: u32) -> u16 {
    u16::try_from(cells.saturating_add(2)).unwrap_or(u16::MAX)
}

fn centered_board(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

fn render_grass(frame: &mut Frame<'_>, inner: Rect, geometry: GridGeometry, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for cell in geometry.size().cells() {
        let Some((x, y)) = cell_to_terminal(inner, geometry, cell) else {
            continue;
        };
        let shade = if (cell.x + cell.y) % 2 == 0 {
            theme.grass_light
        } else {
            theme.grass_dark
        };
        buffer.set_string(x, y, GLYPH_GRASS, Style::new().bg(shade));
    }
}

fn render_obstacles(
    frame: &mut Frame<'_>,
    inner: Rect,
    geometry: GridGeometry,
    state: &GameState,
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();
    for cell in state.obstacles().iter() {
        if let Some((x, y)) = cell_to_terminal(inner, geometry, *cell) {
            buffer.set_string(x, y, GLYPH_OBSTACLE, Style::new().fg(theme.obstacle));
        }
    }
}

fn render_apple(
    frame: &mut Frame<'_>,
    inner: Rect,
    geometry: GridGeometry,
    state: &GameState,
    theme: &Theme,
) {
    let Some((x, y)) = cell_to_terminal(inner, geometry, state.apple.cell) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_APPLE,
        Style::new().fg(theme.apple).add_modifier(Modifier::BOLD),
    );
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    geometry: GridGeometry,
    state: &GameState,
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins where segments overlap.
    let cells: Vec<Cell> = state.snake.cells().collect();
    for (index, cell) in cells.iter().enumerate().rev() {
        let Some((x, y)) = cell_to_terminal(inner, geometry, *cell) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                head_glyph(state.snake.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn cell_to_terminal(inner: Rect, geometry: GridGeometry, cell: Cell) -> Option<(u16, u16)> {
    if !geometry.on_board(cell) {
        return None;
    }

    let rect = geometry.cell_to_pixel(cell);
    let column = u16::try_from(rect.x).ok()?;
    let row = u16::try_from(rect.y).ok()?;

    let x = inner
        .x
        .saturating_add(column.saturating_mul(TERMINAL_COLUMNS_PER_CELL));
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
