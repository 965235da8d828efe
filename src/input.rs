use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step as `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events delivered by the front end.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Toggles between running and paused.
    Pause,
    /// Resumes a paused game, or starts a new one after the game ended.
    Resume,
    Reset,
    ToggleMute,
    ToggleNightMode,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps one key press to a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Char('p' | 'P' | ' ') => GameInput::Pause,
        KeyCode::Enter => GameInput::Resume,
        KeyCode::Char('r' | 'R') => GameInput::Reset,
        KeyCode::Char('m' | 'M') => GameInput::ToggleMute,
        KeyCode::Char('n' | 'N') => GameInput::ToggleNightMode,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Drains pending terminal events between ticks.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for terminal events and returns every mapped
    /// input that arrived, in order.
    pub fn poll_inputs(&mut self, timeout: Duration) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();
        if !event::poll(timeout)? {
            return Ok(inputs);
        }

        loop {
            if let Event::Key(key) = event::read()? {
                inputs.extend(map_key(key));
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }

        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::{direction_change_is_valid, map_key, Direction, GameInput};

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn opposite_steps_cancel_out() {
        for direction in ALL {
            let (dx, dy) = direction.delta();
            let (back_x, back_y) = direction.opposite().delta();

            assert_eq!((dx + back_x, dy + back_y), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Direction::Up.delta(), (0, -1));
    }

    #[test]
    fn only_the_reverse_turn_is_rejected() {
        for current in ALL {
            let allowed: Vec<Direction> = ALL
                .into_iter()
                .filter(|next| direction_change_is_valid(current, *next))
                .collect();

            assert_eq!(allowed.len(), 3);
            assert!(!allowed.contains(&current.opposite()));
        }
    }

    #[test]
    fn control_keys_map_to_session_inputs() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(GameInput::Pause));
        assert_eq!(map_key(press(KeyCode::Char('P'))), Some(GameInput::Pause));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(GameInput::Resume));
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(GameInput::Reset));
        assert_eq!(map_key(press(KeyCode::Char('M'))), Some(GameInput::ToggleMute));
    }

    #[test]
    fn arrow_and_letter_keys_map_to_directions() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            map_key(press(KeyCode::Left)),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('w'))),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(map_key(press(KeyCode::Char('n'))), Some(GameInput::ToggleNightMode));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert_eq!(map_key(release), None);
    }
}
