use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tracing::{error, warn};

/// Terminal type the game loop draws into.
pub type GameTerminal = Terminal<CrosstermBackend<Stdout>>;

const BELL: &[u8] = b"\x07";

/// Full-screen raw-mode terminal held for the lifetime of the game loop.
///
/// Dropping it, or panicking while it is open, restores the shell screen.
pub struct Screen {
    terminal: GameTerminal,
}

impl Screen {
    /// Switches stdout to raw mode on the alternate screen.
    pub fn open() -> io::Result<Self> {
        restore_on_panic();
        enable_raw_mode()?;

        let opened = execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

        opened.map(|terminal| Self { terminal }).map_err(|open_error| {
            if let Err(restore_error) = restore() {
                warn!(%restore_error, "terminal left half-initialised");
            }
            open_error
        })
    }

    /// Draws one full frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(render).map(|_| ())
    }

    /// Rings the terminal bell, the only sound a terminal offers.
    pub fn ring_bell(&mut self) -> io::Result<()> {
        ring(self.terminal.backend_mut())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if let Err(restore_error) = restore() {
            error!(%restore_error, "failed to restore terminal");
        }
    }
}

fn ring(out: &mut impl Write) -> io::Result<()> {
    out.write_all(BELL)?;
    out.flush()
}

fn restore_on_panic() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}

/// Leaves the alternate screen even when raw mode could not be disabled.
fn restore() -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    raw_mode
}
