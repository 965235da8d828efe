use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{BoardConfig, Difficulty};
use grid_snake::game::{GameEvent, GameState, GameStatus};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::logging::init_file_logging;
use grid_snake::renderer::{self, FrameInfo};
use grid_snake::session::Session;
use grid_snake::terminal_runtime::Screen;
use tracing::{error, info};

/// Upper bound on how long one input poll blocks, so the frame keeps redrawing.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board file: {"x": 20, "y": 20, "obstacle_list": [[3, 4], ...]}.
    board: Option<PathBuf>,

    /// Difficulty tier; sets tick speed and score multiplier.
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Start with the night palette.
    #[arg(long)]
    night: bool,

    /// Start without the terminal bell.
    #[arg(long)]
    mute: bool,

    /// Seed for a reproducible apple sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(error) = init_file_logging(path) {
            eprintln!("Failed to open log file {}: {error}", path.display());
            return ExitCode::FAILURE;
        }
    }

    let board = match &cli.board {
        Some(path) => match BoardConfig::load(path) {
            Ok(board) => board,
            Err(error) => {
                eprintln!("{error}");
                return ExitCode::FAILURE;
            }
        },
        None => BoardConfig::default(),
    };

    let mut session = Session::new(cli.difficulty);
    session.night_mode = cli.night;
    session.muted = cli.mute;

    let created = match cli.seed {
        Some(seed) => GameState::new_with_seed(&board, session.difficulty, seed),
        None => GameState::new(&board, session.difficulty),
    };
    let state = match created {
        Ok(state) => state,
        Err(error) => {
            eprintln!("Cannot start: {error}");
            return ExitCode::FAILURE;
        }
    };

    match run(state, session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "terminal loop failed");
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut state: GameState, mut session: Session) -> io::Result<()> {
    let mut screen = Screen::open()?;
    let mut input = InputHandler::new();
    let mut previous_high_score = session.high_score();
    let mut last_tick = Instant::now();

    info!(difficulty = session.difficulty.label(), "session started");

    loop {
        let frame_info = FrameInfo {
            previous_high_score,
        };
        screen.draw(|frame| renderer::render(frame, &state, &session, frame_info))?;

        let tick_interval = session.difficulty.tick_interval();
        let until_tick = tick_interval.saturating_sub(last_tick.elapsed());
        for game_input in input.poll_inputs(until_tick.min(FRAME_INTERVAL))? {
            match game_input {
                GameInput::Quit => return Ok(()),
                GameInput::ToggleMute => session.toggle_mute(),
                GameInput::ToggleNightMode => session.toggle_night_mode(),
                restart if state.restarts_on(restart) => {
                    previous_high_score = session.high_score();
                    state.apply_input(restart);
                    last_tick = Instant::now();
                }
                other => state.apply_input(other),
            }
        }

        if last_tick.elapsed() < tick_interval {
            continue;
        }
        last_tick = Instant::now();

        let Some(report) = state.advance() else {
            continue;
        };

        let audible = report
            .events
            .iter()
            .any(|event| matches!(event, GameEvent::AppleEaten | GameEvent::Crash));
        if audible && !session.muted {
            screen.ring_bell()?;
        }

        if matches!(state.status, GameStatus::GameOver | GameStatus::BoardFull) {
            previous_high_score = session.high_score();
            session.record_final_score(state.score());
        }
    }
}
