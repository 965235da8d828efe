use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::apple::Apple;
use crate::collision::{self, Outcome, TickView};
use crate::config::{BoardConfig, Difficulty, INITIAL_SNAKE_LENGTH, START_CELL, START_DIRECTION};
use crate::error::PlacementError;
use crate::grid::GridSize;
use crate::input::GameInput;
use crate::obstacles::ObstacleSet;
use crate::occupancy::OccupancyIndex;
use crate::score::score_for;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
    /// No free cell was left for the apple.
    BoardFull,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    SelfCollision,
    ObstacleCollision,
    WallCollision,
}

impl DeathReason {
    fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::HitSelf => Some(Self::SelfCollision),
            Outcome::HitObstacle => Some(Self::ObstacleCollision),
            Outcome::HitWall => Some(Self::WallCollision),
            Outcome::AteApple | Outcome::Clear => None,
        }
    }
}

/// Side effects the front end reacts to, e.g. with a sound.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    AppleEaten,
    Crash,
    BoardFull,
}

/// Result of one processed tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TickReport {
    pub outcome: Outcome,
    /// In emission order. Eating the last apple yields `AppleEaten` then `BoardFull`.
    pub events: Vec<GameEvent>,
}

/// Complete mutable game state for one session board.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub status: GameStatus,
    pub tick_count: u64,
    pub death_reason: Option<DeathReason>,
    obstacles: ObstacleSet,
    occupancy: OccupancyIndex,
    difficulty: Difficulty,
    rng: StdRng,
}

impl GameState {
    /// Creates a game on `board` with an entropy-seeded apple sequence.
    pub fn new(board: &BoardConfig, difficulty: Difficulty) -> Result<Self, PlacementError> {
        Self::with_rng(board, difficulty, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    pub fn new_with_seed(
        board: &BoardConfig,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<Self, PlacementError> {
        Self::with_rng(board, difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        board: &BoardConfig,
        difficulty: Difficulty,
        mut rng: StdRng,
    ) -> Result<Self, PlacementError> {
        let obstacles = ObstacleSet::new(board.size, board.obstacles.iter().copied());
        let occupancy = OccupancyIndex::new(&obstacles);
        let snake = fresh_snake();
        let apple = Apple::place(&mut rng, &occupancy, &snake)?;

        info!(
            width = board.size.width,
            height = board.size.height,
            obstacles = obstacles.len(),
            difficulty = difficulty.label(),
            "game created"
        );

        Ok(Self {
            snake,
            apple,
            status: GameStatus::Running,
            tick_count: 0,
            death_reason: None,
            obstacles,
            occupancy,
            difficulty,
            rng,
        })
    }

    /// Advances the simulation by one tick. Returns `None` when the game is
    /// not running (paused or finished) and nothing changed.
    pub fn advance(&mut self) -> Option<TickReport> {
        if self.status != GameStatus::Running {
            return None;
        }

        self.tick_count += 1;
        self.snake.walk();

        let outcome = collision::resolve(TickView {
            snake: &self.snake,
            apple: self.apple.cell,
            obstacles: &self.obstacles,
            bounds: self.bounds(),
        });

        let mut events = Vec::new();
        match outcome {
            Outcome::AteApple => self.eat_apple(&mut events),
            fatal if fatal.is_fatal() => {
                self.snake.kill();
                self.status = GameStatus::GameOver;
                self.death_reason = DeathReason::from_outcome(outcome);
                info!(
                    ?outcome,
                    score = self.score(),
                    length = self.snake.len(),
                    tick = self.tick_count,
                    "snake crashed"
                );
                events.push(GameEvent::Crash);
            }
            _ => {}
        }

        Some(TickReport { outcome, events })
    }

    fn eat_apple(&mut self, events: &mut Vec<GameEvent>) {
        self.snake.grow();
        events.push(GameEvent::AppleEaten);
        debug!(length = self.snake.len(), tick = self.tick_count, "apple eaten");

        if let Err(error) = self.apple.respawn(&mut self.rng, &self.occupancy, &self.snake) {
            warn!(%error, "apple cannot be placed");
            self.status = GameStatus::BoardFull;
            events.push(GameEvent::BoardFull);
        }
    }

    /// Applies one external input event. Front-end toggles (mute, night
    /// mode, quit) are ignored here.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Running {
                    self.snake.set_direction(direction);
                }
            }
            _ if self.restarts_on(input) => {
                if let Err(error) = self.reset() {
                    warn!(%error, "reset left no room for the apple");
                }
            }
            GameInput::Pause => self.toggle_pause(),
            GameInput::Resume => {
                if self.status == GameStatus::Paused {
                    self.toggle_pause();
                }
            }
            GameInput::Reset
            | GameInput::ToggleMute
            | GameInput::ToggleNightMode
            | GameInput::Quit => {}
        }
    }

    /// Reset always restarts; resume restarts only once the game has ended.
    #[must_use]
    pub fn restarts_on(&self, input: GameInput) -> bool {
        match input {
            GameInput::Reset => true,
            GameInput::Resume => self.is_finished(),
            _ => false,
        }
    }

    fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
        debug!(status = ?self.status, "pause toggled");
    }

    /// Starts over on the same board with a fresh snake and apple.
    pub fn reset(&mut self) -> Result<(), PlacementError> {
        let snake = fresh_snake();
        let placed = Apple::place(&mut self.rng, &self.occupancy, &snake);

        self.snake = snake;
        self.tick_count = 0;
        self.death_reason = None;

        match placed {
            Ok(apple) => {
                self.apple = apple;
                self.status = GameStatus::Running;
                info!("game reset");
                Ok(())
            }
            Err(error) => {
                self.status = GameStatus::BoardFull;
                Err(error)
            }
        }
    }

    /// Current score from snake length and difficulty.
    #[must_use]
    pub fn score(&self) -> u32 {
        score_for(self.snake.len(), self.difficulty)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::GameOver | GameStatus::BoardFull)
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.occupancy.size()
    }

    #[must_use]
    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

fn fresh_snake() -> Snake {
    Snake::new(START_CELL, START_DIRECTION, INITIAL_SNAKE_LENGTH)
}
