use tracing::info;

use crate::config::{Difficulty, Theme, THEME_DAY, THEME_NIGHT};
use crate::score::HighScore;

/// Settings and records that outlive a single game.
///
/// Owned by the front end and handed to whoever needs it; the game core
/// only receives the difficulty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    pub difficulty: Difficulty,
    pub night_mode: bool,
    pub muted: bool,
    high_score: HighScore,
}

impl Session {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn toggle_night_mode(&mut self) {
        self.night_mode = !self.night_mode;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score.get()
    }

    /// Folds a finished game's score into the high score.
    pub fn record_final_score(&mut self, score: u32) -> bool {
        let improved = self.high_score.record(score);
        if improved {
            info!(score, "new high score");
        }
        improved
    }

    #[must_use]
    pub fn theme(&self) -> &'static Theme {
        if self.night_mode {
            &THEME_NIGHT
        } else {
            &THEME_DAY
        }
    }
}
