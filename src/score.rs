use crate::config::Difficulty;

/// Length at or below which the score stays at its floor of one point.
const BASE_SCORE_LENGTH: usize = 2;

/// Score shown for a snake of `length` segments at `difficulty`.
///
/// One point until the snake has grown past two segments, then
/// `(length - 1) * multiplier`.
#[must_use]
pub fn score_for(length: usize, difficulty: Difficulty) -> u32 {
    if length <= BASE_SCORE_LENGTH {
        return 1;
    }

    let grown = u32::try_from(length - 1).unwrap_or(u32::MAX);
    grown.saturating_mul(difficulty.score_multiplier())
}

/// Best score seen during this process. Never written to disk.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    #[must_use]
    pub fn get(self) -> u32 {
        self.best
    }

    /// Records a finished game. Returns true when `score` beats the old best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Difficulty;

    use super::{score_for, HighScore};

    #[test]
    fn starting_snake_scores_one_point() {
        for difficulty in [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Extreme,
        ] {
            assert_eq!(score_for(2, difficulty), 1);
        }
    }

    #[test]
    fn grown_snake_score_uses_multiplier() {
        assert_eq!(score_for(3, Difficulty::Easy), 2);
        assert_eq!(score_for(3, Difficulty::Medium), 4);
        assert_eq!(score_for(6, Difficulty::Hard), 15);
        assert_eq!(score_for(11, Difficulty::Extreme), 50);
    }

    #[test]
    fn high_score_only_moves_up() {
        let mut high = HighScore::default();

        assert!(high.record(12));
        assert!(!high.record(7));
        assert!(!high.record(12));
        assert_eq!(high.get(), 12);
    }
}
