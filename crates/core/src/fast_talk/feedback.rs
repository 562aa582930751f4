use serde::{Deserialize, Serialize};

const NO_QUESTIONS: &str = "You didn't answer any questions together.";
const PERFECT: &str = "Perfect score! You two are incredibly in sync!";
const STARTED: &str = "You've started your journey together! Keep learning about each other!";
const NOTHING: &str =
    "Every couple starts somewhere! Try again and enjoy getting to know each other!";

/// Minimum percentage for each band, highest first.
const BANDS: [(u64, &str); 8] = [
    (90, "Outstanding! You communicate wonderfully together!"),
    (80, "Amazing connection! You really understand each other!"),
    (70, "Great teamwork! Your bond is strong!"),
    (60, "Good chemistry! You're on the right track as a couple!"),
    (50, "You got half right! Keep talking and learning about each other!"),
    (40, "Room for growth, but that's what relationships are about!"),
    (30, "Keep connecting! Every conversation brings you closer!"),
    (20, "Don't give up! Communication takes practice!"),
];

/// Encouragement for `score` out of `total` questions.
#[must_use]
pub fn feedback_message(score: u32, total: usize) -> &'static str {
    if total == 0 {
        return NO_QUESTIONS;
    }
    let total = u64::try_from(total).unwrap_or(u64::MAX);
    let scaled = u64::from(score).saturating_mul(100);
    if scaled >= total.saturating_mul(100) {
        return PERFECT;
    }
    if let Some(&(_, message)) = BANDS
        .iter()
        .find(|(min, _)| scaled >= min.saturating_mul(total))
    {
        return message;
    }
    if score > 0 { STARTED } else { NOTHING }
}

/// Final tally of a Fast-Talk run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub total: usize,
    pub answered: usize,
    pub failed: usize,
}

impl SessionSummary {
    /// Whole-number percentage, rounded down; 0 without questions.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let total = u64::try_from(self.total).unwrap_or(u64::MAX);
        let pct = u64::from(self.score).saturating_mul(100) / total;
        u32::try_from(pct).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        feedback_message(self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_questions_has_its_own_message() {
        assert_eq!(feedback_message(0, 0), NO_QUESTIONS);
    }

    #[test]
    fn perfect_and_empty_scores() {
        assert_eq!(feedback_message(4, 4), PERFECT);
        assert_eq!(feedback_message(0, 4), NOTHING);
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert_eq!(feedback_message(9, 10), BANDS[0].1);
        assert_eq!(feedback_message(1, 2), BANDS[4].1);
        assert_eq!(feedback_message(2, 10), BANDS[7].1);
        assert_eq!(feedback_message(1, 10), STARTED);
    }

    #[test]
    fn thirds_do_not_round_up() {
        // 2/3 is 66.6%, which sits in the 60 band.
        assert_eq!(feedback_message(2, 3), BANDS[3].1);
        assert_eq!(feedback_message(1, 3), BANDS[6].1);
    }

    #[test]
    fn summary_percentage_rounds_down() {
        let summary = SessionSummary {
            score: 2,
            total: 3,
            answered: 2,
            failed: 1,
        };
        assert_eq!(summary.percentage(), 66);
        assert_eq!(summary.message(), BANDS[3].1);
    }
}
