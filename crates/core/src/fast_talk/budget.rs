use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use thiserror::Error;

/// Seconds each question gets before it times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeBudget(NonZeroU32);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeBudgetError {
    #[error("please enter a valid time in seconds (got {raw:?})")]
    NotANumber { raw: String },
    #[error("time per question must be positive (got {raw:?})")]
    NotPositive { raw: String },
}

impl TimeBudget {
    /// Quick-pick values offered next to the free-form input.
    pub const PRESETS: [u32; 5] = [15, 30, 60, 90, 120];

    /// # Errors
    ///
    /// Returns `TimeBudgetError::NotPositive` for zero.
    pub fn from_secs(secs: u32) -> Result<Self, TimeBudgetError> {
        NonZeroU32::new(secs)
            .map(Self)
            .ok_or_else(|| TimeBudgetError::NotPositive {
                raw: secs.to_string(),
            })
    }

    /// Parse user input such as `"45"`.
    ///
    /// # Errors
    ///
    /// Returns `TimeBudgetError::NotANumber` for blank or non-numeric text and
    /// `TimeBudgetError::NotPositive` for zero or negative values.
    pub fn parse(raw: &str) -> Result<Self, TimeBudgetError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed.parse().map_err(|_| TimeBudgetError::NotANumber {
            raw: raw.to_string(),
        })?;
        if value <= 0 {
            return Err(TimeBudgetError::NotPositive {
                raw: raw.to_string(),
            });
        }
        let secs = u32::try_from(value).map_err(|_| TimeBudgetError::NotANumber {
            raw: raw.to_string(),
        })?;
        Self::from_secs(secs)
    }

    #[must_use]
    pub fn secs(self) -> u32 {
        self.0.get()
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self(NonZeroU32::MIN.saturating_add(59))
    }
}

/// Seconds left at or below which the timer is shown as running out.
pub const LOW_TIME_SECS: u32 = 10;

/// Formats seconds as `mm:ss`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_minute() {
        assert_eq!(TimeBudget::default().secs(), 60);
    }

    #[test]
    fn parse_accepts_positive_whole_seconds() {
        assert_eq!(TimeBudget::parse(" 45 ").unwrap().secs(), 45);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            TimeBudget::parse("abc"),
            Err(TimeBudgetError::NotANumber { .. })
        ));
        assert!(matches!(
            TimeBudget::parse(""),
            Err(TimeBudgetError::NotANumber { .. })
        ));
        assert!(matches!(
            TimeBudget::parse("0"),
            Err(TimeBudgetError::NotPositive { .. })
        ));
        assert!(matches!(
            TimeBudget::parse("-5"),
            Err(TimeBudgetError::NotPositive { .. })
        ));
        assert!(matches!(
            TimeBudget::parse("1.5"),
            Err(TimeBudgetError::NotANumber { .. })
        ));
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
    }
}
