use chrono::{DateTime, Utc};
use couple_core::fast_talk::format_clock;

#[must_use]
pub fn format_timer(seconds: u32) -> String {
    format_clock(seconds)
}

#[must_use]
pub fn format_time_of_day(value: DateTime<Utc>) -> String {
    value.format("%H:%M:%S").to_string()
}
