//! Time formatting utilities for the countdown display and statistics.
//!
//! Two formats are used throughout the application:
//!
//! - `HH:MM` for accumulated statistics (hours are not capped, negative
//!   durations clamp to `00:00`)
//! - `MM:SS` for the live countdown (minutes are total minutes, so a
//!   90-minute phase starts at `90:00`)

use chrono::Duration;

/// Formats a chrono::Duration into a standardized "HH:MM" string.
///
/// # Examples
///
/// ```rust
/// use pomo::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::zero()), "00:00");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    // Clamp negatives to zero rather than rendering a sign
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a countdown as "MM:SS" with total minutes.
///
/// # Examples
///
/// ```rust
/// use pomo::libs::formatter::format_clock;
/// use std::time::Duration;
///
/// assert_eq!(format_clock(&Duration::from_secs(25 * 60)), "25:00");
/// assert_eq!(format_clock(&Duration::from_secs(90 * 60)), "90:00");
/// assert_eq!(format_clock(&Duration::from_secs(61)), "01:01");
/// ```
pub fn format_clock(duration: &std::time::Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
