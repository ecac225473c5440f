//! Console rendering for headers, the countdown line, and statistics.

use crate::libs::formatter::format_clock;
use crate::libs::session::Session;
use crate::libs::timer::{Timer, TimerState};
use prettytable::{row, Table};
use std::io::{self, Write};
use std::time::Duration;

/// Width of the countdown progress bar in block characters.
pub const PROGRESS_BAR_WIDTH: usize = 20;

pub struct View {}

impl View {
    /// Prints a section header with an `=` underline.
    pub fn header(text: &str) {
        println!("\n{}", text);
        println!("{}", "=".repeat(text.chars().count()));
    }

    /// Rewrites the countdown line in place.
    pub fn progress(timer: &Timer) {
        print!("\r{}", progress_line(timer));
        let _ = io::stdout().flush();
    }

    /// Prints the session statistics table.
    pub fn session_stats(session: &Session) {
        let report = session.report();
        let mut table = Table::new();
        table.add_row(row!["Focus Sessions", report.focus_sessions]);
        table.add_row(row!["Total Focus Time", report.total_focus_time]);
        table.add_row(row!["Break Sessions", report.break_sessions]);
        table.add_row(row!["Total Break Time", report.total_break_time]);
        table.printstd();
    }
}

/// Builds the one-line countdown rendering: state glyph, mode label, MM:SS
/// remaining, and the progress bar.
pub fn progress_line(timer: &Timer) -> String {
    let glyph = match timer.state {
        TimerState::Paused => "⏸",
        _ => "▶",
    };
    let filled = bar_fill(timer.elapsed(), timer.duration);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(PROGRESS_BAR_WIDTH - filled));
    format!("{} [{}] {} [{}]", glyph, timer.mode, format_clock(&timer.remaining), bar)
}

/// Number of filled bar cells for `elapsed` out of `duration`:
/// `floor(elapsed / duration * width)`, always within
/// `[0, PROGRESS_BAR_WIDTH]`.
pub fn bar_fill(elapsed: Duration, duration: Duration) -> usize {
    if duration.is_zero() {
        return PROGRESS_BAR_WIDTH;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ((ratio * PROGRESS_BAR_WIDTH as f64).floor() as usize).min(PROGRESS_BAR_WIDTH)
}
