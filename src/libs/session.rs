//! Session statistics accumulated across completed phases.
//!
//! The accumulator lives for the lifetime of the process and is mutated
//! only by the orchestration loop, immediately after a timer run returns.
//! A phase interrupted by a process-level signal is never recorded.

use crate::libs::config::Config;
use crate::libs::formatter::format_duration;
use chrono::TimeDelta;
use std::time::Duration;

fn to_delta(duration: Duration) -> TimeDelta {
    TimeDelta::from_std(duration).unwrap_or_else(|_| TimeDelta::zero())
}

/// Completed-phase counters and cumulative durations, plus the immutable
/// settings the tie-break rule depends on.
#[derive(Debug, Clone)]
pub struct Session {
    /// Number of completed focus phases.
    pub focus_count: u64,
    /// Cumulative configured duration of completed focus phases.
    pub total_focus_time: TimeDelta,
    /// Number of completed break phases.
    pub break_count: u64,
    /// Cumulative configured duration of completed break phases.
    pub total_break_time: TimeDelta,
    settings: Config,
}

/// Pure projection of a [`Session`] into display-ready strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub focus_sessions: u64,
    pub total_focus_time: String,
    pub break_sessions: u64,
    pub total_break_time: String,
}

impl Session {
    pub fn new(settings: Config) -> Self {
        Session {
            focus_count: 0,
            total_focus_time: TimeDelta::zero(),
            break_count: 0,
            total_break_time: TimeDelta::zero(),
            settings,
        }
    }

    pub fn settings(&self) -> &Config {
        &self.settings
    }

    /// Records one completed focus phase of the given configured duration.
    pub fn record_focus_completion(&mut self, duration: Duration) {
        self.focus_count += 1;
        self.total_focus_time = self.total_focus_time + to_delta(duration);
    }

    /// Records one completed break phase of the given configured duration.
    pub fn record_break_completion(&mut self, duration: Duration) {
        self.break_count += 1;
        self.total_break_time = self.total_break_time + to_delta(duration);
    }

    /// True when the upcoming break should be the long one: after every
    /// `sessions_before_long_break`-th completed focus phase.
    ///
    /// `sessions_before_long_break >= 1` is guaranteed by
    /// [`Config::validate`].
    pub fn is_long_break_due(&self) -> bool {
        self.focus_count % self.settings.sessions_before_long_break == 0
    }

    /// Length of the upcoming break, long or short per the tie-break rule.
    pub fn next_break_duration(&self) -> Duration {
        if self.is_long_break_due() {
            self.settings.long_break_duration()
        } else {
            self.settings.short_break_duration()
        }
    }

    /// Minutes of the upcoming break, for display.
    pub fn next_break_minutes(&self) -> u64 {
        if self.is_long_break_due() {
            self.settings.long_break_minutes
        } else {
            self.settings.short_break_minutes
        }
    }

    /// Formats the current counters for display. Never mutates the session;
    /// calling it repeatedly without intervening records yields identical
    /// output.
    pub fn report(&self) -> SessionReport {
        SessionReport {
            focus_sessions: self.focus_count,
            total_focus_time: format_duration(&self.total_focus_time),
            break_sessions: self.break_count,
            total_break_time: format_duration(&self.total_break_time),
        }
    }
}
