//! Runtime configuration for the pomodoro loop.
//!
//! All settings are collected once at startup from command-line flags and
//! are immutable afterwards. Validation happens before any timer starts:
//! the long-break tie-break divides by `sessions_before_long_break`, so a
//! zero value must never reach the run loop.

use std::time::Duration;
use thiserror::Error;

/// Errors produced by [`Config::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sessions before long break must be at least 1 (got {0})")]
    ZeroSessionsBeforeLongBreak(u64),
    #[error("{0} duration must be at least 1 minute")]
    ZeroDuration(&'static str),
}

/// Validated pomodoro settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Focus session length in minutes.
    pub focus_minutes: u64,
    /// Short break length in minutes.
    pub short_break_minutes: u64,
    /// Long break length in minutes, used after every
    /// `sessions_before_long_break`-th completed focus session.
    pub long_break_minutes: u64,
    /// Number of completed focus sessions between long breaks. Must be at
    /// least 1.
    pub sessions_before_long_break: u64,
    /// Play an audible tone at phase start.
    pub sound_enabled: bool,
    /// Send a desktop notification when a phase completes.
    pub notifications_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            sessions_before_long_break: 4,
            sound_enabled: true,
            notifications_enabled: true,
        }
    }
}

impl Config {
    /// Checks the configuration before the run loop starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sessions_before_long_break == 0 {
            return Err(ConfigError::ZeroSessionsBeforeLongBreak(self.sessions_before_long_break));
        }
        if self.focus_minutes == 0 {
            return Err(ConfigError::ZeroDuration("focus"));
        }
        if self.short_break_minutes == 0 {
            return Err(ConfigError::ZeroDuration("short break"));
        }
        if self.long_break_minutes == 0 {
            return Err(ConfigError::ZeroDuration("long break"));
        }
        Ok(())
    }

    pub fn focus_duration(&self) -> Duration {
        Duration::from_secs(self.focus_minutes * 60)
    }

    pub fn short_break_duration(&self) -> Duration {
        Duration::from_secs(self.short_break_minutes * 60)
    }

    pub fn long_break_duration(&self) -> Duration {
        Duration::from_secs(self.long_break_minutes * 60)
    }
}
