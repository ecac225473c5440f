//! Display implementation for pomo application messages.
//!
//! All user-facing text is defined in one place so wording stays consistent
//! across console output, notifications, and log records.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === PHASE MESSAGES ===
            Message::PhaseStarting(mode, minutes) => format!("Starting {} session for {} minutes", mode, minutes),
            Message::FocusCompleted(break_minutes) => {
                format!("FOCUS session completed! Time for a {} minute break", break_minutes)
            }
            Message::BreakCompleted => "BREAK session completed! Great job!".to_string(),
            Message::LongBreakDue => "🎉 Long break this time!".to_string(),
            Message::ControlsHint => "Controls: [Enter] to pause/resume, Ctrl+C to quit".to_string(),

            // === NOTIFICATION MESSAGES ===
            Message::NotificationTitle => "Pomodoro Timer".to_string(),
            Message::NotifyFocusCompleted(mode) => format!("{} session completed!", mode),
            Message::NotifyBreakCompleted(mode) => format!("{} session completed! Great job!", mode),

            // === SESSION MESSAGES ===
            Message::SessionStatsTitle => "📊 Session Statistics:".to_string(),
            Message::StoppedByUser => "Timer stopped by user".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigValidationFailed(error) => format!("Invalid configuration: {}", error),

            // === SHUTDOWN MESSAGES ===
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
        };
        write!(f, "{}", text)
    }
}
