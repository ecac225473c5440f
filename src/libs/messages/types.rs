#[derive(Debug, Clone)]
pub enum Message {
    // === PHASE MESSAGES ===
    PhaseStarting(String, u64), // mode label, minutes
    FocusCompleted(u64),        // upcoming break minutes
    BreakCompleted,
    LongBreakDue,
    ControlsHint,

    // === NOTIFICATION MESSAGES ===
    NotificationTitle,
    NotifyFocusCompleted(String), // mode label
    NotifyBreakCompleted(String), // mode label

    // === SESSION MESSAGES ===
    SessionStatsTitle,
    StoppedByUser,

    // === CONFIGURATION MESSAGES ===
    ConfigValidationFailed(String), // error

    // === SHUTDOWN MESSAGES ===
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
}
