//! Best-effort notification collaborators.
//!
//! Neither operation can fail from the caller's point of view: a failed
//! desktop notification degrades to the terminal bell, a failed beep is
//! ignored entirely. Nothing here ever interrupts the countdown.

use notify_rust::Notification;
use std::io::{self, Write};

/// Sends a desktop notification, falling back to the terminal bell when
/// the notification service is unavailable.
pub fn notify(title: &str, message: &str) {
    let shown = Notification::new().appname("pomo").summary(title).body(message).icon("alarm-clock").show();
    if shown.is_err() {
        bell();
    }
}

/// Plays the phase-start tone.
///
/// On Unix this tries the common system sound players first, detached so a
/// slow player never blocks the run loop; everywhere else (and when no
/// player is available) it falls back to the terminal bell.
pub fn beep() {
    #[cfg(unix)]
    {
        const SOUNDS: [(&str, &str); 2] = [
            ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
            ("aplay", "/usr/share/sounds/sound-icons/prompt.wav"),
        ];

        for (cmd, file) in SOUNDS {
            if std::path::Path::new(file).exists()
                && std::process::Command::new(cmd)
                    .arg(file)
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .is_ok()
            {
                return;
            }
        }
    }

    bell();
}

/// Emits the ASCII bell character.
fn bell() {
    print!("\x07");
    let _ = io::stdout().flush();
}
