//! Background stdin reader feeding pause/resume toggles.
//!
//! One newline-terminated line produces one toggle event; line content is
//! ignored. The channel is a single-slot queue: a burst of lines arriving
//! while a toggle is already pending collapses to that one pending event,
//! so the run loop never has to drain a backlog of stale toggles.

use crate::msg_debug;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, Receiver};

/// One pause/resume request derived from a line of input.
#[derive(Debug, Clone, Copy)]
pub struct ToggleEvent;

/// Spawns the line reader task and returns the toggle channel.
///
/// The task ends quietly on stdin EOF or read error; the receiver then
/// yields `None` and the run loop continues on ticks alone.
pub fn spawn_stdin_reader() -> Receiver<ToggleEvent> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(_)) = lines.next_line().await {
            // Single-slot queue: drop the line if a toggle is already pending
            if tx.try_send(ToggleEvent).is_err() {
                msg_debug!("toggle already pending, input line dropped");
            }
        }
    });
    rx
}
