//! The pomodoro loop: alternating focus and break phases until
//! interrupted.
//!
//! This is the timer engine's caller. After each engine run returns it
//! records the completed phase, fires the collaborators, and picks the
//! next break length via the long-break tie-break. The loop itself never
//! ends; an OS interrupt handled by the shutdown watcher is the only exit.

use crate::libs::config::Config;
use crate::libs::input;
use crate::libs::messages::Message;
use crate::libs::notifier;
use crate::libs::session::Session;
use crate::libs::timer::{Timer, TimerMode};
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;

pub async fn cmd(config: Config) -> Result<()> {
    let session = Arc::new(Mutex::new(Session::new(config.clone())));
    spawn_shutdown_watcher(session.clone());

    let mut toggles = input::spawn_stdin_reader();
    let mut first_phase = true;

    loop {
        // Focus phase
        View::header(&Message::PhaseStarting(TimerMode::Focus.to_string(), config.focus_minutes).to_string());
        if first_phase {
            msg_print!(Message::ControlsHint);
            first_phase = false;
        }
        if config.sound_enabled {
            notifier::beep();
        }

        let mut timer = Timer::new(config.focus_duration(), TimerMode::Focus);
        timer.run(&mut toggles).await;
        session.lock().record_focus_completion(timer.duration);

        if config.notifications_enabled {
            notifier::notify(
                &Message::NotificationTitle.to_string(),
                &Message::NotifyFocusCompleted(timer.mode.to_string()).to_string(),
            );
        }

        let break_minutes = session.lock().next_break_minutes();
        View::header(&Message::FocusCompleted(break_minutes).to_string());
        print_stats(&session);

        // Break phase, long or short per the tie-break
        let break_duration = session.lock().next_break_duration();
        if session.lock().is_long_break_due() {
            msg_print!(Message::LongBreakDue);
        }

        View::header(&Message::PhaseStarting(TimerMode::Break.to_string(), break_minutes).to_string());
        if config.sound_enabled {
            notifier::beep();
        }

        let mut timer = Timer::new(break_duration, TimerMode::Break);
        timer.run(&mut toggles).await;
        session.lock().record_break_completion(timer.duration);

        if config.notifications_enabled {
            notifier::notify(
                &Message::NotificationTitle.to_string(),
                &Message::NotifyBreakCompleted(timer.mode.to_string()).to_string(),
            );
        }

        View::header(&Message::BreakCompleted.to_string());
        print_stats(&session);
    }
}

fn print_stats(session: &Mutex<Session>) {
    msg_print!(Message::SessionStatsTitle, true);
    View::session_stats(&session.lock());
}

/// Watches for an OS interrupt at process scope. On receipt it prints the
/// current statistics and terminates immediately; the engine itself never
/// observes cancellation, so an in-progress phase is not recorded.
fn spawn_shutdown_watcher(session: Arc<Mutex<Session>>) {
    tokio::spawn(async move {
        wait_for_interrupt().await;
        msg_print!(Message::StoppedByUser, true);
        View::session_stats(&session.lock());
        std::process::exit(0);
    });
}

#[cfg(unix)]
async fn wait_for_interrupt() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect(&Message::FailedToCreateSigtermHandler.to_string());
    let mut sigint = signal(SignalKind::interrupt()).expect(&Message::FailedToCreateSigintHandler.to_string());

    tokio::select! {
        _ = sigterm.recv() => {}
        _ = sigint.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_interrupt() {
    let _ = tokio::signal::ctrl_c().await;
}
