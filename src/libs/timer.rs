//! The countdown timer engine.
//!
//! Drives a single focus or break phase: a 1 Hz tick recomputes the
//! remaining time from the wall clock while pause/resume toggles shift the
//! target end time. Remaining time is always derived as `end_time - now`,
//! never decremented by a fixed step, so missed or delayed ticks cannot
//! drift the countdown. Shifting the end time forward by exactly the
//! paused duration on resume keeps total running time equal to the
//! configured duration no matter how many pause cycles occur.

use crate::libs::input::ToggleEvent;
use crate::libs::view::View;
use crate::msg_debug;
use std::fmt;
use tokio::sync::mpsc::Receiver;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};

/// Tick cadence of the countdown: one display refresh per second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Run state of a countdown phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Initial/terminal state. Never reached mid-run; toggles received in
    /// this state are ignored.
    Stopped,
    Running,
    Paused,
}

/// Kind of phase a timer counts down, driving display and notification
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Focus,
    Break,
}

impl TimerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Focus => "FOCUS",
            TimerMode::Break => "BREAK",
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One countdown phase.
#[derive(Debug)]
pub struct Timer {
    /// Configured total length, immutable for the run.
    pub duration: Duration,
    /// Time left; recomputed from the wall clock each tick, clamped to
    /// zero.
    pub remaining: Duration,
    pub mode: TimerMode,
    pub state: TimerState,
    /// Wall-clock moment the run began.
    pub started_at: Option<Instant>,
    /// Wall-clock moment the current pause began; `Some` only while
    /// `Paused`.
    pub paused_at: Option<Instant>,
}

impl Timer {
    pub fn new(duration: Duration, mode: TimerMode) -> Self {
        Timer {
            duration,
            remaining: duration,
            mode,
            state: TimerState::Running,
            started_at: None,
            paused_at: None,
        }
    }

    /// Running time consumed so far: `duration - remaining`.
    pub fn elapsed(&self) -> Duration {
        self.duration.saturating_sub(self.remaining)
    }

    /// Recomputes the remaining time from the wall clock, clamped to zero.
    /// Ticks are ignored while paused: the countdown must not advance.
    pub fn on_tick(&mut self, now: Instant, end_time: Instant) {
        if self.state == TimerState::Running {
            self.remaining = end_time.saturating_duration_since(now);
        }
    }

    /// Applies one pause/resume toggle and returns the (possibly shifted)
    /// end time. Resuming moves the end time forward by exactly the time
    /// spent paused, leaving the countdown unaffected by the pause.
    pub fn apply_toggle(&mut self, now: Instant, end_time: Instant) -> Instant {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                self.paused_at = Some(now);
                msg_debug!(format!("{} timer paused", self.mode));
                end_time
            }
            TimerState::Paused => {
                let paused_for = self.paused_at.take().map_or(Duration::ZERO, |at| now.saturating_duration_since(at));
                self.state = TimerState::Running;
                msg_debug!(format!("{} timer resumed, end time shifted by {:?}", self.mode, paused_for));
                end_time + paused_for
            }
            TimerState::Stopped => end_time,
        }
    }

    /// Runs the countdown until the remaining time reaches zero.
    ///
    /// The loop suspends only on the select over the next tick and the
    /// next toggle event. The zero clamp on `remaining` is the sole
    /// termination condition; early termination happens at process level
    /// and is never observed here. If the toggle channel closes (stdin
    /// EOF) the run simply continues on ticks alone.
    pub async fn run(&mut self, toggles: &mut Receiver<ToggleEvent>) {
        let started = Instant::now();
        self.remaining = self.duration;
        self.started_at = Some(started);
        let mut end_time = started + self.duration;

        // First tick one full period after start, missed ticks skipped:
        // the wall-clock recomputation absorbs any tick the scheduler
        // drops.
        let mut ticker = time::interval_at(started + TICK_INTERVAL, TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while self.remaining > Duration::ZERO {
            tokio::select! {
                _ = ticker.tick() => {
                    self.on_tick(Instant::now(), end_time);
                    if self.state == TimerState::Running {
                        View::progress(self);
                    }
                }
                Some(ToggleEvent) = toggles.recv() => {
                    end_time = self.apply_toggle(Instant::now(), end_time);
                    // Repaint once so the glyph reflects the new state
                    View::progress(self);
                }
            }
        }
    }
}
