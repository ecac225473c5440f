//! # Pomo - CLI Pomodoro Timer
//!
//! A command-line countdown timer implementing the Pomodoro technique:
//! alternating focus and break intervals with pause/resume control and
//! session statistics.
//!
//! ## Features
//!
//! - **Countdown Engine**: Wall-clock based remaining-time computation that
//!   never drifts under scheduler jitter or missed ticks
//! - **Pause/Resume**: One toggle per input line; paused time never counts
//!   against the running interval
//! - **Session Statistics**: Completed phase counters and cumulative focus
//!   and break durations for the lifetime of the process
//! - **Long Breaks**: An extended break after every N-th completed focus
//!   session
//! - **Notifications**: Best-effort desktop notifications and an audible
//!   beep at phase boundaries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
