//! Core library modules for the pomo application.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::libs::config::Config;
//! use pomo::libs::session::Session;
//!
//! let config = Config::default();
//! config.validate()?;
//! let _session = Session::new(config);
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod formatter;
pub mod input;
pub mod messages;
pub mod notifier;
pub mod session;
pub mod timer;
pub mod view;
