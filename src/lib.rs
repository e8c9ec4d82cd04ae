//! worktimer - A work-hour stopwatch
//!
//! This crate provides a terminal stopwatch that accumulates work time,
//! supports manual minute adjustments, and persists the total to a small
//! JSON record between runs.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::WorkTimerError;
pub use timer::TimerController;
