//! Configuration management for worktimer.
//!
//! This module handles loading configuration from `~/.worktimer/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, LogConfig, TimerConfig};
