//! Command-line interface for worktimer.

pub mod args;
pub mod commands;
