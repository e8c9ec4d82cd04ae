use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "worktimer")]
#[command(about = "A work-hour stopwatch that remembers where you left off")]
#[command(long_about = "worktimer - A work-hour stopwatch

Start and stop a timer, nudge it by whole minutes, and pick up where you
left off next time. The accumulated time is kept in a small JSON file
(timer_data.json in the current directory by default).

QUICK START:
  worktimer                 Open the timer window
  worktimer status          Print the accumulated time
  worktimer add 15          Add 15 minutes
  worktimer sub 5           Remove 5 minutes (never below zero)
  worktimer reset           Zero the timer

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Config file to use instead of ~/.worktimer/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Record file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive timer window (default)
    ///
    /// Keys: Space/s start or stop, r reset, digits edit the minutes field,
    /// +/- apply it, q or Esc quit (the time is saved on the way out).
    Tui,

    /// Show the accumulated time
    #[command(alias = "st")]
    Status,

    /// Add whole minutes to the accumulated time
    Add {
        /// Minutes to add; zero or negative values are ignored
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },

    /// Remove whole minutes from the accumulated time, stopping at zero
    Sub {
        /// Minutes to remove; zero or negative values are ignored
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },

    /// Zero the accumulated time
    Reset,
}
