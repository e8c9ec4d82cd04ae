//! Output formatting for worktimer.
//!
//! This module renders timer snapshots for the headless commands.

mod json;
mod pretty;

use chrono::Duration;
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::WorkTimerError;
use crate::timer::{
    format_duration, format_hms, Clock, PersistedRecord, RecordStore, TimerController,
};

pub use json::format_snapshot_json;
pub use pretty::format_snapshot_pretty;

/// A point-in-time view of the timer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerSnapshot {
    /// Displayed duration in seconds.
    pub elapsed_seconds: f64,
    /// `HH:MM:SS` rendering.
    pub display: String,
    /// Human-readable rendering.
    pub human: String,
    /// Whether a session is open.
    pub running: bool,
    /// Most recent load or save failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl TimerSnapshot {
    /// Snapshot a duration.
    #[must_use]
    pub fn from_duration(d: Duration, running: bool) -> Self {
        Self {
            elapsed_seconds: PersistedRecord::from_duration(d).elapsed_seconds,
            display: format_hms(d),
            human: format_duration(d),
            running,
            warning: None,
        }
    }

    /// Snapshot a controller.
    #[must_use]
    pub fn capture<C: Clock, S: RecordStore>(timer: &TimerController<C, S>) -> Self {
        Self {
            warning: timer.last_failure().map(str::to_string),
            ..Self::from_duration(timer.displayed(), timer.is_running())
        }
    }
}

/// Format a snapshot based on output format
///
/// # Errors
///
/// Returns `WorkTimerError::Json` if JSON serialization fails.
pub fn format_snapshot(
    snapshot: &TimerSnapshot,
    title: &str,
    format: OutputFormat,
) -> Result<String, WorkTimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_snapshot_pretty(snapshot, title)),
        OutputFormat::Json => format_snapshot_json(snapshot),
    }
}
