//! JSON output formatting for worktimer.

use super::TimerSnapshot;
use crate::error::WorkTimerError;

/// Format a snapshot as JSON
///
/// # Errors
///
/// Returns `WorkTimerError::Json` if JSON serialization fails.
pub fn format_snapshot_json(snapshot: &TimerSnapshot) -> Result<String, WorkTimerError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}
