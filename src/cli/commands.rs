//! Headless command implementations.
//!
//! Each command drives the same controller the window uses, so a command
//! writes the record exactly when the matching button would.

use crate::cli::args::OutputFormat;
use crate::error::WorkTimerError;
use crate::output::{format_snapshot, TimerSnapshot};
use crate::timer::{Clock, Direction, RecordStore, TimerController};

/// Execute status command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn status<C: Clock, S: RecordStore>(
    timer: &TimerController<C, S>,
    format: OutputFormat,
) -> Result<String, WorkTimerError> {
    format_snapshot(&TimerSnapshot::capture(timer), "Worked", format)
}

/// Execute add/sub commands
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn adjust<C: Clock, S: RecordStore>(
    timer: &mut TimerController<C, S>,
    minutes: i64,
    direction: Direction,
    format: OutputFormat,
) -> Result<String, WorkTimerError> {
    timer.adjust_minutes(minutes, direction);
    format_snapshot(&TimerSnapshot::capture(timer), "Worked", format)
}

/// Execute reset command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn reset<C: Clock, S: RecordStore>(
    timer: &mut TimerController<C, S>,
    format: OutputFormat,
) -> Result<String, WorkTimerError> {
    timer.reset();
    format_snapshot(&TimerSnapshot::capture(timer), "Reset", format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{JsonFileStore, ManualClock};
    use chrono::Duration;
    use tempfile::TempDir;

    fn timer_in<'c>(
        temp_dir: &TempDir,
        clock: &'c ManualClock,
    ) -> TimerController<&'c ManualClock, JsonFileStore> {
        TimerController::new(clock, JsonFileStore::new(temp_dir.path().join("timer_data.json")))
    }

    #[test]
    fn test_status_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let clock = ManualClock::default();
        let timer = timer_in(&temp_dir, &clock);

        let output = status(&timer, OutputFormat::Json).unwrap();

        assert!(output.contains("00:00:00"));
        assert!(!temp_dir.path().join("timer_data.json").exists());
    }

    #[test]
    fn test_adjust_persists() {
        let temp_dir = TempDir::new().unwrap();
        let clock = ManualClock::default();
        let mut timer = timer_in(&temp_dir, &clock);

        adjust(&mut timer, 15, Direction::Increase, OutputFormat::Json).unwrap();

        let reloaded = timer_in(&temp_dir, &clock);
        assert_eq!(reloaded.accumulated(), Duration::minutes(15));
    }

    #[test]
    fn test_adjust_invalid_leaves_record_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let clock = ManualClock::default();
        let mut timer = timer_in(&temp_dir, &clock);

        let output = adjust(&mut timer, 0, Direction::Decrease, OutputFormat::Json).unwrap();

        assert!(output.contains("00:00:00"));
        assert!(!temp_dir.path().join("timer_data.json").exists());
    }

    #[test]
    fn test_reset_output() {
        let temp_dir = TempDir::new().unwrap();
        let clock = ManualClock::default();
        let mut timer = timer_in(&temp_dir, &clock);
        timer.adjust_minutes(60, Direction::Increase);

        let output = reset(&mut timer, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["elapsed_seconds"], 0.0);
    }
}
