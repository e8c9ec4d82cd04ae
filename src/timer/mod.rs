//! Work-hour stopwatch.
//!
//! Provides the timer controller and its collaborators:
//! - A clock seam for real and simulated time
//! - The persisted `{"elapsed_seconds": ...}` record
//! - `HH:MM:SS` formatting and minute-entry parsing

pub mod clock;
pub mod controller;
pub mod format;
pub mod record;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{Direction, SessionState, TimerController, TICK_INTERVAL};
pub use format::{format_duration, format_hms, parse_minutes};
pub use record::{JsonFileStore, PersistedRecord, RecordStore, DEFAULT_DATA_FILE};
