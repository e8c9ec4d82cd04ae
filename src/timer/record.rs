//! The persisted elapsed-time record.
//!
//! A single JSON object, `{"elapsed_seconds": <number>}`, rewritten in full
//! on every save.

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::WorkTimerError;

/// Default record file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "timer_data.json";

/// Largest accepted `elapsed_seconds`, about a hundred years.
///
/// Anything larger is treated as corrupt so that further sessions and
/// adjustments always have headroom inside `Duration`.
pub const MAX_ELAPSED_SECONDS: f64 = 100.0 * 365.25 * 24.0 * 3600.0;

/// On-disk representation of the accumulated duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    /// Accumulated work time in seconds, possibly fractional.
    #[serde(default)]
    pub elapsed_seconds: f64,
}

impl PersistedRecord {
    /// Build a record from a duration, clamping negatives to zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_duration(d: Duration) -> Self {
        let millis = d.num_milliseconds().max(0);
        Self {
            elapsed_seconds: millis as f64 / 1000.0,
        }
    }

    /// Convert back into a duration.
    ///
    /// Negative values clamp to zero. Returns `None` for non-finite numbers
    /// and anything above [`MAX_ELAPSED_SECONDS`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_duration(self) -> Option<Duration> {
        if !self.elapsed_seconds.is_finite() || self.elapsed_seconds > MAX_ELAPSED_SECONDS {
            return None;
        }
        let millis = (self.elapsed_seconds * 1000.0).round();
        if millis <= 0.0 {
            return Some(Duration::zero());
        }
        Duration::try_milliseconds(millis as i64)
    }
}

/// Where the record lives.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore {
    /// Read the record.
    ///
    /// Returns `Ok(None)` when no record has been written yet.
    ///
    /// # Errors
    ///
    /// Returns `WorkTimerError::Load` if the record exists but cannot be
    /// read or parsed.
    fn load(&self) -> Result<Option<PersistedRecord>, WorkTimerError>;

    /// Overwrite the record.
    ///
    /// # Errors
    ///
    /// Returns `WorkTimerError::Save` if the record cannot be written.
    fn save(&self, record: &PersistedRecord) -> Result<(), WorkTimerError>;
}

/// A record stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedRecord>, WorkTimerError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(WorkTimerError::load(&self.path, e)),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| WorkTimerError::load(&self.path, e))
    }

    fn save(&self, record: &PersistedRecord) -> Result<(), WorkTimerError> {
        let contents =
            serde_json::to_string(record).map_err(|e| WorkTimerError::save(&self.path, e))?;

        std::fs::write(&self.path, contents).map_err(|e| WorkTimerError::save(&self.path, e))
    }
}
