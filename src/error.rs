//! Error types for worktimer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in worktimer.
#[derive(Error, Debug)]
pub enum WorkTimerError {
    /// The persisted record could not be read or parsed.
    #[error("Failed to load {}: {reason}", path.display())]
    Load {
        /// Path of the record file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// The persisted record could not be written.
    #[error("Failed to save {}: {reason}", path.display())]
    Save {
        /// Path of the record file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Configuration file or path problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing, or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkTimerError {
    /// Build a load error for the given path.
    pub fn load(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a save error for the given path.
    pub fn save(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Save {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
