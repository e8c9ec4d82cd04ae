//! Path resolution for worktimer configuration and log files.
//!
//! Settings live in `~/.worktimer/`:
//! - `config.yaml` - Main configuration file
//! - `worktimer.log` - Diagnostic log
//!
//! The elapsed-time record itself defaults to the working directory.

use std::path::PathBuf;

use crate::error::WorkTimerError;

/// Paths to worktimer configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.worktimer/`
    pub root: PathBuf,
    /// Config file: `~/.worktimer/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.worktimer/worktimer.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WorkTimerError> {
        let home = std::env::var("HOME").map_err(|_| {
            WorkTimerError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".worktimer")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("worktimer.log"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".worktimer")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-worktimer");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.log_file, root.join("worktimer.log"));
    }
}
