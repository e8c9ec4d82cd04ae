//! Configuration settings for worktimer.
//!
//! Settings are loaded from `~/.worktimer/config.yaml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::Paths;
use crate::error::WorkTimerError;
use crate::logging::LoggingConfig;
use crate::timer::DEFAULT_DATA_FILE;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Timer settings.
    pub timer: TimerConfig,
    /// Logging settings.
    pub logging: LogConfig,
}

/// Timer settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Record file, relative to the working directory unless absolute.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Initial contents of the minutes entry field.
    #[serde(default)]
    pub default_adjust_minutes: u32,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// `env_logger` filter, e.g. "info" or "worktimer=debug".
    pub level: Option<String>,
    /// Log file; defaults to `~/.worktimer/worktimer.log`.
    pub file: Option<PathBuf>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_adjust_minutes: 0,
        }
    }
}

impl LogConfig {
    /// Resolve into a logger configuration.
    #[must_use]
    pub fn resolve(&self, paths: &Paths) -> LoggingConfig {
        LoggingConfig {
            filter: self.level.clone(),
            file: Some(self.file.clone().unwrap_or_else(|| paths.log_file.clone())),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, WorkTimerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            WorkTimerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        // An empty file deserializes to unit, not a mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            WorkTimerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.timer.data_file, PathBuf::from("timer_data.json"));
        assert_eq!(config.timer.default_adjust_minutes, 0);
        assert!(config.logging.level.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_path(&temp_dir.path().join("config.yaml")).unwrap();

        assert_eq!(config.timer.data_file, PathBuf::from("timer_data.json"));
    }

    #[test]
    fn test_load_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.timer.default_adjust_minutes, 0);
    }

    #[test]
    fn test_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r"
timer:
  data_file: /var/tmp/hours.json
logging:
  level: debug
";
        std::fs::write(&config_path, yaml).unwrap();
        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.data_file, PathBuf::from("/var/tmp/hours.json"));
        assert_eq!(loaded.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
timer:
  default_adjust_minutes: 15
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.timer.default_adjust_minutes, 15);
        assert_eq!(config.timer.data_file, PathBuf::from("timer_data.json"));
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer: 42").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, WorkTimerError::Config(_)));
    }

    #[test]
    fn test_log_config_defaults_to_paths() {
        let paths = Paths::with_root(PathBuf::from("/tmp/wt"));
        let logging = LogConfig::default().resolve(&paths);

        assert_eq!(logging.file, Some(PathBuf::from("/tmp/wt/worktimer.log")));
        assert!(logging.filter.is_none());
    }
}
