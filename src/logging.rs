//! Logger initialization.
//!
//! Everything logs through the `log` facade; `env_logger` is the backend.
//! The terminal belongs to the window while it is open, so records go to a
//! file whenever one can be opened.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "worktimer=debug").
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Explicit filter; falls back to `RUST_LOG`, then `warn`.
    pub filter: Option<String>,
    /// Append log records to this file instead of stderr.
    pub file: Option<PathBuf>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        let mut file_error = None;
        if let Some(path) = &config.file {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).ok();
                }
            }
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                    builder.write_style(env_logger::WriteStyle::Never);
                }
                Err(e) => file_error = Some(format!("{}: {e}", path.display())),
            }
        }

        // Another logger may already be installed (e.g. by a test harness).
        if builder.try_init().is_err() {
            return;
        }

        if let Some(err) = file_error {
            log::warn!("could not open log file {err}, logging to stderr");
        }
        log::debug!("logging initialized");
    });
}
