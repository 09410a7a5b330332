// Application state module
// Immutable per-process state shared by every connection

use std::io;
use std::path::PathBuf;

use super::types::Config;
use crate::logger::LogFormat;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Base directory request targets are joined onto
    pub root: PathBuf,
    /// Canonical root, set only when traversal confinement is enabled
    pub confined_root: Option<PathBuf>,
    pub access_log: bool,
    pub access_log_format: LogFormat,
    /// Report connection errors and shutdown; only when some logging was asked for
    pub log_errors: bool,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// Fails only when `confine_to_root` is set and the root cannot be
    /// canonicalized.
    pub fn new(config: &Config) -> io::Result<Self> {
        let confined_root = if config.server.confine_to_root {
            Some(config.server.root.canonicalize()?)
        } else {
            None
        };

        Ok(Self {
            root: config.server.root.clone(),
            confined_root,
            access_log: config.logging.access_log,
            access_log_format: LogFormat::from(config.logging.access_log_format.as_str()),
            log_errors: config.logging.access_log || config.logging.error_log_file.is_some(),
        })
    }

    /// State serving `root` with logging off and no confinement
    #[cfg(test)]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            confined_root: None,
            access_log: false,
            access_log_format: LogFormat::Combined,
            log_errors: false,
        }
    }
}
