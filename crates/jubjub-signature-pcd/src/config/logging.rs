//! Logging section.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use super::types::LogLevel;

/// Subscriber settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset.
    pub level: LogLevel,
    /// Append logs here instead of stderr.
    pub file: Option<PathBuf>,
    /// Emit JSON lines.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            file: None,
            json: false,
        }
    }
}
