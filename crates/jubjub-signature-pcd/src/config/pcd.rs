//! Top-level config document.

use jubjub_pcd_types::{PcdError, PcdResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::types::LogLevel;

/// Overrides `logging.level`.
pub const ENV_LOG_LEVEL: &str = "JUBJUB_PCD_LOG_LEVEL";
/// Any value turns on `logging.json`.
pub const ENV_LOG_JSON: &str = "JUBJUB_PCD_LOG_JSON";

/// Where [`PcdConfig::load_with_source`] found its values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from the given file.
    File,
    /// File absent; defaults used.
    Defaults,
}

/// Everything the binary reads from `jubjub-pcd.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PcdConfig {
    /// `[logging]`
    pub logging: LoggingConfig,
    /// `[output]`
    pub output: OutputConfig,
}

impl PcdConfig {
    /// Reads `path` if it exists, otherwise starts from defaults; then
    /// applies environment overrides.
    pub fn load(path: impl AsRef<Path>) -> PcdResult<Self> {
        Self::load_with_source(path).map(|(config, _)| config)
    }

    /// [`load`](Self::load), also reporting whether the file existed. Nothing
    /// is logged here, so callers can load before installing a subscriber.
    pub fn load_with_source(path: impl AsRef<Path>) -> PcdResult<(Self, ConfigSource)> {
        let path = path.as_ref();

        let (mut config, source) = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| PcdError::Config(format!("Failed to read config: {}", e)))?;
            (Self::from_toml(&contents)?, ConfigSource::File)
        } else {
            (Self::default(), ConfigSource::Defaults)
        };

        config.apply_env_overrides();
        Ok((config, source))
    }

    /// Parses TOML; missing keys take defaults.
    pub fn from_toml(contents: &str) -> PcdResult<Self> {
        toml::from_str(contents)
            .map_err(|e| PcdError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Pretty TOML.
    pub fn to_toml(&self) -> PcdResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PcdError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Writes TOML to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> PcdResult<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PcdError::Config(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path.as_ref(), contents)
            .map_err(|e| PcdError::Config(format!("Failed to write config: {}", e)))?;

        info!("Configuration saved to {:?}", path.as_ref());
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = LogLevel::parse_or_default(&level);
        }

        if lookup(ENV_LOG_JSON).is_some() {
            self.logging.json = true;
        }
    }
}
