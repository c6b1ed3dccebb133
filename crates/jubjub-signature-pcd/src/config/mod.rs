//! TOML configuration for the `jubjub-pcd` binary.

mod logging;
mod output;
mod pcd;
mod types;

pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use pcd::{ConfigSource, PcdConfig, ENV_LOG_JSON, ENV_LOG_LEVEL};
pub use types::LogLevel;
