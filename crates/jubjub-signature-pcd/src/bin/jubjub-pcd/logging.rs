use jubjub_pcd_types::{PcdError, PcdResult};
use jubjub_signature_pcd::config::LoggingConfig;
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, EnvFilter};

use crate::cli::Cli;

pub fn init_logging(cli: &Cli, config: &LoggingConfig) -> PcdResult<()> {
    let level = if cli.quiet {
        "error".to_string()
    } else {
        match cli.verbose {
            0 => config.level.to_string(),
            1 => "info,jubjub_signature_pcd=debug,jubjub_pcd_crypto=debug".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let log_file = cli.log_file.as_ref().or(config.file.as_ref());
    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| PcdError::Io(format!("Failed to open log file {:?}: {}", path, e)))?;
            (BoxMakeWriter::new(std::sync::Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.json {
        subscriber
            .with(fmt::layer().json().with_writer(writer))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(writer).with_ansi(ansi).with_target(cli.verbose >= 2))
            .init();
    }

    Ok(())
}
