mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{handle_config, handle_display, handle_hash, handle_prove, handle_verify, ProveInputs};
use jubjub_pcd_types::PcdResult;
use jubjub_signature_pcd::config::{ConfigSource, PcdConfig};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> PcdResult<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let (config, source) = PcdConfig::load_with_source(&config_path)?;

    logging::init_logging(&cli, &config.logging)?;

    if source == ConfigSource::Defaults {
        info!("Config file {:?} not found, using defaults", config_path);
    }

    match cli.command {
        Commands::Prove {
            x_r8,
            y_r8,
            s,
            x_signing_key,
            y_signing_key,
            message,
            x_pre_image,
            y_pre_image,
            output,
        } => {
            let inputs = ProveInputs::new(
                x_r8,
                y_r8,
                s,
                x_signing_key,
                y_signing_key,
                message,
                x_pre_image,
                y_pre_image,
                output,
            );
            handle_prove(inputs, &config).await?;
        }
        Commands::Verify { file } => {
            if !handle_verify(&file).await? {
                std::process::exit(1);
            }
        }
        Commands::Display { file } => {
            handle_display(&file)?;
        }
        Commands::Hash { x, y } => {
            handle_hash(&x, &y)?;
        }
        Commands::Config => {
            handle_config(&config)?;
        }
    }

    Ok(())
}

fn default_config_path() -> PathBuf {
    PathBuf::from("jubjub-pcd.toml")
}
