use clap::{Parser, Subcommand};
use std::path::PathBuf;

const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "jubjub-pcd")]
#[command(version = BUILD_VERSION)]
#[command(about = "Prove, verify and inspect JubJub signature PCDs")]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(short, long, global = true, value_name = "FILE", env = "JUBJUB_PCD_CONFIG", help = "Path to config file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[arg(long, global = true, value_name = "FILE", help = "Write logs to file")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Build a PCD from a signature, key, message and pre-image")]
    Prove {
        #[arg(long, help = "R8 x coordinate")]
        x_r8: Option<String>,
        #[arg(long, help = "R8 y coordinate")]
        y_r8: Option<String>,
        #[arg(long, help = "Signature scalar S")]
        s: Option<String>,
        #[arg(long, help = "Public key x coordinate")]
        x_signing_key: Option<String>,
        #[arg(long, help = "Public key y coordinate")]
        y_signing_key: Option<String>,
        #[arg(long, help = "Signed message")]
        message: Option<String>,
        #[arg(long, help = "First pre-image element")]
        x_pre_image: Option<String>,
        #[arg(long, help = "Second pre-image element")]
        y_pre_image: Option<String>,
        #[arg(short, long, value_name = "FILE", help = "Write the serialized PCD here instead of stdout")]
        output: Option<PathBuf>,
    },

    #[command(about = "Verify a serialized PCD (exit status 1 when invalid)")]
    Verify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    #[command(about = "Show the display label of a serialized PCD")]
    Display {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    #[command(about = "Compute hash2 of a pre-image, i.e. the message to sign")]
    Hash {
        x: String,
        y: String,
    },

    #[command(about = "Print the effective configuration")]
    Config,
}
