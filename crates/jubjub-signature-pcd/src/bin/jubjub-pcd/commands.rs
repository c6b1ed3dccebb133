use jubjub_pcd_types::{
    parse_bigint, stringify_bigint, BigIntArgument, JubJubSignaturePcdArgs, PcdError, PcdResult,
};
use jubjub_signature_pcd::config::PcdConfig;
use jubjub_signature_pcd::{
    deserialize_envelope, envelope_to_string, parse_envelope, CryptoBackend,
    JubJubSignaturePcd, JubJubSignaturePcdPackage, PcdPackage, PoseidonEddsaBackend,
};
use std::path::Path;
use tracing::info;

pub struct ProveInputs {
    pub args: JubJubSignaturePcdArgs,
    pub output: Option<std::path::PathBuf>,
}

impl ProveInputs {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_r8: Option<String>,
        y_r8: Option<String>,
        s: Option<String>,
        x_signing_key: Option<String>,
        y_signing_key: Option<String>,
        message: Option<String>,
        x_pre_image: Option<String>,
        y_pre_image: Option<String>,
        output: Option<std::path::PathBuf>,
    ) -> Self {
        let args = JubJubSignaturePcdArgs {
            x_r8: BigIntArgument::from(x_r8),
            y_r8: BigIntArgument::from(y_r8),
            s: BigIntArgument::from(s),
            x_signing_key: BigIntArgument::from(x_signing_key),
            y_signing_key: BigIntArgument::from(y_signing_key),
            message: BigIntArgument::from(message),
            x_pre_image: BigIntArgument::from(x_pre_image),
            y_pre_image: BigIntArgument::from(y_pre_image),
        };
        Self { args, output }
    }
}

fn read_pcd(path: &Path) -> PcdResult<JubJubSignaturePcd> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| PcdError::Io(format!("Failed to read {:?}: {}", path, e)))?;
    deserialize_envelope(&parse_envelope(&text)?)
}

pub async fn handle_prove(inputs: ProveInputs, config: &PcdConfig) -> PcdResult<()> {
    let package = JubJubSignaturePcdPackage::new();
    let pcd = package.prove(inputs.args).await?;
    let envelope = package.serialize(&pcd).await?;
    let text = envelope_to_string(&envelope, config.output.pretty)?;

    match inputs.output {
        Some(path) => {
            std::fs::write(&path, text)
                .map_err(|e| PcdError::Io(format!("Failed to write {:?}: {}", path, e)))?;
            info!(id = pcd.id(), "PCD written to {:?}", path);
        }
        None => println!("{}", text),
    }

    Ok(())
}

/// Returns the verification outcome; the caller maps `false` to the exit code.
pub async fn handle_verify(path: &Path) -> PcdResult<bool> {
    let package = JubJubSignaturePcdPackage::new();
    let pcd = read_pcd(path)?;
    let valid = package.verify(&pcd).await?;

    println!("{}: {}", pcd.id(), if valid { "valid" } else { "INVALID" });
    Ok(valid)
}

pub fn handle_display(path: &Path) -> PcdResult<()> {
    let package = JubJubSignaturePcdPackage::new();
    let pcd = read_pcd(path)?;
    let options = package.display_options(&pcd);

    println!("{}", options.header);
    println!("{}", options.display_name);
    Ok(())
}

pub fn handle_hash(x: &str, y: &str) -> PcdResult<()> {
    let pair = [parse_bigint(x)?, parse_bigint(y)?];
    println!("{}", stringify_bigint(&PoseidonEddsaBackend.hash2(&pair)?));
    Ok(())
}

pub fn handle_config(config: &PcdConfig) -> PcdResult<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
