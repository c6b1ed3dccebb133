//! The package interface hosts program against.

use async_trait::async_trait;
use jubjub_pcd_crypto::{CryptoBackend, PoseidonEddsaBackend};
use jubjub_pcd_types::{
    DisplayOptions, JubJubSignaturePcdArgs, PcdResult, SerializedPcd, JUBJUB_SIGNATURE_TYPE_NAME,
};

use crate::display::get_display_options;
use crate::pcd::JubJubSignaturePcd;
use crate::{prover, serialize, verifier};

/// Operations a host needs from a PCD type.
#[async_trait]
pub trait PcdPackage: Send + Sync {
    /// The PCD value.
    type Pcd: Send + Sync;
    /// Prover inputs.
    type Args: Send;

    /// Type tag written into every serialized instance.
    const NAME: &'static str;

    /// Checks the inputs and builds a fresh instance.
    async fn prove(&self, args: Self::Args) -> PcdResult<Self::Pcd>;

    /// Re-checks an instance. `Ok(false)` when a check fails.
    async fn verify(&self, pcd: &Self::Pcd) -> PcdResult<bool>;

    /// Tagged JSON envelope.
    async fn serialize(&self, pcd: &Self::Pcd) -> PcdResult<SerializedPcd>;

    /// Decodes an envelope's payload text.
    async fn deserialize(&self, payload: &str) -> PcdResult<Self::Pcd>;

    /// Header and label for a host UI.
    fn display_options(&self, pcd: &Self::Pcd) -> DisplayOptions;
}

/// JubJub signature package over a pluggable crypto backend.
#[derive(Clone, Debug, Default)]
pub struct JubJubSignaturePcdPackage<B = PoseidonEddsaBackend> {
    backend: B,
}

impl JubJubSignaturePcdPackage {
    /// Package with the Baby Jubjub backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: CryptoBackend> JubJubSignaturePcdPackage<B> {
    /// Package over `backend`.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl<B: CryptoBackend> PcdPackage for JubJubSignaturePcdPackage<B> {
    type Pcd = JubJubSignaturePcd;
    type Args = JubJubSignaturePcdArgs;

    const NAME: &'static str = JUBJUB_SIGNATURE_TYPE_NAME;

    async fn prove(&self, args: JubJubSignaturePcdArgs) -> PcdResult<JubJubSignaturePcd> {
        prover::prove_with(&self.backend, &args)
    }

    async fn verify(&self, pcd: &JubJubSignaturePcd) -> PcdResult<bool> {
        verifier::verify_with(&self.backend, pcd)
    }

    async fn serialize(&self, pcd: &JubJubSignaturePcd) -> PcdResult<SerializedPcd> {
        serialize::serialize(pcd)
    }

    async fn deserialize(&self, payload: &str) -> PcdResult<JubJubSignaturePcd> {
        serialize::deserialize(payload)
    }

    fn display_options(&self, pcd: &JubJubSignaturePcd) -> DisplayOptions {
        get_display_options(pcd)
    }
}
