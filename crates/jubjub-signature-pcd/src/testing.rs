//! Shared fixtures for unit tests.

use jubjub_pcd_crypto::test_utils::TestSigner;
use jubjub_pcd_crypto::{CryptoBackend, PoseidonEddsaBackend};
use jubjub_pcd_types::{
    stringify_bigint, BigInt, JubJubSignaturePcdArgs, JubJubSignaturePcdClaim,
    JubJubSignaturePcdProof, PcdResult, SignatureValues,
};

use crate::pcd::JubJubSignaturePcd;

/// Backend with a scripted signature outcome and `hash2(a, b) = a + b`.
#[derive(Clone, Copy, Debug)]
pub struct ScriptedBackend {
    /// Value returned by `verify_signature`.
    pub signature_valid: bool,
}

impl CryptoBackend for ScriptedBackend {
    fn verify_signature(&self, _: &BigInt, _: &SignatureValues, _: &[BigInt; 2]) -> bool {
        self.signature_valid
    }

    fn hash2(&self, pair: &[BigInt; 2]) -> PcdResult<BigInt> {
        Ok(&pair[0] + &pair[1])
    }
}

pub const ACCEPTING: ScriptedBackend = ScriptedBackend { signature_valid: true };
pub const REJECTING: ScriptedBackend = ScriptedBackend { signature_valid: false };

/// Arguments a real signer produced over `hash2(pre_image)`.
pub fn signed_args(pre_image: [i64; 2]) -> JubJubSignaturePcdArgs {
    let signer = TestSigner::from_seed(0x5eed);
    let pre_image = [BigInt::from(pre_image[0]), BigInt::from(pre_image[1])];
    let message = PoseidonEddsaBackend.hash2(&pre_image).unwrap();
    let signature = signer.sign(&message).unwrap();
    let key = signer.public_key();

    JubJubSignaturePcdArgs::from_values(
        &stringify_bigint(&signature.r8[0]),
        &stringify_bigint(&signature.r8[1]),
        &stringify_bigint(&signature.s),
        &stringify_bigint(&key[0]),
        &stringify_bigint(&key[1]),
        &stringify_bigint(&message),
        &stringify_bigint(&pre_image[0]),
        &stringify_bigint(&pre_image[1]),
    )
}

pub fn pcd_from_parts(
    id: &str,
    claim: JubJubSignaturePcdClaim,
    proof: JubJubSignaturePcdProof,
) -> JubJubSignaturePcd {
    JubJubSignaturePcd::new(id.to_string(), claim, proof)
}
