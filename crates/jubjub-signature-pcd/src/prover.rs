//! Building PCDs from host arguments.

use jubjub_pcd_crypto::{CryptoBackend, PoseidonEddsaBackend};
use jubjub_pcd_types::{
    parse_bigint, signature_to_strings, stringify_bigint, stringify_bigint_array,
    JubJubSignaturePcdArgs, JubJubSignaturePcdClaim, JubJubSignaturePcdProof, PcdError,
    PcdResult, SignatureValues,
};
use tracing::debug;
use uuid::Uuid;

use crate::pcd::JubJubSignaturePcd;
use crate::validate::validate_args;

/// Builds a PCD with the default Baby Jubjub backend.
pub fn prove(args: &JubJubSignaturePcdArgs) -> PcdResult<JubJubSignaturePcd> {
    prove_with(&PoseidonEddsaBackend, args)
}

/// Validates the inputs, checks the signature over `message` and that
/// `message == hash2(pre_image)`, and only then assembles a fresh PCD.
///
/// Stored values are the canonical re-encoding of the parsed integers.
pub fn prove_with<B: CryptoBackend + ?Sized>(
    backend: &B,
    args: &JubJubSignaturePcdArgs,
) -> PcdResult<JubJubSignaturePcd> {
    let args = validate_args(args)?;

    let signature = SignatureValues {
        r8: [parse_bigint(args.x_r8)?, parse_bigint(args.y_r8)?],
        s: parse_bigint(args.s)?,
    };
    let signing_keys = [
        parse_bigint(args.x_signing_key)?,
        parse_bigint(args.y_signing_key)?,
    ];
    let message = parse_bigint(args.message)?;
    let pre_image = [parse_bigint(args.x_pre_image)?, parse_bigint(args.y_pre_image)?];

    let verified = backend.verify_signature(&message, &signature, &signing_keys);
    let computed_hash = backend.hash2(&pre_image)?;
    let hash_matches = computed_hash == message;

    if !(verified && hash_matches) {
        debug!(verified, hash_matches, "JubJub signature proof rejected");
        return Err(PcdError::ProofGenerationFailed {
            verified,
            hash_matches,
        });
    }

    let claim = JubJubSignaturePcdClaim {
        signature: signature_to_strings(&signature),
        signing_keys: stringify_bigint_array(&signing_keys),
        message: stringify_bigint(&message),
        message_pre_image: stringify_bigint_array(&pre_image),
    };
    let proof = JubJubSignaturePcdProof::from(claim.clone());
    let id = Uuid::new_v4().to_string();

    debug!(%id, "JubJub signature PCD constructed");
    Ok(JubJubSignaturePcd::new(id, claim, proof))
}
