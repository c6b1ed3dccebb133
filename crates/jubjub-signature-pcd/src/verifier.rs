//! Re-checking a PCD.

use jubjub_pcd_crypto::{CryptoBackend, PoseidonEddsaBackend};
use jubjub_pcd_types::{parse_bigint, signature_to_bigint, unstringify_bigint_array, PcdResult};
use tracing::debug;

use crate::pcd::JubJubSignaturePcd;

/// [`verify_with`] using the default Baby Jubjub backend.
pub fn verify(pcd: &JubJubSignaturePcd) -> PcdResult<bool> {
    verify_with(&PoseidonEddsaBackend, pcd)
}

/// Re-runs both checks from the proof record alone; the claim is not read.
///
/// `Ok(false)` means the checks ran and failed. `Err` means the proof
/// could not be parsed, so the checks never ran.
pub fn verify_with<B: CryptoBackend + ?Sized>(
    backend: &B,
    pcd: &JubJubSignaturePcd,
) -> PcdResult<bool> {
    let proof = pcd.proof();

    let message = parse_bigint(&proof.message)?;
    let signature = signature_to_bigint(&proof.signature)?;
    let signing_keys = unstringify_bigint_array(&proof.signing_keys)?;
    let pre_image = unstringify_bigint_array(&proof.message_pre_image)?;

    let signature_verified = backend.verify_signature(&message, &signature, &signing_keys);
    let pre_image_verified = backend.hash2(&pre_image)? == message;

    debug!(
        id = pcd.id(),
        signature_verified, pre_image_verified, "JubJub signature PCD verified"
    );
    Ok(signature_verified && pre_image_verified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prover::{prove, prove_with};
    use crate::testing::{pcd_from_parts, signed_args, ACCEPTING, REJECTING};
    use jubjub_pcd_types::{JubJubSignaturePcdArgs, JubJubSignaturePcdProof, PcdError};

    fn scripted_pcd() -> JubJubSignaturePcd {
        let args = JubJubSignaturePcdArgs::from_values("1", "2", "3", "4", "5", "15", "7", "8");
        prove_with(&ACCEPTING, &args).unwrap()
    }

    #[test]
    fn test_proved_pcd_verifies() {
        let pcd = prove(&signed_args([7, 8])).unwrap();
        assert_eq!(verify(&pcd), Ok(true));
    }

    #[test]
    fn test_verify_is_deterministic() {
        let pcd = prove(&signed_args([11, 12])).unwrap();
        let results: Vec<_> = (0..3).map(|_| verify(&pcd)).collect();
        assert!(results.iter().all(|r| *r == Ok(true)));
    }

    #[test]
    fn test_backend_rejection_is_false_not_error() {
        let pcd = scripted_pcd();
        assert_eq!(verify_with(&ACCEPTING, &pcd), Ok(true));
        assert_eq!(verify_with(&REJECTING, &pcd), Ok(false));
    }

    #[test]
    fn test_only_proof_is_checked() {
        let (id, claim, proof) = scripted_pcd().into_parts();

        let mut forged_claim = claim.clone();
        forged_claim.message = "999".into();
        let pcd = pcd_from_parts(&id, forged_claim, proof.clone());
        assert_eq!(verify_with(&ACCEPTING, &pcd), Ok(true));

        let mut forged_proof = proof;
        forged_proof.message = "999".into();
        let pcd = pcd_from_parts(&id, claim, forged_proof);
        assert_eq!(verify_with(&ACCEPTING, &pcd), Ok(false));
    }

    #[test]
    fn test_tampered_real_proof_fails() {
        let (id, claim, proof) = prove(&signed_args([7, 8])).unwrap().into_parts();

        let mut tampered = proof.clone();
        tampered.signing_keys.swap(0, 1);
        assert_eq!(verify(&pcd_from_parts(&id, claim.clone(), tampered)), Ok(false));

        let mut tampered = proof;
        tampered.message_pre_image[1] = "9".into();
        assert_eq!(verify(&pcd_from_parts(&id, claim, tampered)), Ok(false));
    }

    #[test]
    fn test_malformed_proof_is_error() {
        let (id, claim, proof) = scripted_pcd().into_parts();

        let mut broken: JubJubSignaturePcdProof = proof;
        broken.signature.s = "three".into();
        let pcd = pcd_from_parts(&id, claim, broken);
        assert_eq!(
            verify_with(&ACCEPTING, &pcd),
            Err(PcdError::MalformedIntegerString("three".into()))
        );
    }
}
