//! EdDSA-Poseidon verification on Baby Jubjub, as circomlib's
//! `verifyPoseidon` does it.
//!
//! A signature `(R8, S)` on message `m` under public key `A` is valid iff
//! both points are on the curve, `S < l`, and `S·Base8 == R8 + (8·hm)·A`
//! with `hm = Poseidon(R8.x, R8.y, A.x, A.y, m)`.

use ark_bn254::Fr;
use ark_ec::AffineRepr;
use jubjub_pcd_types::{PcdResult, SignatureValues};
use num_bigint::BigInt;
use tracing::debug;

use crate::babyjub::{base8, point_from_coordinates, subgroup_order, BabyJubJubAffine};
use crate::field::{fr_from_canonical, fr_to_biguint};
use crate::poseidon::poseidon_hash_fields;

/// The challenge `hm`, a five-input Poseidon over the nonce point, the
/// public key and the message.
pub fn signature_challenge(
    r8: &BabyJubJubAffine,
    public_key: &BabyJubJubAffine,
    message: Fr,
) -> PcdResult<Fr> {
    poseidon_hash_fields(&[r8.x, r8.y, public_key.x, public_key.y, message])
}

/// Returns `false` for any malformed component instead of erroring.
pub fn verify_poseidon(
    message: &BigInt,
    signature: &SignatureValues,
    public_key: &[BigInt; 2],
) -> bool {
    let Some(message) = fr_from_canonical(message) else {
        debug!("message outside scalar field");
        return false;
    };
    let Some(r8) = point_from_coordinates(&signature.r8[0], &signature.r8[1]) else {
        debug!("R8 is not a curve point");
        return false;
    };
    let Some(public_key) = point_from_coordinates(&public_key[0], &public_key[1]) else {
        debug!("public key is not a curve point");
        return false;
    };
    let Some(s) = signature.s.to_biguint() else {
        debug!("negative S");
        return false;
    };
    if s >= *subgroup_order() {
        debug!("S not below subgroup order");
        return false;
    }

    let hm = match signature_challenge(&r8, &public_key, message) {
        Ok(hm) => fr_to_biguint(&hm),
        Err(e) => {
            debug!(error = %e, "challenge hash failed");
            return false;
        }
    };
    let left = base8().mul_bigint(s.to_u64_digits());
    let right = r8.into_group() + public_key.mul_bigint((hm * 8u32).to_u64_digits());

    left == right
}
