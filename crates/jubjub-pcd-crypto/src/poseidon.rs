//! circomlib Poseidon over the BN254 scalar field.
//!
//! One permutation of width `n + 1` for `n` inputs, zero capacity element,
//! circom round constants and MDS matrices. `hash2` is the `n = 2` (T3)
//! instance; the EdDSA challenge uses `n = 5` (T6).

use ark_bn254::Fr;
use jubjub_pcd_types::{PcdError, PcdResult};
use light_poseidon::{Poseidon, PoseidonHasher};
use num_bigint::BigInt;

use crate::field::{fr_from_reduced, fr_to_bigint};

/// `poseidon(inputs)` as circomlib computes it. Fails for an empty input or
/// more inputs than circom parameters exist for.
pub fn poseidon_hash_fields(inputs: &[Fr]) -> PcdResult<Fr> {
    if inputs.is_empty() {
        return Err(PcdError::Hash("poseidon needs at least one input".into()));
    }
    let mut hasher = Poseidon::<Fr>::new_circom(inputs.len()).map_err(|e| {
        PcdError::Hash(format!("no circom parameters for {} inputs: {}", inputs.len(), e))
    })?;
    hasher
        .hash(inputs)
        .map_err(|e| PcdError::Hash(e.to_string()))
}

/// `hash2` on exact integers. Inputs are reduced into the field; the result
/// is the canonical representative in `[0, p)`.
pub fn poseidon_hash2(pair: &[BigInt; 2]) -> PcdResult<BigInt> {
    let digest = poseidon_hash_fields(&[fr_from_reduced(&pair[0]), fr_from_reduced(&pair[1])])?;
    Ok(fr_to_bigint(&digest))
}
