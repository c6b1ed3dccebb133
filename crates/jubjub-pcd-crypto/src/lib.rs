#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(missing_docs)]

//! Cryptographic backend for the JubJub signature PCD: circomlib-compatible
//! EdDSA-Poseidon verification on Baby Jubjub and the two-input Poseidon hash.

pub mod babyjub;
pub mod backend;
pub mod eddsa;
pub mod field;
pub mod poseidon;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use babyjub::{
    base8, point_from_coordinates, subgroup_order, BabyJubJubAffine, BabyJubJubConfig,
    BabyJubJubProjective,
};
pub use backend::{CryptoBackend, PoseidonEddsaBackend};
pub use eddsa::{signature_challenge, verify_poseidon};
pub use field::{field_modulus, fr_from_canonical, fr_from_reduced, fr_to_bigint, fr_to_biguint};
pub use poseidon::{poseidon_hash2, poseidon_hash_fields};
