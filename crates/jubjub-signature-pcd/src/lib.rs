#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(missing_docs)]

//! JubJub signature PCD.
//!
//! A PCD here asserts two linked facts: an EdDSA signature on Baby Jubjub is
//! valid for a message under a public key, and that message is the Poseidon
//! hash of a disclosed two-element pre-image. Instances are built by
//! [`prove`], re-checked by [`verify`], and exchanged as JSON via
//! [`serialize`]/[`deserialize`]. Hosts reach all of this through the
//! [`PcdPackage`] trait or a [`PcdRegistry`].

pub mod config;
pub mod display;
pub mod package;
pub mod pcd;
pub mod prover;
pub mod registry;
pub mod serialize;
pub mod validate;
pub mod verifier;

#[cfg(test)]
mod testing;

pub use display::get_display_options;
pub use package::{JubJubSignaturePcdPackage, PcdPackage};
pub use pcd::JubJubSignaturePcd;
pub use prover::{prove, prove_with};
pub use registry::{DynPcdPackage, PcdRegistry};
pub use serialize::{
    deserialize, deserialize_envelope, deserialize_from_string, envelope_to_string,
    parse_envelope, serialize, serialize_to_string,
};
pub use validate::{validate_args, ValidatedArgs};
pub use verifier::{verify, verify_with};

pub use jubjub_pcd_crypto::{CryptoBackend, PoseidonEddsaBackend};
pub use jubjub_pcd_types::{
    BigIntArgument, DisplayOptions, JubJubSignature, JubJubSignaturePcdArgs,
    JubJubSignaturePcdClaim, JubJubSignaturePcdProof, PcdError, PcdResult, SerializedPcd,
    JUBJUB_SIGNATURE_TYPE_NAME,
};
