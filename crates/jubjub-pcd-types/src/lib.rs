#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(missing_docs)]

//! Shared types for the JubJub signature PCD: wire records, host argument
//! slots, the error enum and the decimal big-integer codec.

pub mod args;
pub mod bigint;
pub mod claim;
pub mod constants;
pub mod error;
pub mod pcd;
pub mod signature;

pub use args::{BigIntArgument, JubJubSignaturePcdArgs};
pub use bigint::{
    parse_bigint, signature_to_bigint, signature_to_strings, stringify_bigint,
    stringify_bigint_array, stringify_bigint_slice, unstringify_bigint_array,
    unstringify_bigint_slice,
};
pub use claim::{JubJubSignaturePcdClaim, JubJubSignaturePcdProof};
pub use constants::*;
pub use error::{PcdError, PcdResult};
pub use num_bigint::BigInt;
pub use pcd::{DisplayOptions, SerializedPcd};
pub use signature::{JubJubSignature, SignatureValues};
