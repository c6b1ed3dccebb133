//! EdDSA signatures, in wire and integer form.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// EdDSA signature in wire form: curve point `R8` and scalar `S`, both as
/// decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JubJubSignature {
    /// Nonce point `R8`.
    #[serde(rename = "R8")]
    pub r8: [String; 2],
    /// Scalar `S`.
    #[serde(rename = "S")]
    pub s: String,
}

/// The same signature with exact integers, as handed to a backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignatureValues {
    /// Nonce point coordinates.
    pub r8: [BigInt; 2],
    /// Scalar, expected below the subgroup order.
    pub s: BigInt,
}
