//! Lossless conversion between arbitrary-precision integers and their
//! base-10 string form.
//!
//! Field elements routinely exceed 64 bits, so every numeric value that
//! crosses the claim/proof boundary travels as a decimal string. Parsing is
//! strict: an optional leading `-` followed by ASCII digits. Output is the
//! canonical rendering of [`BigInt`] (no leading zeros, no `+`).

use crate::error::{PcdError, PcdResult};
use crate::signature::{JubJubSignature, SignatureValues};
use num_bigint::BigInt;
use std::str::FromStr;

/// Canonical decimal text.
pub fn stringify_bigint(value: &BigInt) -> String {
    value.to_string()
}

/// Strict decimal parse; anything else is `MalformedIntegerString`.
pub fn parse_bigint(s: &str) -> PcdResult<BigInt> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PcdError::MalformedIntegerString(s.to_string()));
    }
    BigInt::from_str(s).map_err(|_| PcdError::MalformedIntegerString(s.to_string()))
}

/// [`stringify_bigint`] element-wise.
pub fn stringify_bigint_array<const N: usize>(values: &[BigInt; N]) -> [String; N] {
    std::array::from_fn(|i| stringify_bigint(&values[i]))
}

/// [`parse_bigint`] element-wise, failing on the first bad element.
pub fn unstringify_bigint_array<const N: usize>(values: &[String; N]) -> PcdResult<[BigInt; N]> {
    let parsed = unstringify_bigint_slice(values)?;
    // Length is fixed by N, so the conversion cannot fail.
    parsed
        .try_into()
        .map_err(|_| PcdError::MalformedIntegerString(format!("expected {} elements", N)))
}

/// Slice form of [`stringify_bigint_array`].
pub fn stringify_bigint_slice(values: &[BigInt]) -> Vec<String> {
    values.iter().map(stringify_bigint).collect()
}

/// Slice form of [`unstringify_bigint_array`].
pub fn unstringify_bigint_slice<S: AsRef<str>>(values: &[S]) -> PcdResult<Vec<BigInt>> {
    values.iter().map(|s| parse_bigint(s.as_ref())).collect()
}

/// Wire signature to integers.
pub fn signature_to_bigint(signature: &JubJubSignature) -> PcdResult<SignatureValues> {
    Ok(SignatureValues {
        r8: unstringify_bigint_array(&signature.r8)?,
        s: parse_bigint(&signature.s)?,
    })
}

/// Integer signature to canonical wire form.
pub fn signature_to_strings(signature: &SignatureValues) -> JubJubSignature {
    JubJubSignature {
        r8: stringify_bigint_array(&signature.r8),
        s: stringify_bigint(&signature.s),
    }
}
