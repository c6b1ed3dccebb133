//! Conversions between exact integers and BN254 scalar field elements.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::{BigInt, BigUint, Sign};
use std::sync::OnceLock;

static FIELD_MODULUS: OnceLock<BigUint> = OnceLock::new();

/// Order of the BN254 scalar field.
pub fn field_modulus() -> &'static BigUint {
    FIELD_MODULUS.get_or_init(|| BigUint::from_bytes_le(&Fr::MODULUS.to_bytes_le()))
}

/// Field element for a value already in `[0, p)`; `None` otherwise.
pub fn fr_from_canonical(value: &BigInt) -> Option<Fr> {
    let magnitude = value.to_biguint()?;
    if magnitude >= *field_modulus() {
        return None;
    }
    Some(Fr::from_le_bytes_mod_order(&magnitude.to_bytes_le()))
}

/// Field element for any integer, reduced mod `p`.
pub fn fr_from_reduced(value: &BigInt) -> Fr {
    let (sign, magnitude) = value.to_bytes_le();
    let element = Fr::from_le_bytes_mod_order(&magnitude);
    if sign == Sign::Minus {
        -element
    } else {
        element
    }
}

/// Canonical representative in `[0, p)`.
pub fn fr_to_biguint(element: &Fr) -> BigUint {
    BigUint::from_bytes_le(&element.into_bigint().to_bytes_le())
}

/// [`fr_to_biguint`] as a signed integer.
pub fn fr_to_bigint(element: &Fr) -> BigInt {
    BigInt::from(fr_to_biguint(element))
}
