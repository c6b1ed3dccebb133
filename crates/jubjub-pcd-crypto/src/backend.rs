//! The two primitives the PCD needs, behind a swappable trait.

use jubjub_pcd_types::{PcdResult, SignatureValues};
use num_bigint::BigInt;

use crate::{eddsa, poseidon};

/// The two primitives a JubJub signature PCD is built on.
///
/// Implementations must be deterministic and side-effect free.
pub trait CryptoBackend: Send + Sync {
    /// Whether `signature` is a valid signature on `message` under
    /// `public_key`. Malformed components yield `false`, never an error.
    fn verify_signature(
        &self,
        message: &BigInt,
        signature: &SignatureValues,
        public_key: &[BigInt; 2],
    ) -> bool;

    /// Two-input hash whose output is what gets signed.
    fn hash2(&self, pair: &[BigInt; 2]) -> PcdResult<BigInt>;
}

impl<B: CryptoBackend + ?Sized> CryptoBackend for std::sync::Arc<B> {
    fn verify_signature(
        &self,
        message: &BigInt,
        signature: &SignatureValues,
        public_key: &[BigInt; 2],
    ) -> bool {
        (**self).verify_signature(message, signature, public_key)
    }

    fn hash2(&self, pair: &[BigInt; 2]) -> PcdResult<BigInt> {
        (**self).hash2(pair)
    }
}

/// circomlib-compatible EdDSA-Poseidon on Baby Jubjub, over the BN254
/// scalar field.
#[derive(Clone, Copy, Debug, Default)]
pub struct PoseidonEddsaBackend;

impl CryptoBackend for PoseidonEddsaBackend {
    fn verify_signature(
        &self,
        message: &BigInt,
        signature: &SignatureValues,
        public_key: &[BigInt; 2],
    ) -> bool {
        eddsa::verify_poseidon(message, signature, public_key)
    }

    fn hash2(&self, pair: &[BigInt; 2]) -> PcdResult<BigInt> {
        poseidon::poseidon_hash2(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_shared_backend_delegates() {
        let shared: Arc<dyn CryptoBackend> = Arc::new(PoseidonEddsaBackend);
        let pair = [BigInt::from(1), BigInt::from(2)];
        assert_eq!(shared.hash2(&pair), PoseidonEddsaBackend.hash2(&pair));

        let bogus = [BigInt::from(1), BigInt::from(2)];
        let signature = SignatureValues {
            r8: bogus.clone(),
            s: BigInt::from(3),
        };
        assert!(!shared.verify_signature(&BigInt::from(4), &signature, &bogus));
    }
}
