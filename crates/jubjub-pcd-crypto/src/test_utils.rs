//! Fixture signer. Key generation and signing are not part of the PCD
//! surface; this exists so tests can produce signatures the backend accepts.

use ark_ec::{AffineRepr, CurveGroup};
use jubjub_pcd_types::{PcdResult, SignatureValues};
use num_bigint::{BigInt, BigUint};
use rand::RngCore;

use crate::babyjub::{base8, subgroup_order, BabyJubJubAffine};
use crate::eddsa::signature_challenge;
use crate::field::{fr_from_reduced, fr_to_bigint, fr_to_biguint};
use crate::poseidon::poseidon_hash_fields;

/// Holds a secret scalar and its public key `secret·Base8`.
pub struct TestSigner {
    secret: BigUint,
    public_key: BabyJubJubAffine,
}

impl TestSigner {
    /// Secret is reduced mod `l`; a zero secret is bumped to one.
    pub fn from_secret(secret: &BigUint) -> Self {
        let mut secret = secret % subgroup_order();
        if secret == BigUint::from(0u8) {
            secret = BigUint::from(1u8);
        }
        let public_key = base8().mul_bigint(secret.to_u64_digits()).into_affine();
        Self { secret, public_key }
    }

    /// Signer whose secret is `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_secret(&BigUint::from(seed))
    }

    /// Signer with a secret drawn from the thread RNG.
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self::from_secret(&BigUint::from_bytes_le(&bytes))
    }

    /// Public key as integer coordinates.
    pub fn public_key(&self) -> [BigInt; 2] {
        [fr_to_bigint(&self.public_key.x), fr_to_bigint(&self.public_key.y)]
    }

    /// Deterministic nonce derived from the secret and the message.
    pub fn sign(&self, message: &BigInt) -> PcdResult<SignatureValues> {
        let message = fr_from_reduced(message);
        let secret_fr = fr_from_reduced(&BigInt::from(self.secret.clone()));
        let nonce = fr_to_biguint(&poseidon_hash_fields(&[secret_fr, message])?) % subgroup_order();

        let r8 = base8().mul_bigint(nonce.to_u64_digits()).into_affine();
        let hm = fr_to_biguint(&signature_challenge(&r8, &self.public_key, message)?);
        let s = (nonce + hm * 8u32 * &self.secret) % subgroup_order();

        Ok(SignatureValues {
            r8: [fr_to_bigint(&r8.x), fr_to_bigint(&r8.y)],
            s: BigInt::from(s),
        })
    }
}
