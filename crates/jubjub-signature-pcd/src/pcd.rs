//! The PCD value itself.

use jubjub_pcd_types::{
    JubJubSignaturePcdClaim, JubJubSignaturePcdProof, JUBJUB_SIGNATURE_TYPE_NAME,
};

/// A constructed JubJub signature PCD.
///
/// Instances come from the prover or from deserialization and are never
/// mutated afterwards. The id is an opaque handle for host bookkeeping; it is
/// not derived from the claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JubJubSignaturePcd {
    id: String,
    claim: JubJubSignaturePcdClaim,
    proof: JubJubSignaturePcdProof,
}

impl JubJubSignaturePcd {
    pub(crate) fn new(
        id: String,
        claim: JubJubSignaturePcdClaim,
        proof: JubJubSignaturePcdProof,
    ) -> Self {
        Self { id, claim, proof }
    }

    /// Opaque identifier, a UUID v4 for freshly proved instances.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Displayed half.
    pub fn claim(&self) -> &JubJubSignaturePcdClaim {
        &self.claim
    }

    /// Verified half.
    pub fn proof(&self) -> &JubJubSignaturePcdProof {
        &self.proof
    }

    /// Package tag.
    pub fn pcd_type(&self) -> &'static str {
        JUBJUB_SIGNATURE_TYPE_NAME
    }

    /// Splits into id, claim and proof.
    pub fn into_parts(self) -> (String, JubJubSignaturePcdClaim, JubJubSignaturePcdProof) {
        (self.id, self.claim, self.proof)
    }
}
