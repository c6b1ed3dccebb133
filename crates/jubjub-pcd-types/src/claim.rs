//! Disclosed data of a JubJub signature PCD.
//!
//! Claim and proof carry exactly the same four fields. Only the proof is
//! re-checked by verification; the claim is what hosts display. They are
//! kept as separate records because both appear on the wire.

use crate::signature::JubJubSignature;
use serde::{Deserialize, Serialize};

/// What the PCD asserts, for display.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JubJubSignaturePcdClaim {
    /// Signature on `message`.
    pub signature: JubJubSignature,
    /// Public key coordinates.
    pub signing_keys: [String; 2],
    /// Signed message, `hash2(message_pre_image)`.
    pub message: String,
    /// The two hashed elements.
    pub message_pre_image: [String; 2],
}

/// The values verification re-checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JubJubSignaturePcdProof {
    /// Signature on `message`.
    pub signature: JubJubSignature,
    /// Public key coordinates.
    pub signing_keys: [String; 2],
    /// Signed message.
    pub message: String,
    /// Pre-image of `message`.
    pub message_pre_image: [String; 2],
}

impl From<JubJubSignaturePcdClaim> for JubJubSignaturePcdProof {
    fn from(claim: JubJubSignaturePcdClaim) -> Self {
        Self {
            signature: claim.signature,
            signing_keys: claim.signing_keys,
            message: claim.message,
            message_pre_image: claim.message_pre_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claim() -> JubJubSignaturePcdClaim {
        JubJubSignaturePcdClaim {
            signature: JubJubSignature {
                r8: ["1".into(), "2".into()],
                s: "3".into(),
            },
            signing_keys: ["4".into(), "5".into()],
            message: "6".into(),
            message_pre_image: ["7".into(), "8".into()],
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample_claim()).unwrap();
        assert_eq!(json["signature"]["R8"][1], "2");
        assert_eq!(json["signature"]["S"], "3");
        assert_eq!(json["signingKeys"][0], "4");
        assert_eq!(json["message"], "6");
        assert_eq!(json["messagePreImage"][1], "8");
    }

    #[test]
    fn test_proof_shares_claim_shape() {
        let claim = sample_claim();
        let proof = JubJubSignaturePcdProof::from(claim.clone());
        assert_eq!(
            serde_json::to_value(&claim).unwrap(),
            serde_json::to_value(&proof).unwrap()
        );
    }

    #[test]
    fn test_pair_fields_require_two_elements() {
        let json = r#"{"signature":{"R8":["1","2","9"],"S":"3"},"signingKeys":["4","5"],"message":"6","messagePreImage":["7","8"]}"#;
        assert!(serde_json::from_str::<JubJubSignaturePcdClaim>(json).is_err());
    }
}
