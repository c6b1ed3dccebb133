//! JSON wire form.
//!
//! The payload is `{"type", "id", "claim", "proof"}` with every number kept as
//! the exact string it was constructed with. Hosts exchange it wrapped in a
//! [`SerializedPcd`] envelope whose `type` selects the package.

use jubjub_pcd_types::{
    JubJubSignaturePcdClaim, JubJubSignaturePcdProof, PcdError, PcdResult, SerializedPcd,
    JUBJUB_SIGNATURE_TYPE_NAME,
};
use serde::{Deserialize, Serialize};

use crate::pcd::JubJubSignaturePcd;

#[derive(Serialize)]
struct PcdPayloadRef<'a> {
    #[serde(rename = "type")]
    pcd_type: &'a str,
    id: &'a str,
    claim: &'a JubJubSignaturePcdClaim,
    proof: &'a JubJubSignaturePcdProof,
}

#[derive(Deserialize)]
struct PcdPayload {
    #[serde(rename = "type")]
    pcd_type: String,
    id: String,
    claim: JubJubSignaturePcdClaim,
    proof: JubJubSignaturePcdProof,
}

/// Encodes the payload and wraps it in a tagged envelope.
pub fn serialize(pcd: &JubJubSignaturePcd) -> PcdResult<SerializedPcd> {
    let payload = PcdPayloadRef {
        pcd_type: pcd.pcd_type(),
        id: pcd.id(),
        claim: pcd.claim(),
        proof: pcd.proof(),
    };
    let pcd = serde_json::to_string(&payload)
        .map_err(|e| PcdError::SerializationFailed(e.to_string()))?;

    Ok(SerializedPcd {
        pcd_type: JUBJUB_SIGNATURE_TYPE_NAME.to_string(),
        pcd,
    })
}

/// Decodes the payload text (the envelope's `pcd` field).
pub fn deserialize(payload: &str) -> PcdResult<JubJubSignaturePcd> {
    let payload: PcdPayload = serde_json::from_str(payload)
        .map_err(|e| PcdError::DeserializationFailed(e.to_string()))?;

    if payload.pcd_type != JUBJUB_SIGNATURE_TYPE_NAME {
        return Err(PcdError::DeserializationFailed(format!(
            "payload type {:?} is not {}",
            payload.pcd_type, JUBJUB_SIGNATURE_TYPE_NAME
        )));
    }

    Ok(JubJubSignaturePcd::new(payload.id, payload.claim, payload.proof))
}

/// Checks the envelope tag, then decodes its payload.
pub fn deserialize_envelope(envelope: &SerializedPcd) -> PcdResult<JubJubSignaturePcd> {
    if envelope.pcd_type != JUBJUB_SIGNATURE_TYPE_NAME {
        return Err(PcdError::TypeMismatch {
            expected: JUBJUB_SIGNATURE_TYPE_NAME.to_string(),
            found: envelope.pcd_type.clone(),
        });
    }
    deserialize(&envelope.pcd)
}

/// Envelope from JSON text.
pub fn parse_envelope(text: &str) -> PcdResult<SerializedPcd> {
    serde_json::from_str(text).map_err(|e| PcdError::DeserializationFailed(e.to_string()))
}

/// Envelope as JSON text, pretty-printed on request.
pub fn envelope_to_string(envelope: &SerializedPcd, pretty: bool) -> PcdResult<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(envelope)
    } else {
        serde_json::to_string(envelope)
    };
    encoded.map_err(|e| PcdError::SerializationFailed(e.to_string()))
}

/// Whole envelope as JSON text.
pub fn serialize_to_string(pcd: &JubJubSignaturePcd) -> PcdResult<String> {
    envelope_to_string(&serialize(pcd)?, false)
}

/// Inverse of [`serialize_to_string`].
pub fn deserialize_from_string(text: &str) -> PcdResult<JubJubSignaturePcd> {
    deserialize_envelope(&parse_envelope(text)?)
}
