//! Error type shared by every crate in the workspace.

use thiserror::Error;

/// Everything that can go wrong while proving, verifying or moving a PCD.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PcdError {
    /// `R8` or `S` argument missing.
    #[error("Invalid signature input: R8 coordinates and S are required")]
    InvalidSignatureInput,

    /// A public key coordinate argument is missing.
    #[error("Invalid signing key input: both key coordinates are required")]
    InvalidKeyInput,

    /// Message argument missing.
    #[error("Invalid message input: message is required")]
    InvalidMessageInput,

    /// A pre-image element argument is missing.
    #[error("Invalid message pre-image input: both pre-image elements are required")]
    InvalidPreImageInput,

    /// The signature check or the pre-image check failed at prove time.
    #[error("Could not generate proof. Verified: {verified}, Hash: {hash_matches}")]
    ProofGenerationFailed {
        /// Outcome of the signature check.
        verified: bool,
        /// Whether `hash2(pre_image)` equalled the message.
        hash_matches: bool,
    },

    /// Text that is not an optionally signed run of decimal digits.
    #[error("Malformed integer string: {0:?}")]
    MalformedIntegerString(String),

    /// JSON encoding failed.
    #[error("Serialization error: {0}")]
    SerializationFailed(String),

    /// Payload is not valid JSON of the expected shape.
    #[error("Deserialization error: {0}")]
    DeserializationFailed(String),

    /// No package is registered for this type tag.
    #[error("Unknown PCD type: {0}")]
    UnknownPcdType(String),

    /// Envelope carries another package's type tag.
    #[error("PCD type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Tag this package handles.
        expected: String,
        /// Tag found in the envelope.
        found: String,
    },

    /// Poseidon could not be instantiated for the requested input count.
    #[error("Hash error: {0}")]
    Hash(String),

    /// Config file could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File access outside the config layer.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result alias used across the workspace.
pub type PcdResult<T> = Result<T, PcdError>;
