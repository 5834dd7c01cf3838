// src/error.rs
//! Error taxonomy shared by the issuance and verification paths.
//!
//! Every variant is terminal for the invocation that produced it. The
//! binaries attach the failing action with `anyhow::Context` and print a
//! single diagnostic line.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by key handling, signing, witness parsing and proof checks.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be created, read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key material on disk is not valid base-16 text.
    #[error("invalid key material: {0}")]
    Parse(String),

    /// A JSON document does not have the expected shape.
    #[error("schema violation: {0}")]
    Schema(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Hash-to-curve could not map the message.
    #[error("hashing message to G1 failed: {0}")]
    Hash(String),

    /// A point is off the curve, outside the prime-order subgroup, or the
    /// pairing could not be evaluated.
    #[error("pairing error: {0}")]
    Pairing(String),

    /// Base64 transport encoding is malformed.
    #[error("base64 decoding failed: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Binary proof system encoding is malformed.
    #[error("deserialization failed: {0}")]
    Deserialize(String),

    /// The bundle's verifying key is not the one this verifier trusts.
    #[error("Verification key does not match the pinned one.")]
    UntrustedVerificationKey,

    /// No pinned verifying key was configured at build time, in the
    /// environment, or on the command line.
    #[error("no pinned verification key configured")]
    MissingPinnedVerificationKey,

    /// The Groth16 verifier ran and did not accept the proof.
    #[error("proof rejected")]
    ProofRejected,

    /// The proving engine failed while synthesizing, proving or verifying.
    #[error("proof system error: {0}")]
    Synthesis(String),

    /// An issued signature failed its own immediate verification while the
    /// strict self-check policy was active.
    #[error("signature for field `{0}` failed self-verification")]
    SelfVerificationFailed(String),

    /// Failure while processing a single credential field.
    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Attaches the credential field that was being processed.
    pub fn in_field(self, field: &str) -> Self {
        Error::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }
}

impl From<ark_serialize::SerializationError> for Error {
    fn from(e: ark_serialize::SerializationError) -> Self {
        Error::Deserialize(e.to_string())
    }
}

impl From<ark_relations::r1cs::SynthesisError> for Error {
    fn from(e: ark_relations::r1cs::SynthesisError) -> Self {
        Error::Synthesis(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untrusted_key_message_is_stable() {
        assert_eq!(
            Error::UntrustedVerificationKey.to_string(),
            "Verification key does not match the pinned one."
        );
    }

    #[test]
    fn test_field_context_is_reported() {
        let err = Error::Hash("map failed".into()).in_field("name");
        assert_eq!(err.to_string(), "field `name`: hashing message to G1 failed: map failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
