// src/models/proof_bundle.rs
//! Wire format of a proof submitted for verification.
//!
//! ```json
//! {
//!   "proof": { "proof": "<base64>" },
//!   "verification_key": { "verifying_key": "<base64>" },
//!   "public": { "G2": ..., "Hm": ..., "Pk": ... }
//! }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EncodedProof {
    /// Base64 of the compressed Groth16 proof
    pub proof: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EncodedVerifyingKey {
    /// Base64 of the compressed Groth16 verifying key
    pub verifying_key: String,
}

/// A proof, the key it claims to verify under, and its public inputs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProofBundle {
    pub proof: EncodedProof,
    pub verification_key: EncodedVerifyingKey,
    /// Public input assignment, interpreted by the witness builder
    pub public: serde_json::Value,
}

impl ProofBundle {
    /// Reads and parses a bundle from disk.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be read
    /// - `Error::Schema` if the JSON does not have the bundle shape
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_slice(&data).map_err(|e| Error::Schema(format!("proof bundle: {}", e)))
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data).map_err(|e| Error::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_wire_format() {
        let raw = r#"{
            "proof": {"proof": "AAAA"},
            "verification_key": {"verifying_key": "BBBB"},
            "public": {"Hm": {"X": "1", "Y": "2"}}
        }"#;
        let bundle: ProofBundle = serde_json::from_str(raw).unwrap();
        assert_eq!(bundle.proof.proof, "AAAA");
        assert_eq!(bundle.verification_key.verifying_key, "BBBB");
        assert_eq!(bundle.public["Hm"]["X"], "1");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProofBundle::read_from(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_wrong_shape_is_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.json");
        fs::write(&path, r#"{"proof": "flat-string"}"#).unwrap();
        assert!(matches!(ProofBundle::read_from(&path), Err(Error::Schema(_))));
    }
}
