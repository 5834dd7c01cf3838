// src/services/verifier.rs
//! Proof verification service.
//!
//! Checks a [`ProofBundle`] against a pinned verifying key. The pin is an
//! injected configuration value, so one verifier serves any circuit
//! deployment.
//!
//! # Process Flow
//! 1. Decode and deserialize the proof
//! 2. Compare the bundle's verifying key text with the pinned text
//! 3. Decode and deserialize the verifying key
//! 4. Build the public inputs from the bundle's `public` JSON
//! 5. Run Groth16 verification

use crate::error::{Error, Result};
use crate::models::proof_bundle::ProofBundle;
use crate::zkp::proof_verification::{decode_proof, decode_verifying_key, verify_proof};
use crate::zkp::witness_builder;
use log::info;
use std::path::Path;

/// Verifier bound to one trusted verifying key.
#[derive(Debug, Clone)]
pub struct ProofVerifier {
    /// Base64 verifying key accepted by this verifier
    pinned_verifying_key: String,
}

impl ProofVerifier {
    /// Constructs a verifier trusting `pinned_verifying_key` (base64).
    ///
    /// The pin is kept verbatim; bundle keys must match it byte for byte.
    pub fn new(pinned_verifying_key: impl Into<String>) -> Self {
        ProofVerifier {
            pinned_verifying_key: pinned_verifying_key.into(),
        }
    }

    /// Builds a verifier from an optional pin.
    ///
    /// # Errors
    /// `Error::MissingPinnedVerificationKey` when no pin is available.
    pub fn from_pin(pinned_verifying_key: Option<String>) -> Result<Self> {
        pinned_verifying_key
            .map(Self::new)
            .ok_or(Error::MissingPinnedVerificationKey)
    }

    pub fn pinned_verifying_key(&self) -> &str {
        &self.pinned_verifying_key
    }

    /// Reads the bundle at `path` and verifies it.
    pub fn verify_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let bundle = ProofBundle::read_from(path)?;
        self.verify(&bundle)
    }

    /// Verifies a bundle.
    ///
    /// # Errors
    /// - `Error::Decode` / `Error::Deserialize` for malformed encodings
    /// - `Error::UntrustedVerificationKey` if the key is not the pinned one;
    ///   no cryptographic work is done in that case
    /// - `Error::Schema` / `Error::Pairing` for malformed public inputs
    /// - `Error::ProofRejected` if Groth16 verification fails
    pub fn verify(&self, bundle: &ProofBundle) -> Result<()> {
        let proof = decode_proof(&bundle.proof.proof)?;

        if bundle.verification_key.verifying_key != self.pinned_verifying_key {
            return Err(Error::UntrustedVerificationKey);
        }
        let vk = decode_verifying_key(&bundle.verification_key.verifying_key)?;

        let public_inputs = witness_builder::parse_public(&bundle.public)?;

        verify_proof(&vk, &proof, &public_inputs)?;
        info!("Proof verified successfully.");
        Ok(())
    }
}
