// src/zkp/proof_verification.rs
//! # Zero-Knowledge Proof Verification
//!
//! Decoding and checking of Groth16 proofs over BW6-761 for the BLS
//! verification circuit.
//!
//! ## Security Considerations
//! - Proofs must only be checked against trusted (pinned) verifying keys;
//!   pinning is enforced by [`ProofVerifier`](crate::services::verifier::ProofVerifier)
//! - Decoded points are validated during deserialization

use crate::error::{Error, Result};
use crate::utils::serialization::{decode_base64, deserialize_canonical};
use crate::zkp::witness_builder::CircuitPublicInputs;
use ark_bw6_761::BW6_761;
use ark_groth16::{Groth16, Proof, VerifyingKey};
use ark_snark::SNARK;
use log::debug;

/// Decodes a base64 compressed Groth16 proof.
///
/// # Errors
/// - `Error::Decode` on malformed base64
/// - `Error::Deserialize` on malformed proof bytes
pub fn decode_proof(proof_base64: &str) -> Result<Proof<BW6_761>> {
    let bytes = decode_base64(proof_base64)?;
    debug!("Decoded proof: {} bytes", bytes.len());
    deserialize_canonical(&bytes)
}

/// Decodes a base64 compressed Groth16 verifying key.
///
/// # Errors
/// - `Error::Decode` on malformed base64
/// - `Error::Deserialize` on malformed key bytes
pub fn decode_verifying_key(vk_base64: &str) -> Result<VerifyingKey<BW6_761>> {
    let bytes = decode_base64(vk_base64)?;
    debug!("Decoded verifying key: {} bytes", bytes.len());
    deserialize_canonical(&bytes)
}

/// Runs Groth16 verification.
///
/// # Returns
/// `Ok(())` only if the proof is accepted
///
/// # Errors
/// - `Error::ProofRejected` if the verifier does not accept
/// - `Error::Synthesis` if the key and the public inputs are incompatible
pub fn verify_proof(
    vk: &VerifyingKey<BW6_761>,
    proof: &Proof<BW6_761>,
    public_inputs: &CircuitPublicInputs,
) -> Result<()> {
    let inputs = public_inputs.to_field_elements();
    if vk.gamma_abc_g1.len() != inputs.len() + 1 {
        return Err(Error::Synthesis(format!(
            "verifying key expects {} public inputs, got {}",
            vk.gamma_abc_g1.len().saturating_sub(1),
            inputs.len()
        )));
    }
    if Groth16::<BW6_761>::verify(vk, &inputs, proof)? {
        Ok(())
    } else {
        Err(Error::ProofRejected)
    }
}
