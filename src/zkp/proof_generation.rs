// src/zkp/proof_generation.rs
//! Zero-Knowledge Proof generation for field-signature knowledge.
//!
//! Groth16 over BW6-761 for [`BlsVerificationCircuit`]. A bundle produced
//! here is exactly what [`ProofVerifier`](crate::services::verifier::ProofVerifier)
//! consumes.

use crate::error::{Error, Result};
use crate::models::proof_bundle::{EncodedProof, EncodedVerifyingKey, ProofBundle};
use crate::models::witness::PerFieldWitness;
use crate::utils::serialization::{deserialize_canonical, encode_canonical};
use crate::zkp::circuit::BlsVerificationCircuit;
use crate::zkp::witness_builder::CircuitWitness;
use ark_bw6_761::BW6_761;
use ark_groth16::{Groth16, ProvingKey, VerifyingKey};
use ark_serialize::CanonicalSerialize;
use ark_snark::{CircuitSpecificSetupSNARK, SNARK};
use log::info;
use rand::{CryptoRng, RngCore};
use std::fs;
use std::path::Path;

/// Generates circuit-specific Groth16 parameters.
///
/// # Returns
/// The proving key and the verifying key to pin on the verifier side
pub fn setup<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(ProvingKey<BW6_761>, VerifyingKey<BW6_761>)> {
    let (pk, vk) = Groth16::<BW6_761>::setup(BlsVerificationCircuit::blank(), rng)?;
    info!("Generated Groth16 parameters for the BLS verification circuit");
    Ok((pk, vk))
}

/// The pinning string of a verifying key: base64 of its compressed encoding.
pub fn encode_verifying_key(vk: &VerifyingKey<BW6_761>) -> Result<String> {
    encode_canonical(vk)
}

/// Proves knowledge of the signature in `witness` and packages the proof
/// with its verifying key and public inputs.
///
/// # Errors
/// - `Error::Pairing` if the witness does not satisfy the pairing relation
/// - `Error::Synthesis` if the proving engine fails
pub fn prove<R: RngCore + CryptoRng>(
    pk: &ProvingKey<BW6_761>,
    witness: &PerFieldWitness,
    rng: &mut R,
) -> Result<ProofBundle> {
    let decoded = CircuitWitness::try_from(witness)?;
    if !decoded.is_satisfied()? {
        return Err(Error::Pairing("witness does not satisfy the pairing check".into()));
    }

    let proof = Groth16::<BW6_761>::prove(pk, BlsVerificationCircuit::from(&decoded), rng)?;

    Ok(ProofBundle {
        proof: EncodedProof {
            proof: encode_canonical(&proof)?,
        },
        verification_key: EncodedVerifyingKey {
            verifying_key: encode_verifying_key(&pk.vk)?,
        },
        public: serde_json::to_value(witness.public_part())?,
    })
}

/// Writes the proving key (compressed binary) and the verifying key
/// (base64 text, ready to pin).
pub fn write_parameters(
    pk: &ProvingKey<BW6_761>,
    proving_key_path: &Path,
    verifying_key_path: &Path,
) -> Result<()> {
    let mut bytes = Vec::new();
    pk.serialize_compressed(&mut bytes)
        .map_err(|e| Error::Synthesis(format!("serializing proving key: {}", e)))?;
    fs::write(proving_key_path, bytes).map_err(|e| Error::io(proving_key_path, e))?;
    fs::write(verifying_key_path, encode_verifying_key(&pk.vk)?)
        .map_err(|e| Error::io(verifying_key_path, e))?;
    Ok(())
}

/// Reads a proving key written by [`write_parameters`].
pub fn read_proving_key(path: &Path) -> Result<ProvingKey<BW6_761>> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    deserialize_canonical(&bytes)
}
