// src/zkp/circuit.rs
//! R1CS relation for a BLS12-377 signature check, proven over BW6-761.
//!
//! ## Inputs
//! - Private: `Sig`
//! - Public: `G2`, `Hm`, `Pk`, allocated in that order, one native element
//!   per base-field coordinate
//!
//! ## Relation
//! `FinalExp(MillerLoop((Sig, G2), (Hm, Pk))) == 1`
//!
//! A proof therefore shows that the prover knows a signature on `Hm` under
//! `Pk` without disclosing it.

use crate::zkp::witness_builder::{g1_coordinates, g2_coordinates, CircuitPublicInputs, CircuitWitness};
use ark_bls12_377::constraints::{Fq12Var, Fq2Var, FqVar, G1Var, G2Var, PairingVar};
use ark_bls12_377::{Fq, Fq2, G1Affine, G2Affine};
use ark_r1cs_std::alloc::AllocVar;
use ark_r1cs_std::eq::EqGadget;
use ark_r1cs_std::fields::FieldVar;
use ark_r1cs_std::pairing::PairingVar as PairingGadget;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

/// Constraint field of the circuit (BW6-761 scalar field).
pub type ConstraintF = Fq;

/// BLS signature verification circuit.
///
/// All fields are `None` when the circuit is only used for key generation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlsVerificationCircuit {
    /// Signature (private witness)
    pub sig: Option<G1Affine>,
    /// G2 generator (public input)
    pub g2: Option<G2Affine>,
    /// Hashed message (public input)
    pub hm: Option<G1Affine>,
    /// Issuer public key (public input)
    pub pk: Option<G2Affine>,
}

impl From<&CircuitWitness> for BlsVerificationCircuit {
    fn from(witness: &CircuitWitness) -> Self {
        BlsVerificationCircuit {
            sig: Some(witness.sig),
            g2: Some(witness.g2),
            hm: Some(witness.hm),
            pk: Some(witness.pk),
        }
    }
}

impl BlsVerificationCircuit {
    /// An empty instance, used for parameter generation.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Public inputs of a fully assigned circuit.
    pub fn public_inputs(&self) -> Option<CircuitPublicInputs> {
        Some(CircuitPublicInputs {
            g2: self.g2?,
            hm: self.hm?,
            pk: self.pk?,
        })
    }
}

/// Allocates a G1 point as two base-field variables with `z = 1`.
fn alloc_g1(
    cs: ConstraintSystemRef<ConstraintF>,
    point: Option<G1Affine>,
    public: bool,
) -> Result<G1Var, SynthesisError> {
    let coords = point.map(|p| g1_coordinates(&p));
    let alloc = |value: Option<Fq>| {
        let f = || value.ok_or(SynthesisError::AssignmentMissing);
        if public {
            FqVar::new_input(cs.clone(), f)
        } else {
            FqVar::new_witness(cs.clone(), f)
        }
    };
    let x = alloc(coords.map(|c| c.0))?;
    let y = alloc(coords.map(|c| c.1))?;
    Ok(G1Var::new(x, y, FqVar::one()))
}

/// Allocates a G2 point as four base-field variables with `z = 1`.
fn alloc_g2(
    cs: ConstraintSystemRef<ConstraintF>,
    point: Option<G2Affine>,
) -> Result<G2Var, SynthesisError> {
    let coords = point.map(|p| g2_coordinates(&p));
    let x = Fq2Var::new_input(cs.clone(), || {
        coords
            .map(|c| Fq2::new(c[0], c[1]))
            .ok_or(SynthesisError::AssignmentMissing)
    })?;
    let y = Fq2Var::new_input(cs.clone(), || {
        coords
            .map(|c| Fq2::new(c[2], c[3]))
            .ok_or(SynthesisError::AssignmentMissing)
    })?;
    Ok(G2Var::new(x, y, Fq2Var::one()))
}

impl ConstraintSynthesizer<ConstraintF> for BlsVerificationCircuit {
    /// Generates the pairing-product constraints.
    ///
    /// # Constraints
    /// 1. Miller loop over `(Sig, G2)` and `(Hm, Pk)`
    /// 2. Final exponentiation of the product
    /// 3. Result equals the identity of the target group
    fn generate_constraints(
        self,
        cs: ConstraintSystemRef<ConstraintF>,
    ) -> Result<(), SynthesisError> {
        // Public inputs first so their order matches the JSON schema.
        let g2 = alloc_g2(cs.clone(), self.g2)?;
        let hm = alloc_g1(cs.clone(), self.hm, true)?;
        let pk = alloc_g2(cs.clone(), self.pk)?;
        let sig = alloc_g1(cs, self.sig, false)?;

        let g1_prepared = [PairingVar::prepare_g1(&sig)?, PairingVar::prepare_g1(&hm)?];
        let g2_prepared = [PairingVar::prepare_g2(&g2)?, PairingVar::prepare_g2(&pk)?];

        let miller = PairingVar::miller_loop(&g1_prepared, &g2_prepared)?;
        let product = PairingVar::final_exponentiation(&miller)?;
        product.enforce_equal(&Fq12Var::one())?;
        Ok(())
    }
}
