// src/zkp/witness_builder.rs
//! Builds circuit assignments from witness JSON.
//!
//! The BLS12-377 base field is the scalar field of BW6-761, so every
//! coordinate of the signing curve becomes exactly one element of the outer
//! proof system's field.

use crate::error::{Error, Result};
use crate::models::witness::{PerFieldWitness, PublicWitness};
use crate::wallet::bls_signature::pairing_product_is_one;
use ark_bls12_377::{Fq, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::Zero;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoded, validated inputs of the verification circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircuitWitness {
    /// Signature (private)
    pub sig: G1Affine,
    /// G2 generator (public)
    pub g2: G2Affine,
    /// Hashed message (public)
    pub hm: G1Affine,
    /// Issuer public key (public)
    pub pk: G2Affine,
}

/// Decoded, validated public inputs of the verification circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircuitPublicInputs {
    pub g2: G2Affine,
    pub hm: G1Affine,
    pub pk: G2Affine,
}

fn from_json<T: DeserializeOwned>(json: &Value, what: &str) -> Result<T> {
    if !json.is_object() {
        return Err(Error::Schema(format!("{} must be a JSON object", what)));
    }
    serde_json::from_value(json.clone()).map_err(|e| Error::Schema(format!("{}: {}", what, e)))
}

/// Parses a full per-field witness (`Sig`, `G2`, `Hm`, `Pk`).
///
/// # Errors
/// - `Error::Schema` if a key is missing or has the wrong shape
/// - `Error::Pairing` if a point is off the curve or outside the subgroup
pub fn parse(json: &Value) -> Result<CircuitWitness> {
    let record: PerFieldWitness = from_json(json, "witness")?;
    CircuitWitness::try_from(&record)
}

/// Parses the public part of a witness (`G2`, `Hm`, `Pk`).
pub fn parse_public(json: &Value) -> Result<CircuitPublicInputs> {
    let record: PublicWitness = from_json(json, "public inputs")?;
    CircuitPublicInputs::try_from(&record)
}

impl TryFrom<&PerFieldWitness> for CircuitWitness {
    type Error = Error;

    fn try_from(record: &PerFieldWitness) -> Result<Self> {
        Ok(CircuitWitness {
            sig: record.sig.to_affine()?,
            g2: record.g2.to_affine()?,
            hm: record.hm.to_affine()?,
            pk: record.pk.to_affine()?,
        })
    }
}

impl TryFrom<&PublicWitness> for CircuitPublicInputs {
    type Error = Error;

    fn try_from(record: &PublicWitness) -> Result<Self> {
        Ok(CircuitPublicInputs {
            g2: record.g2.to_affine()?,
            hm: record.hm.to_affine()?,
            pk: record.pk.to_affine()?,
        })
    }
}

impl CircuitWitness {
    pub fn public_inputs(&self) -> CircuitPublicInputs {
        CircuitPublicInputs {
            g2: self.g2,
            hm: self.hm,
            pk: self.pk,
        }
    }

    /// Native evaluation of the relation the circuit enforces.
    pub fn is_satisfied(&self) -> Result<bool> {
        pairing_product_is_one(&self.sig, &self.g2, &self.hm, &self.pk)
    }
}

/// Affine coordinates with the identity mapped to `(0, 0)`.
pub(crate) fn g1_coordinates(point: &G1Affine) -> (Fq, Fq) {
    if point.is_zero() {
        (Fq::zero(), Fq::zero())
    } else {
        (point.x, point.y)
    }
}

pub(crate) fn g2_coordinates(point: &G2Affine) -> [Fq; 4] {
    if point.is_zero() {
        [Fq::zero(); 4]
    } else {
        [point.x.c0, point.x.c1, point.y.c0, point.y.c1]
    }
}

impl CircuitPublicInputs {
    /// Flattens into the order the circuit allocates its inputs:
    /// `G2.X.A0, G2.X.A1, G2.Y.A0, G2.Y.A1, Hm.X, Hm.Y, Pk.X.A0, Pk.X.A1,
    /// Pk.Y.A0, Pk.Y.A1`.
    pub fn to_field_elements(&self) -> Vec<Fq> {
        let mut inputs = Vec::with_capacity(10);
        inputs.extend(g2_coordinates(&self.g2));
        let (x, y) = g1_coordinates(&self.hm);
        inputs.push(x);
        inputs.push(y);
        inputs.extend(g2_coordinates(&self.pk));
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::points::{G1Point, G2Point};
    use crate::wallet::bls_signature::sign;
    use crate::wallet::key_management::IssuerKeyPair;
    use crate::utils::serialization::{field_from_decimal, field_to_decimal};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn witness_json() -> (Value, IssuerKeyPair) {
        let keypair = IssuerKeyPair::generate(&mut StdRng::seed_from_u64(7));
        let signed = sign(&keypair, b"name: Alice").unwrap();
        let record = PerFieldWitness {
            sig: G1Point::from(&signed.signature),
            g2: G2Point::from(&G2Affine::generator()),
            hm: G1Point::from(&signed.hashed_message),
            pk: G2Point::from(&keypair.public_key),
        };
        (serde_json::to_value(record).unwrap(), keypair)
    }

    #[test]
    fn test_parse_honest_witness() {
        let (json, keypair) = witness_json();
        let witness = parse(&json).unwrap();
        assert_eq!(witness.pk, keypair.public_key);
        assert_eq!(witness.g2, G2Affine::generator());
        assert!(witness.is_satisfied().unwrap());
    }

    #[test]
    fn test_public_inputs_order() {
        let (json, _) = witness_json();
        let witness = parse(&json).unwrap();
        let inputs = witness.public_inputs().to_field_elements();
        assert_eq!(inputs.len(), 10);
        assert_eq!(inputs[0], witness.g2.x.c0);
        assert_eq!(inputs[3], witness.g2.y.c1);
        assert_eq!(inputs[4], witness.hm.x);
        assert_eq!(inputs[5], witness.hm.y);
        assert_eq!(inputs[6], witness.pk.x.c0);
        assert_eq!(inputs[9], witness.pk.y.c1);

        let public = parse_public(&json).unwrap();
        assert_eq!(public, witness.public_inputs());
    }

    #[test]
    fn test_missing_key_is_schema_error() {
        let (mut json, _) = witness_json();
        json.as_object_mut().unwrap().remove("Hm");
        assert!(matches!(parse(&json), Err(Error::Schema(_))));
    }

    #[test]
    fn test_scalar_where_map_expected_is_schema_error() {
        let (mut json, _) = witness_json();
        json["G2"]["X"] = json!("12");
        assert!(matches!(parse(&json), Err(Error::Schema(_))));

        assert!(matches!(parse(&json!("not an object")), Err(Error::Schema(_))));
    }

    #[test]
    fn test_tampered_coordinate_is_rejected() {
        let (json, _) = witness_json();
        for path in [["Sig", "X"], ["Hm", "Y"]] {
            let mut tampered = json.clone();
            let original = tampered[path[0]][path[1]].as_str().unwrap().to_string();
            let bumped = field_from_decimal::<Fq>(&original).unwrap() + Fq::from(1u64);
            tampered[path[0]][path[1]] = json!(field_to_decimal(&bumped));
            // Moving one coordinate knocks the point off the curve.
            assert!(matches!(parse(&tampered), Err(Error::Pairing(_))));
        }
    }
}
