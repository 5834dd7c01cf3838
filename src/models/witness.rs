// src/models/witness.rs
//! Per-field witness records as they appear in signed credentials and in
//! proof bundles.

use crate::models::points::{G1Point, G2Point};
use serde::{Deserialize, Serialize};

/// Everything a prover needs to attest to one signed field.
///
/// `Sig` is the private input of the verification circuit; the remaining
/// three points are public.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PerFieldWitness {
    #[serde(rename = "Sig")]
    pub sig: G1Point,
    #[serde(rename = "G2")]
    pub g2: G2Point,
    #[serde(rename = "Hm")]
    pub hm: G1Point,
    #[serde(rename = "Pk")]
    pub pk: G2Point,
}

/// The public half of a [`PerFieldWitness`], as carried by a proof bundle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicWitness {
    #[serde(rename = "G2")]
    pub g2: G2Point,
    #[serde(rename = "Hm")]
    pub hm: G1Point,
    #[serde(rename = "Pk")]
    pub pk: G2Point,
}

impl PerFieldWitness {
    pub fn public_part(&self) -> PublicWitness {
        PublicWitness {
            g2: self.g2.clone(),
            hm: self.hm.clone(),
            pk: self.pk.clone(),
        }
    }
}
