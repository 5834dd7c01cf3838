// src/models/points.rs
//! JSON representation of BLS12-377 curve points.
//!
//! Coordinates are canonical decimal strings:
//! - G1: `{"X": "...", "Y": "..."}`
//! - G2: `{"X": {"A0": "...", "A1": "..."}, "Y": {"A0": "...", "A1": "..."}}`
//!
//! The identity is written with all-zero coordinates. Decoding fails closed:
//! bad text is a schema error, and a point off the curve or outside the
//! prime-order subgroup is a pairing error.

use crate::error::{Error, Result};
use crate::utils::serialization::{field_from_decimal, field_to_decimal};
use ark_bls12_377::{Fq, Fq2, G1Affine, G2Affine};
use ark_ff::Zero;
use serde::{Deserialize, Serialize};

/// A point of G1 as decimal affine coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct G1Point {
    #[serde(rename = "X")]
    pub x: String,
    #[serde(rename = "Y")]
    pub y: String,
}

/// An element of the quadratic extension `Fq2 = Fq[u]`, as `A0 + A1*u`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Fq2Coordinate {
    #[serde(rename = "A0")]
    pub a0: String,
    #[serde(rename = "A1")]
    pub a1: String,
}

/// A point of G2 as decimal affine coordinates over `Fq2`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct G2Point {
    #[serde(rename = "X")]
    pub x: Fq2Coordinate,
    #[serde(rename = "Y")]
    pub y: Fq2Coordinate,
}

impl From<&G1Affine> for G1Point {
    fn from(point: &G1Affine) -> Self {
        let (x, y) = if point.infinity {
            (Fq::zero(), Fq::zero())
        } else {
            (point.x, point.y)
        };
        G1Point {
            x: field_to_decimal(&x),
            y: field_to_decimal(&y),
        }
    }
}

impl From<&Fq2> for Fq2Coordinate {
    fn from(value: &Fq2) -> Self {
        Fq2Coordinate {
            a0: field_to_decimal(&value.c0),
            a1: field_to_decimal(&value.c1),
        }
    }
}

impl From<&G2Affine> for G2Point {
    fn from(point: &G2Affine) -> Self {
        let (x, y) = if point.infinity {
            (Fq2::zero(), Fq2::zero())
        } else {
            (point.x, point.y)
        };
        G2Point {
            x: Fq2Coordinate::from(&x),
            y: Fq2Coordinate::from(&y),
        }
    }
}

impl Fq2Coordinate {
    pub fn to_field(&self) -> Result<Fq2> {
        Ok(Fq2::new(
            field_from_decimal(&self.a0)?,
            field_from_decimal(&self.a1)?,
        ))
    }
}

impl G1Point {
    /// Decodes and validates the point.
    pub fn to_affine(&self) -> Result<G1Affine> {
        let x: Fq = field_from_decimal(&self.x)?;
        let y: Fq = field_from_decimal(&self.y)?;
        if x.is_zero() && y.is_zero() {
            return Ok(G1Affine::identity());
        }
        let point = G1Affine::new_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(Error::Pairing("G1 point is not on the curve".into()));
        }
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(Error::Pairing("G1 point is outside the prime-order subgroup".into()));
        }
        Ok(point)
    }
}

impl G2Point {
    /// Decodes and validates the point.
    pub fn to_affine(&self) -> Result<G2Affine> {
        let x = self.x.to_field()?;
        let y = self.y.to_field()?;
        if x.is_zero() && y.is_zero() {
            return Ok(G2Affine::identity());
        }
        let point = G2Affine::new_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(Error::Pairing("G2 point is not on the curve".into()));
        }
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(Error::Pairing("G2 point is outside the prime-order subgroup".into()));
        }
        Ok(point)
    }
}
