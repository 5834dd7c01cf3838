// src/utils/crypto.rs
//! Hash-to-curve for BLS12-377 G1.
//!
//! Messages are mapped with the RFC 9380 suite
//! `BLS12377G1_XMD:SHA-256_SSWU_RO_`, so points agree with any other
//! implementation of that suite given the same domain separation tag.
//! Signatures use an empty tag.

use crate::error::{Error, Result};
use ark_bls12_377::{g1, G1Affine, G1Projective};
use ark_ec::hashing::curve_maps::wb::WBMap;
use ark_ec::hashing::map_to_curve_hasher::MapToCurveBasedHasher;
use ark_ec::hashing::HashToCurve;
use ark_ff::field_hashers::DefaultFieldHasher;
use sha2::Sha256;

/// Domain separation tag for field-statement signatures.
pub const HASH_TO_G1_DST: &[u8] = b"";

type G1Hasher = MapToCurveBasedHasher<G1Projective, DefaultFieldHasher<Sha256, 128>, WBMap<g1::Config>>;

/// Maps an arbitrary byte string to a point of the prime-order subgroup of G1.
///
/// # Errors
/// `Error::Hash` if the hasher cannot be built or the map fails.
pub fn hash_to_g1(message: &[u8]) -> Result<G1Affine> {
    hash_to_g1_with_dst(HASH_TO_G1_DST, message)
}

/// [`hash_to_g1`] under an explicit domain separation tag.
pub fn hash_to_g1_with_dst(dst: &[u8], message: &[u8]) -> Result<G1Affine> {
    let hasher = G1Hasher::new(dst).map_err(|e| Error::Hash(e.to_string()))?;
    hasher.hash(message).map_err(|e| Error::Hash(e.to_string()))
}
