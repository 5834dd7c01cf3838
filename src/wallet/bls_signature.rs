// src/wallet/bls_signature.rs
//! Per-field BLS signatures on BLS12-377.
//!
//! A signature is `-(sk * H(m))` in G1. Negating at signing time lets
//! verification check a single product of pairings,
//! `e(Sig, G2) * e(H(m), Pk) == 1`, instead of comparing two pairings.

use crate::error::{Error, Result};
use crate::utils::crypto::hash_to_g1;
use crate::wallet::key_management::IssuerKeyPair;
use ark_bls12_377::{Bls12_377, G1Affine, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::One;

/// Output of [`sign`]: the negated signature and the hashed message it was
/// computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSignature {
    pub signature: G1Affine,
    pub hashed_message: G1Affine,
}

/// Signs `message` with the issuer's secret key.
///
/// # Errors
/// `Error::Hash` if the message cannot be mapped to G1.
pub fn sign(keypair: &IssuerKeyPair, message: &[u8]) -> Result<FieldSignature> {
    let hashed_message = hash_to_g1(message)?;
    let signature = -(hashed_message * keypair.secret_key()).into_affine();
    Ok(FieldSignature {
        signature,
        hashed_message,
    })
}

/// Checks `e(signature, G2) * e(H(message), public_key) == 1`.
///
/// Points are taken as given; callers decoding external input get subgroup
/// validation from [`G1Point::to_affine`](crate::models::points::G1Point::to_affine)
/// and [`G2Point::to_affine`](crate::models::points::G2Point::to_affine).
///
/// # Errors
/// - `Error::Hash` if the message cannot be mapped to G1
/// - `Error::Pairing` if the final exponentiation is undefined
pub fn verify(public_key: &G2Affine, message: &[u8], signature: &G1Affine) -> Result<bool> {
    let hashed_message = hash_to_g1(message)?;
    pairing_product_is_one(signature, &G2Affine::generator(), &hashed_message, public_key)
}

/// Evaluates `e(sig, g2) * e(hm, pk)` and compares it with the identity of
/// the target group.
pub fn pairing_product_is_one(
    sig: &G1Affine,
    g2: &G2Affine,
    hm: &G1Affine,
    pk: &G2Affine,
) -> Result<bool> {
    let miller = Bls12_377::multi_miller_loop([*sig, *hm], [*g2, *pk]);
    let product = Bls12_377::final_exponentiation(miller)
        .ok_or_else(|| Error::Pairing("final exponentiation failed".into()))?;
    Ok(product.0.is_one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_377::Fr;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sign_then_verify() {
        let keypair = IssuerKeyPair::generate(&mut StdRng::seed_from_u64(7));
        for msg in [&b"name: Alice"[..], b"age: 30", b""] {
            let signed = sign(&keypair, msg).unwrap();
            assert!(verify(&keypair.public_key, msg, &signed.signature).unwrap());
        }
    }

    #[test]
    fn test_signature_is_negated_scalar_multiple() {
        let keypair = IssuerKeyPair::from_secret(Fr::from(5u64));
        let signed = sign(&keypair, b"name: Alice").unwrap();
        let unnegated = (signed.hashed_message * Fr::from(5u64)).into_affine();
        assert_eq!(signed.signature, -unnegated);
        assert_eq!(signed.hashed_message, hash_to_g1(b"name: Alice").unwrap());
    }

    #[test]
    fn test_mismatched_message_fails() {
        let keypair = IssuerKeyPair::generate(&mut StdRng::seed_from_u64(7));
        let signed = sign(&keypair, b"name: Alice").unwrap();
        assert!(!verify(&keypair.public_key, b"name: Mallory", &signed.signature).unwrap());
    }

    #[test]
    fn test_wrong_public_key_fails() {
        let mut rng = StdRng::seed_from_u64(7);
        let issuer = IssuerKeyPair::generate(&mut rng);
        let other = IssuerKeyPair::generate(&mut rng);
        let signed = sign(&issuer, b"name: Alice").unwrap();
        assert!(!verify(&other.public_key, b"name: Alice", &signed.signature).unwrap());
    }

    #[test]
    fn test_unnegated_signature_fails() {
        let keypair = IssuerKeyPair::generate(&mut StdRng::seed_from_u64(7));
        let signed = sign(&keypair, b"name: Alice").unwrap();
        assert!(!verify(&keypair.public_key, b"name: Alice", &-signed.signature).unwrap());
    }
}
