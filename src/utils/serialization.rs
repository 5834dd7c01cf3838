// src/utils/serialization.rs
//! Serialization utilities for signature and proof material.
//!
//! Provides conversions for:
//! - Field elements to and from canonical decimal strings (JSON witnesses)
//! - Arkworks canonical binary encodings carried as base64 text (proof bundles)

use crate::error::{Error, Result};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use num_bigint::BigUint;

/// Renders a field element as its canonical base-10 integer.
pub fn field_to_decimal<F: PrimeField>(value: &F) -> String {
    let integer: BigUint = (*value).into();
    integer.to_str_radix(10)
}

/// Parses a base-10 integer into a field element.
///
/// # Errors
/// `Error::Schema` if the text is not made only of ASCII digits, or if the
/// integer is not a canonical representative (it must be below the modulus).
pub fn field_from_decimal<F: PrimeField>(text: &str) -> Result<F> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Schema(format!("`{}` is not a decimal integer", text)));
    }
    let integer = BigUint::parse_bytes(text.as_bytes(), 10)
        .ok_or_else(|| Error::Schema(format!("`{}` is not a decimal integer", text)))?;
    let modulus: BigUint = F::MODULUS.into();
    if integer >= modulus {
        return Err(Error::Schema(format!("`{}` exceeds the field modulus", text)));
    }
    Ok(F::from(integer))
}

/// Serializes an arkworks value (compressed) and encodes it as standard base64.
pub fn encode_canonical<T: CanonicalSerialize>(value: &T) -> Result<String> {
    let mut bytes = Vec::new();
    value
        .serialize_compressed(&mut bytes)
        .map_err(|e| Error::Synthesis(format!("serialization failed: {}", e)))?;
    Ok(base64::encode(bytes))
}

/// Decodes standard base64 text into raw bytes.
///
/// # Errors
/// `Error::Decode` on malformed or truncated base64.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    Ok(base64::decode(data)?)
}

/// Deserializes a compressed arkworks value, validating curve points.
///
/// # Errors
/// `Error::Deserialize` if the bytes are not a valid encoding.
pub fn deserialize_canonical<T: CanonicalDeserialize>(bytes: &[u8]) -> Result<T> {
    Ok(T::deserialize_compressed(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_377::{Fq, G1Affine};
    use ark_ec::AffineRepr;
    use ark_ff::{One, Zero};

    #[test]
    fn test_decimal_small_values() {
        assert_eq!(field_to_decimal(&Fq::zero()), "0");
        assert_eq!(field_to_decimal(&Fq::one()), "1");
        assert_eq!(field_from_decimal::<Fq>("42").unwrap(), Fq::from(42u64));
    }

    #[test]
    fn test_decimal_rejects_non_canonical() {
        let modulus: BigUint = Fq::MODULUS.into();
        let modulus = modulus.to_str_radix(10);
        assert!(matches!(field_from_decimal::<Fq>(&modulus), Err(Error::Schema(_))));
        assert!(matches!(field_from_decimal::<Fq>("-1"), Err(Error::Schema(_))));
        assert!(matches!(field_from_decimal::<Fq>("0x10"), Err(Error::Schema(_))));
        assert!(matches!(field_from_decimal::<Fq>(""), Err(Error::Schema(_))));
    }

    #[test]
    fn test_corrupted_base64_is_decode_error() {
        let encoded = encode_canonical(&G1Affine::generator()).unwrap();
        let truncated = &encoded[..encoded.len() - 3];
        assert!(matches!(decode_base64(truncated), Err(Error::Decode(_))));
    }

    #[test]
    fn test_garbage_bytes_are_deserialize_error() {
        let bytes = vec![0xffu8; 48];
        assert!(matches!(
            deserialize_canonical::<G1Affine>(&bytes),
            Err(Error::Deserialize(_))
        ));
    }
}
