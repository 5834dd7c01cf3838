// src/wallet/key_management.rs
//! Issuer key management.
//!
//! The issuer's long-term BLS keypair lives in a single text file holding the
//! secret scalar in base-16. The public key is never stored; it is recomputed
//! as `sk * G2` on every load.
//!
//! Uses the following primitives:
//! - BLS12-377 scalar field for the secret key (via `ark-bls12-377`)
//! - Operating-system randomness for key generation (via `rand`)

use crate::error::{Error, Result};
use ark_bls12_377::{Fr, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_std::UniformRand;
use log::info;
use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// The issuer's signing keypair.
///
/// Invariant: `public_key == secret_key * G2Generator`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuerKeyPair {
    /// Secret scalar (never serialized except to the key file)
    secret_key: Fr,
    /// Derived public key in G2
    pub public_key: G2Affine,
}

impl IssuerKeyPair {
    /// Derives the keypair for a given secret scalar.
    pub fn from_secret(secret_key: Fr) -> Self {
        let public_key = (G2Affine::generator() * secret_key).into_affine();
        IssuerKeyPair {
            secret_key,
            public_key,
        }
    }

    /// Draws a secret uniformly from `[0, r)` where `r` is the group order.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::from_secret(Fr::rand(rng))
    }

    pub fn secret_key(&self) -> &Fr {
        &self.secret_key
    }

    /// Lowercase base-16 text of the secret, without prefix.
    pub fn secret_hex(&self) -> String {
        let integer: BigUint = self.secret_key.into();
        integer.to_str_radix(16)
    }

    /// Parses the key file format. Surrounding whitespace is ignored and
    /// values at or above the group order are reduced.
    ///
    /// # Errors
    /// `Error::Parse` for empty or non-hex content.
    pub fn from_hex(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Parse("key file is empty".into()));
        }
        if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::Parse("key file is not valid base-16".into()));
        }
        let integer = BigUint::parse_bytes(text.as_bytes(), 16)
            .ok_or_else(|| Error::Parse("key file is not valid base-16".into()))?;
        Ok(Self::from_secret(Fr::from(integer)))
    }

    /// Loads the keypair at `path`, creating it on first use.
    ///
    /// # Behavior
    /// - Missing file: a fresh key is generated and written as base-16 text
    ///   (owner-only permissions on Unix)
    /// - Existing file: read-only; the public key is recomputed
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be created, read or written
    /// - `Error::Parse` if an existing file is not valid base-16
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            return Self::from_hex(&text);
        }

        info!("Issuer key file {} does not exist, creating it", path.display());
        let keypair = Self::generate(&mut OsRng);
        let mut file = create_private_file(path).map_err(|e| Error::io(path, e))?;
        file.write_all(keypair.secret_hex().as_bytes())
            .map_err(|e| Error::io(path, e))?;
        Ok(keypair)
    }
}

#[cfg(unix)]
fn create_private_file(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn create_private_file(path: &Path) -> std::io::Result<fs::File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}
