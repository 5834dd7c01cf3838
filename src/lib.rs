// src/lib.rs

//! # Toy Selective-Disclosure Credentials over BLS12-377
//!
//! Issues verifiable credentials carrying one BLS signature per subject field
//! and verifies Groth16 proofs that a holder knows such a signature.
//!
//! ## Architecture Overview
//! 1. **Wallet Layer**: issuer key storage and per-field BLS signatures
//! 2. **Services Layer**: credential assembly and pinned-key proof verification
//! 3. **ZKP Layer**: witness parsing, the in-circuit pairing check, Groth16
//! 4. **Models**: typed JSON for credentials, curve points and proof bundles
//!
//! ## Environment Variables
//! See [`config::Settings`].

pub mod config;       // Environment-driven settings
pub mod error;        // Error taxonomy
pub mod models;       // Data structures
pub mod services;     // Issuance and verification
pub mod utils;        // Hashing and encodings
pub mod wallet;       // Issuer keys and signatures
pub mod zkp;          // Circuit, witnesses, Groth16

pub use error::{Error, Result};
