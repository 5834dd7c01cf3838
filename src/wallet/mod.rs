// src/wallet/mod.rs
pub mod bls_signature;
pub mod key_management;
