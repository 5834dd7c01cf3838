// src/services/mod.rs
pub mod credential_issuer;
pub mod verifier;
