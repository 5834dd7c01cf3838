// src/models/mod.rs
pub mod credential;
pub mod points;
pub mod proof_bundle;
pub mod witness;
