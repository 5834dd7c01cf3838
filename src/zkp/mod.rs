// src/zkp/mod.rs
pub mod circuit;
pub mod proof_generation;
pub mod proof_verification;
pub mod witness_builder;
