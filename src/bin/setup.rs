// src/bin/setup.rs

//! # Circuit Parameter Generation
//!
//! Usage: `setup <proving_key_out> <verifying_key_out>`
//!
//! Writes the Groth16 proving key (binary) and the base64 verifying key to
//! pin in verifiers. The randomness used here is toxic waste; run it
//! somewhere trusted.

use anyhow::Context;
use bls_vc::zkp::proof_generation::{setup, write_parameters};
use rand::rngs::OsRng;
use std::path::Path;
use std::process::ExitCode;

fn run(proving_key_path: &str, verifying_key_path: &str) -> anyhow::Result<()> {
    let (pk, _) = setup(&mut OsRng).context("generating circuit parameters")?;
    write_parameters(&pk, Path::new(proving_key_path), Path::new(verifying_key_path))
        .context("writing circuit parameters")?;
    println!("Verifying key written to {}", verifying_key_path);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        eprintln!("Usage: setup <proving_key_out> <verifying_key_out>");
        return ExitCode::FAILURE;
    }

    match run(&args[0], &args[1]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error {:#}", err);
            ExitCode::FAILURE
        }
    }
}
