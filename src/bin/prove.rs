// src/bin/prove.rs

//! # Proof Generation
//!
//! Usage: `prove <proving_key> <witness_file> <bundle_out> [field]`
//!
//! Without `field`, `witness_file` is a single `{Sig, G2, Hm, Pk}` record.
//! With `field`, it is a signed credential and the witness recorded for that
//! field is used.

use anyhow::Context;
use bls_vc::models::credential::CredentialDocument;
use bls_vc::models::witness::PerFieldWitness;
use bls_vc::zkp::proof_generation::{prove, read_proving_key};
use rand::rngs::OsRng;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

fn load_witness(path: &str, field: Option<&str>) -> anyhow::Result<PerFieldWitness> {
    let data = fs::read(path).context("reading witness file")?;
    let witness = match field {
        Some(field) => CredentialDocument::from_json(&data)
            .context("parsing signed credential")?
            .verifiable_credential
            .field_witness(field)
            .context("selecting field witness")?,
        None => serde_json::from_slice(&data).context("parsing witness JSON")?,
    };
    Ok(witness)
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let pk = read_proving_key(Path::new(&args[0])).context("reading proving key")?;
    let witness = load_witness(&args[1], args.get(3).map(String::as_str))?;

    let bundle = prove(&pk, &witness, &mut OsRng).context("generating proof")?;
    bundle.write_to(&args[2]).context("writing proof bundle")?;
    println!("Proof bundle written to {}", args[2]);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: prove <proving_key> <witness_file> <bundle_out> [field]");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error {:#}", err);
            ExitCode::FAILURE
        }
    }
}
