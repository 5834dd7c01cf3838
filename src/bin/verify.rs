// src/bin/verify.rs

//! # Proof Verifier
//!
//! Usage: `verify <proof_bundle_file> [pinned_verification_key]`
//!
//! The pinned key defaults to `BLS_VC_PINNED_VK` (runtime, then build time).

use anyhow::Context;
use bls_vc::config::Settings;
use bls_vc::services::verifier::ProofVerifier;
use bls_vc::Error;
use std::process::ExitCode;

fn run(bundle_path: &str, pinned_override: Option<&str>) -> anyhow::Result<()> {
    let settings = Settings::from_env();
    let verifier = ProofVerifier::from_pin(settings.pinned_verifying_key(pinned_override))
        .context("loading pinned verification key")?;

    verifier.verify_file(bundle_path).context("verifying proof")?;
    println!("Proof verified successfully.");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.len() > 2 {
        eprintln!("Usage: verify <proof_bundle_file> [pinned_verification_key]");
        return ExitCode::FAILURE;
    }

    match run(&args[0], args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(Error::UntrustedVerificationKey) = err.downcast_ref::<Error>() {
                eprintln!("{}", Error::UntrustedVerificationKey);
            } else {
                eprintln!("Error {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
