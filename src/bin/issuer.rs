// src/bin/issuer.rs

//! # Credential Issuer
//!
//! Usage: `issuer <issuer_key_file> <unsigned_credential_file>`
//!
//! Loads (or creates) the issuer key, signs every subject field of the
//! credential, and writes `<credential>-signed.json` next to the input.

use anyhow::Context;
use bls_vc::config::Settings;
use bls_vc::services::credential_issuer::CredentialIssuer;
use bls_vc::wallet::key_management::IssuerKeyPair;
use std::process::ExitCode;

fn run(key_path: &str, credential_path: &str) -> anyhow::Result<()> {
    let settings = Settings::from_env();

    let keypair = IssuerKeyPair::load_or_create(key_path).context("getting issuer key")?;
    let issuer = CredentialIssuer::new(keypair, settings.issuer_did)
        .with_strict_self_check(settings.strict_self_check);

    let (signed_path, issuance) = issuer
        .issue_file(credential_path)
        .context("signing credential")?;

    for field in &issuance.unverified_fields {
        eprintln!("Signature[{}] NOT verified", field);
    }
    println!("Signed credential written to {}", signed_path.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        eprintln!("Usage: issuer <issuer_key_file> <unsigned_credential_file>");
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
