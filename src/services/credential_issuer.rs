// src/services/credential_issuer.rs
//! Credential Issuer Service
//!
//! Turns an unsigned credential into a signed one by signing every subject
//! attribute separately. One signature per field is what gives selective
//! disclosure here: a holder can later prove knowledge of the signature on a
//! single field without revealing the others. This is a toy scheme and not
//! meant to carry richer disclosure predicates.

use crate::error::{Error, Result};
use crate::models::credential::{CredentialDocument, FieldStatement};
use crate::models::points::{G1Point, G2Point};
use crate::models::witness::PerFieldWitness;
use crate::wallet::bls_signature;
use crate::wallet::key_management::IssuerKeyPair;
use ark_bls12_377::G2Affine;
use ark_ec::AffineRepr;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Value of `proof.type` on signed credentials.
pub const PROOF_TYPE: &str = "ToyBls12377Signature2020OnFields";

/// Result of signing one credential.
#[derive(Debug, Clone)]
pub struct Issuance {
    /// The signed credential document
    pub credential: CredentialDocument,
    /// Fields whose fresh signature failed its own verification
    pub unverified_fields: Vec<String>,
}

/// Service that signs credentials with a single issuer key.
pub struct CredentialIssuer {
    keypair: IssuerKeyPair,
    issuer_did: String,
    /// Abort instead of warning when a self-check fails
    strict_self_check: bool,
}

impl CredentialIssuer {
    /// Creates a new CredentialIssuer instance
    ///
    /// # Arguments
    /// * `keypair` - Issuer signing keypair
    /// * `issuer_did` - Identifier written into the `issuer` claim
    pub fn new(keypair: IssuerKeyPair, issuer_did: impl Into<String>) -> Self {
        CredentialIssuer {
            keypair,
            issuer_did: issuer_did.into(),
            strict_self_check: false,
        }
    }

    pub fn with_strict_self_check(mut self, strict: bool) -> Self {
        self.strict_self_check = strict;
        self
    }

    pub fn keypair(&self) -> &IssuerKeyPair {
        &self.keypair
    }

    /// Signs `credential` using the current time as issuance date.
    pub fn assemble(&self, credential: CredentialDocument) -> Result<Issuance> {
        self.assemble_at(credential, Utc::now())
    }

    /// Signs every subject field of `credential`.
    ///
    /// # Process Flow
    /// 1. Sets `issuer`, `issuerPubKey` and `issuanceDate` (RFC 3339)
    /// 2. Creates `proof` and `witnesses` maps if absent, keeping other entries
    /// 3. For each field in key order: signs `"<key>: <value>"`, re-verifies
    ///    the signature, and records it under `proof` and `witnesses`
    ///
    /// # Errors
    /// Any signing failure, tagged with the field it happened on. A failed
    /// self-check is only an error in strict mode.
    pub fn assemble_at(
        &self,
        mut credential: CredentialDocument,
        issued_at: DateTime<Utc>,
    ) -> Result<Issuance> {
        let public_key = self.keypair.public_key;
        let statements = credential.verifiable_credential.statements();

        let vc = &mut credential.verifiable_credential;
        vc.issuer = Some(Value::String(self.issuer_did.clone()));
        vc.issuer_pub_key = Some(G2Point::from(&public_key));
        vc.issuance_date = Some(issued_at.to_rfc3339_opts(SecondsFormat::Secs, true));

        let proof = vc.proof.get_or_insert_with(Map::new);
        let witnesses = vc.witnesses.get_or_insert_with(Map::new);
        proof.insert("type".to_string(), Value::String(PROOF_TYPE.to_string()));

        let mut unverified_fields = Vec::new();
        for statement in &statements {
            let (witness, verified) = self
                .sign_statement(statement)
                .map_err(|e| e.in_field(&statement.key))?;

            if !verified {
                warn!("Signature[{}] NOT verified", statement.key);
                if self.strict_self_check {
                    return Err(Error::SelfVerificationFailed(statement.key.clone()));
                }
                unverified_fields.push(statement.key.clone());
            }

            proof.insert(statement.key.clone(), serde_json::to_value(&witness.sig)?);
            witnesses.insert(statement.key.clone(), serde_json::to_value(&witness)?);
        }

        Ok(Issuance {
            credential,
            unverified_fields,
        })
    }

    /// Signs one statement and immediately verifies the result.
    fn sign_statement(&self, statement: &FieldStatement) -> Result<(PerFieldWitness, bool)> {
        let message = statement.message();
        let signed = bls_signature::sign(&self.keypair, message.as_bytes())?;
        info!("Signature[{}]: {:?}", statement.key, G1Point::from(&signed.signature));

        let verified =
            bls_signature::verify(&self.keypair.public_key, message.as_bytes(), &signed.signature)?;

        let witness = PerFieldWitness {
            sig: G1Point::from(&signed.signature),
            g2: G2Point::from(&G2Affine::generator()),
            hm: G1Point::from(&signed.hashed_message),
            pk: G2Point::from(&self.keypair.public_key),
        };
        Ok((witness, verified))
    }

    /// Reads an unsigned credential file, signs it, and writes
    /// `<name>-signed.json` next to it.
    ///
    /// # Returns
    /// Path of the signed credential and the issuance report
    pub fn issue_file(&self, unsigned_path: impl AsRef<Path>) -> Result<(PathBuf, Issuance)> {
        let unsigned_path = unsigned_path.as_ref();
        let data = fs::read(unsigned_path).map_err(|e| Error::io(unsigned_path, e))?;
        let credential = CredentialDocument::from_json(&data)?;

        let issuance = self.assemble(credential)?;

        let signed_path = signed_credential_path(unsigned_path);
        let output = issuance.credential.to_json_pretty()?;
        fs::write(&signed_path, output).map_err(|e| Error::io(&signed_path, e))?;
        info!("Signed credential written to {}", signed_path.display());
        Ok((signed_path, issuance))
    }
}

/// `foo.json` becomes `foo-signed.json`; other names get `-signed.json`
/// appended.
pub fn signed_credential_path(unsigned_path: &Path) -> PathBuf {
    let name = unsigned_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(".json").unwrap_or(&name);
    unsigned_path.with_file_name(format!("{}-signed.json", stem))
}
