// src/models/credential.rs
//! Verifiable Credential envelope.
//!
//! Only the keys this system reads or writes are typed; everything else in
//! the document is carried through untouched so a signed credential is the
//! unsigned one plus the issuance additions.

use crate::error::{Error, Result};
use crate::models::points::G2Point;
use crate::models::witness::PerFieldWitness;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top level of a credential file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CredentialDocument {
    #[serde(rename = "verifiableCredential")]
    pub verifiable_credential: VerifiableCredential,

    /// Any other top-level keys, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The credential proper.
///
/// # Fields
/// - `credential_subject`: attribute name to value, one signature per entry
/// - `issuer`, `issuer_pub_key`, `issuance_date`: set at issuance
/// - `proof`: field name to signature (plus the scheme `type`)
/// - `witnesses`: field name to [`PerFieldWitness`](crate::models::witness::PerFieldWitness)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VerifiableCredential {
    #[serde(rename = "credentialSubject")]
    pub credential_subject: Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub issuer: Option<Value>,

    #[serde(rename = "issuerPubKey", skip_serializing_if = "Option::is_none", default)]
    pub issuer_pub_key: Option<G2Point>,

    #[serde(rename = "issuanceDate", skip_serializing_if = "Option::is_none", default)]
    pub issuance_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub proof: Option<Map<String, Value>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub witnesses: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One `(key, value)` attribute of the credential subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatement {
    pub key: String,
    pub value: String,
}

impl FieldStatement {
    /// Builds a statement from a subject entry. JSON strings are used
    /// verbatim, anything else by its compact JSON text.
    pub fn from_entry(key: &str, value: &Value) -> Self {
        let value = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        FieldStatement {
            key: key.to_string(),
            value,
        }
    }

    /// The signed message, `"<key>: <value>"`.
    pub fn message(&self) -> String {
        format!("{}: {}", self.key, self.value)
    }
}

impl CredentialDocument {
    /// Parses a credential, failing closed on an unexpected shape.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| Error::Schema(format!("credential: {}", e)))
    }

    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

impl VerifiableCredential {
    /// The witness recorded for `field` at issuance.
    ///
    /// # Errors
    /// `Error::Schema` if the credential has no witness for `field` or the
    /// entry is not a witness record.
    pub fn field_witness(&self, field: &str) -> Result<PerFieldWitness> {
        let entry = self
            .witnesses
            .as_ref()
            .and_then(|w| w.get(field))
            .ok_or_else(|| Error::Schema(format!("no witness for field `{}`", field)))?;
        serde_json::from_value(entry.clone())
            .map_err(|e| Error::Schema(format!("witness for field `{}`: {}", field, e)))
    }

    /// Subject attributes in ascending key order.
    pub fn statements(&self) -> Vec<FieldStatement> {
        self.credential_subject
            .iter()
            .map(|(key, value)| FieldStatement::from_entry(key, value))
            .collect()
    }
}
