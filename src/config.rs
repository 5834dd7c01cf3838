// src/config.rs
//! Runtime configuration for the issuer and verifier binaries.
//!
//! ## Environment Variables
//! - `BLS_VC_ISSUER_DID`: (Optional) issuer identifier written into credentials
//! - `BLS_VC_PINNED_VK`: (Optional) base64 verifying key the verifier trusts
//! - `BLS_VC_STRICT_SELF_CHECK`: (Optional) `1`/`true` makes a failed
//!   post-signing self-check abort issuance
//!
//! `BLS_VC_PINNED_VK` is also captured at build time and becomes the
//! compiled-in default when nothing is supplied at runtime.

use dotenv::dotenv;
use std::env;

/// Issuer identifier used when `BLS_VC_ISSUER_DID` is not set.
pub const DEFAULT_ISSUER_DID: &str = "did:example:ToyBLSIssuer";

/// Pinned verifying key baked in at compile time, if any.
pub const COMPILED_PINNED_VERIFYING_KEY: Option<&str> = option_env!("BLS_VC_PINNED_VK");

/// Settings shared by the binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Value of the `issuer` claim on signed credentials
    pub issuer_did: String,
    /// Runtime pinned verifying key; takes precedence over the compiled one
    pub pinned_verifying_key: Option<String>,
    /// Abort issuance if a fresh signature fails to verify
    pub strict_self_check: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            issuer_did: DEFAULT_ISSUER_DID.to_string(),
            pinned_verifying_key: None,
            strict_self_check: false,
        }
    }
}

impl Settings {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Settings {
            issuer_did: non_empty("BLS_VC_ISSUER_DID")
                .unwrap_or_else(|| DEFAULT_ISSUER_DID.to_string()),
            pinned_verifying_key: non_empty("BLS_VC_PINNED_VK").map(|v| v.trim().to_string()),
            strict_self_check: non_empty("BLS_VC_STRICT_SELF_CHECK")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Resolves the pinned verifying key.
    ///
    /// Precedence: explicit override (CLI argument), runtime environment,
    /// compiled-in default. Surrounding whitespace from any source is
    /// stripped here, so the verifier receives the exact key text.
    pub fn pinned_verifying_key(&self, cli_override: Option<&str>) -> Option<String> {
        cli_override
            .map(|v| v.trim().to_string())
            .or_else(|| self.pinned_verifying_key.clone())
            .or_else(|| COMPILED_PINNED_VERIFYING_KEY.map(|v| v.trim().to_string()))
    }
}
