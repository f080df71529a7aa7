//! SHA-256 payload fingerprints
//!
//! A fingerprint is the canonical `sha256:<hex>` checksum of the exact payload
//! bytes. It is embedded in the begin marker of every tagged block and is the
//! only thing compared when deciding whether a block is up to date.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Prefix for every fingerprint token
const PREFIX: &str = "sha256:";

/// Number of hex characters in a SHA-256 digest
const HEX_LEN: usize = 64;

/// Fixed-length content fingerprint of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of a payload string.
    pub fn of(payload: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(payload.as_bytes());
        Self(format!("{}{:x}", PREFIX, hasher.finalize()))
    }

    /// Parse a `sha256:<hex>` token, rejecting anything that is not exactly
    /// 64 lowercase hex digits after the prefix.
    pub fn parse(token: &str) -> Option<Self> {
        let hex = token.strip_prefix(PREFIX)?;
        let valid = hex.len() == HEX_LEN
            && hex
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        valid.then(|| Self(token.to_string()))
    }

    /// The full token, prefix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this fingerprint was produced by `payload`.
    pub fn matches(&self, payload: &str) -> bool {
        *self == Self::of(payload)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
