use serde::{Deserialize, Serialize};

/// Value object representing a password digest (hex-encoded SHA-256).
///
/// The digest is unsalted and deterministic: equal passwords always produce
/// equal digests, and lookup is by exact equality against the stored column.
/// This matches the digests already persisted in the store, so it must not be
/// swapped for a salted scheme without a migration path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Create a `PasswordDigest` from an already computed hex string
    pub fn new(hex: String) -> Self {
        Self(hex)
    }

    /// Get the digest as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
