use sha2::{Digest, Sha256};

use crate::domain::{models::credential::PasswordDigest, services::digest_service::PasswordDigester};

/// Unsalted single-round SHA-256, hex-encoded.
///
/// This is a known weakness kept for compatibility: the store already holds
/// digests in this form and authentication matches by equality, so upgrading
/// the scheme needs a migration (e.g. re-hash on next successful login)
/// rather than a drop-in swap.
#[derive(Clone)]
pub struct Sha256PasswordDigester;

impl Sha256PasswordDigester {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256PasswordDigester {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordDigester for Sha256PasswordDigester {
    fn digest(&self, plain_password: &str) -> PasswordDigest {
        let hash = Sha256::digest(plain_password.as_bytes());
        PasswordDigest::new(hex::encode(hash))
    }
}
