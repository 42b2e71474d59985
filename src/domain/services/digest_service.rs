use crate::domain::models::credential::PasswordDigest;

/// Service computing the one-way password digest.
///
/// The digest must be deterministic: registration stores it and
/// authentication looks it up by equality, so the same password must always
/// map to the same digest.
pub trait PasswordDigester: Clone {
    fn digest(&self, plain_password: &str) -> PasswordDigest;
}
