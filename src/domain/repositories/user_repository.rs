use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{credential::PasswordDigest, user::User},
};

/// Persistence gateway for users and their login history.
#[async_trait]
pub trait UserRepository {
    /// Insert a new user row. Returns `RepositoryError::Duplicate` when the
    /// username uniqueness constraint is violated.
    async fn insert_user(
        &self,
        username: &str,
        digest: &PasswordDigest,
    ) -> Result<i32, RepositoryError>;

    /// Look up a user by exact (username, digest) equality. No partial or
    /// fuzzy matching.
    async fn find_by_credentials(
        &self,
        username: &str,
        digest: &PasswordDigest,
    ) -> Result<Option<User>, RepositoryError>;

    /// Append a login row for the given user. Append-only.
    async fn record_login(&self, user_id: i32) -> Result<(), RepositoryError>;
}
