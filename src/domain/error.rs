use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing fields")]
    InvalidInput,

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Already registered for this event")]
    AlreadyRegistered,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not registered for this event")]
    NotRegistered,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    /// A storage-enforced uniqueness constraint was violated. Callers branch
    /// on this variant, so it must stay distinct from `Database`.
    #[error("Duplicate key")]
    Duplicate,

    #[error("Database error: {0}")]
    Database(String),
}
