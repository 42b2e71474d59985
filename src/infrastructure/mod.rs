pub mod entities;
pub mod mysql_event_repository;
pub mod mysql_user_repository;
pub mod sha256_password_digester;

use sea_orm::{DbErr, SqlErr};

use crate::domain::error::RepositoryError;

/// Translate a sea-orm error into the repository taxonomy. Uniqueness
/// violations become `Duplicate` so that callers can branch on them.
pub(crate) fn map_db_err(err: DbErr) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::Duplicate,
        _ => RepositoryError::Database(err.to_string()),
    }
}
