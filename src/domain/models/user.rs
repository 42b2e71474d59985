use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A registered user. Created once on registration, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: i32,
    username: String,
}

impl User {
    pub fn new(id: i32, username: String) -> Result<Self, DomainError> {
        if username.is_empty() {
            return Err(DomainError::InvalidInput);
        }
        Ok(Self { id, username })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
