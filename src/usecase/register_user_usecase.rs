use crate::domain::{
    error::{DomainError, RepositoryError},
    repositories::user_repository::UserRepository,
    services::digest_service::PasswordDigester,
};

pub struct RegisterUserUsecase<U: UserRepository, P: PasswordDigester> {
    user_repository: U,
    digester: P,
}

impl<U: UserRepository, P: PasswordDigester> RegisterUserUsecase<U, P> {
    pub fn new(user_repository: U, digester: P) -> Self {
        Self {
            user_repository,
            digester,
        }
    }

    /// Register a new user and return the assigned id.
    ///
    /// The only side effect is the single user insert; the uniqueness
    /// constraint on the username is what rejects duplicates.
    pub async fn register(&self, username: &str, password: &str) -> Result<i32, DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::InvalidInput);
        }

        let digest = self.digester.digest(password);

        match self.user_repository.insert_user(username, &digest).await {
            Ok(id) => Ok(id),
            Err(RepositoryError::Duplicate) => Err(DomainError::DuplicateUsername),
            Err(e) => Err(DomainError::Repository(e)),
        }
    }
}
