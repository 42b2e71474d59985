use crate::domain::{
    error::DomainError, repositories::user_repository::UserRepository,
    services::digest_service::PasswordDigester,
};

pub struct LoginUsecase<U: UserRepository, P: PasswordDigester> {
    user_repository: U,
    digester: P,
}

impl<U: UserRepository, P: PasswordDigester> LoginUsecase<U, P> {
    pub fn new(user_repository: U, digester: P) -> Self {
        Self {
            user_repository,
            digester,
        }
    }

    /// Authenticate by exact (username, digest) match and append a login row.
    ///
    /// An unknown username and a wrong password both produce the same
    /// `InvalidCredentials` error. Keeping the two cases indistinguishable is
    /// intentional; a more specific error would open a username-enumeration
    /// side channel.
    pub async fn login(&self, username: &str, password: &str) -> Result<i32, DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        let digest = self.digester.digest(password);

        let user = self
            .user_repository
            .find_by_credentials(username, &digest)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        self.user_repository.record_login(user.id()).await?;

        Ok(user.id())
    }
}
