use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    domain::{
        error::RepositoryError,
        models::{credential::PasswordDigest, user::User},
        repositories::user_repository::UserRepository,
    },
    infrastructure::{
        entities::{logins, users},
        map_db_err,
    },
};

#[derive(Clone)]
pub struct MysqlUserRepository {
    db: DatabaseConnection,
}

impl MysqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for MysqlUserRepository {
    async fn insert_user(
        &self,
        username: &str,
        digest: &PasswordDigest,
    ) -> Result<i32, RepositoryError> {
        let model = users::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(digest.as_str().to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = users::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.last_insert_id)
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        digest: &PasswordDigest,
    ) -> Result<Option<User>, RepositoryError> {
        let row = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .filter(users::Column::PasswordHash.eq(digest.as_str()))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        match row {
            Some(model) => {
                let user = User::new(model.id, model.username)
                    .map_err(|e| RepositoryError::Database(e.to_string()))?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn record_login(&self, user_id: i32) -> Result<(), RepositoryError> {
        let model = logins::ActiveModel {
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        logins::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
