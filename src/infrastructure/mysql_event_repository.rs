use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    domain::{
        error::RepositoryError,
        models::event::{Event, EventSummary},
        repositories::event_repository::EventRepository,
    },
    infrastructure::{
        entities::{event_registrations, events},
        map_db_err,
    },
};

#[derive(Clone)]
pub struct MysqlEventRepository {
    db: DatabaseConnection,
}

impl MysqlEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for MysqlEventRepository {
    async fn list_with_counts(&self) -> Result<Vec<EventSummary>, RepositoryError> {
        let event_rows = events::Entity::find()
            .order_by_asc(events::Column::EventDate)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        // One grouped count query instead of a count per event.
        let counts: Vec<(i32, i64)> = event_registrations::Entity::find()
            .select_only()
            .column(event_registrations::Column::EventId)
            .column_as(event_registrations::Column::Id.count(), "count")
            .group_by(event_registrations::Column::EventId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        let counts: HashMap<i32, i64> = counts.into_iter().collect();

        let summaries = event_rows
            .into_iter()
            .map(|model| {
                let registration_count = counts.get(&model.id).copied().unwrap_or(0);
                EventSummary {
                    event: Event::new(
                        model.id,
                        model.name,
                        model.description,
                        model.image_url,
                        model.event_date,
                    ),
                    registration_count,
                }
            })
            .collect();

        Ok(summaries)
    }

    async fn insert_registration(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<(), RepositoryError> {
        // No existence pre-check: the (user_id, event_id) uniqueness
        // constraint decides, and a violation maps to Duplicate.
        let model = event_registrations::ActiveModel {
            user_id: Set(user_id),
            event_id: Set(event_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        event_registrations::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn delete_registration(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<(), RepositoryError> {
        let result = event_registrations::Entity::delete_many()
            .filter(event_registrations::Column::UserId.eq(user_id))
            .filter(event_registrations::Column::EventId.eq(event_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn registered_event_ids(&self, user_id: i32) -> Result<Vec<i32>, RepositoryError> {
        let ids: Vec<i32> = event_registrations::Entity::find()
            .select_only()
            .column(event_registrations::Column::EventId)
            .filter(event_registrations::Column::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(ids)
    }
}
