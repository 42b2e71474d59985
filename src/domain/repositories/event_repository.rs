use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::event::EventSummary};

/// Persistence gateway for events and event registrations.
#[async_trait]
pub trait EventRepository {
    /// All events with their live registration counts, ordered by event date
    /// ascending.
    async fn list_with_counts(&self) -> Result<Vec<EventSummary>, RepositoryError>;

    /// Insert a (user, event) registration. Returns
    /// `RepositoryError::Duplicate` when the pair already holds a live
    /// registration. The uniqueness constraint is the sole correctness
    /// mechanism; implementations must not pre-check and skip the insert.
    async fn insert_registration(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<(), RepositoryError>;

    /// Delete the matching registration row. Returns
    /// `RepositoryError::NotFound` when zero rows were deleted.
    async fn delete_registration(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<(), RepositoryError>;

    /// Ids of every event the user currently holds a live registration for.
    async fn registered_event_ids(&self, user_id: i32) -> Result<Vec<i32>, RepositoryError>;
}
