use crate::domain::{
    error::{DomainError, RepositoryError},
    models::event::EventSummary,
    repositories::event_repository::EventRepository,
};

pub struct EventEnrollmentUsecase<E: EventRepository> {
    event_repository: E,
}

impl<E: EventRepository> EventEnrollmentUsecase<E> {
    pub fn new(event_repository: E) -> Self {
        Self { event_repository }
    }

    /// Snapshot of all events with their live registration counts, ordered by
    /// event date ascending.
    pub async fn list_events(&self) -> Result<Vec<EventSummary>, DomainError>
    where
        E: Send + Sync,
    {
        Ok(self.event_repository.list_with_counts().await?)
    }

    /// Enroll the user for the event. The insert is attempted directly; the
    /// (user, event) uniqueness constraint rejects a second enrollment, which
    /// surfaces as `AlreadyRegistered`.
    pub async fn enroll(&self, user_id: i32, event_id: i32) -> Result<(), DomainError>
    where
        E: Send + Sync,
    {
        match self
            .event_repository
            .insert_registration(user_id, event_id)
            .await
        {
            Ok(()) => Ok(()),
            Err(RepositoryError::Duplicate) => Err(DomainError::AlreadyRegistered),
            Err(e) => Err(DomainError::Repository(e)),
        }
    }

    /// Withdraw the user from the event. Deleting an already-withdrawn pair
    /// reports `NotRegistered` rather than succeeding silently.
    pub async fn withdraw(&self, user_id: i32, event_id: i32) -> Result<(), DomainError>
    where
        E: Send + Sync,
    {
        match self
            .event_repository
            .delete_registration(user_id, event_id)
            .await
        {
            Ok(()) => Ok(()),
            Err(RepositoryError::NotFound) => Err(DomainError::NotRegistered),
            Err(e) => Err(DomainError::Repository(e)),
        }
    }

    /// Ids of every event the user currently holds a live registration for.
    pub async fn user_registrations(&self, user_id: i32) -> Result<Vec<i32>, DomainError>
    where
        E: Send + Sync,
    {
        Ok(self.event_repository.registered_event_ids(user_id).await?)
    }
}
