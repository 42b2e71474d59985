use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        error::DomainError, models::event::EventSummary,
        repositories::event_repository::EventRepository,
    },
    presentation::handlers::{ApiMessage, error_response},
    usecase::event_enrollment_usecase::EventEnrollmentUsecase,
};

// Request

/// json for enroll/withdraw request
///
/// Ids are optional so that a missing id is reported as a 400 rather than a
/// deserialization error.
#[derive(Serialize, Deserialize)]
pub struct EnrollmentRequest {
    pub user_id: Option<i32>,
    pub event_id: Option<i32>,
}

// Response

/// json for a single event in the listing
#[derive(Serialize, Deserialize)]
pub struct EventPayload {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub event_date: NaiveDate,
    pub registration_count: i64,
}

impl From<EventSummary> for EventPayload {
    fn from(summary: EventSummary) -> Self {
        Self {
            id: summary.event.id(),
            name: summary.event.name().to_string(),
            description: summary.event.description().to_string(),
            image_url: summary.event.image_url().to_string(),
            event_date: summary.event.event_date(),
            registration_count: summary.registration_count,
        }
    }
}

/// json for the event listing response
#[derive(Serialize, Deserialize)]
pub struct EventsResponse {
    pub success: bool,
    pub events: Vec<EventPayload>,
}

/// json for a user's registration listing
#[derive(Serialize, Deserialize)]
pub struct RegistrationsResponse {
    pub success: bool,
    pub event_ids: Vec<i32>,
}

/* Router Function and Handler Function */

// Event Router

/// function return Router object
/// Suppose to be nested under /api by main router
pub fn create_event_router<E: EventRepository + Send + Sync + 'static>(
    enrollment_service: EventEnrollmentUsecase<E>,
) -> Router {
    let state = EventState {
        enrollment_service: Arc::new(enrollment_service),
    };

    Router::new()
        .route("/events", get(list_events::<E>))
        .route("/events/register", post(enroll::<E>))
        .route("/events/unregister", post(withdraw::<E>))
        .route("/user/{user_id}/registrations", get(user_registrations::<E>))
        .with_state(state)
}

pub struct EventState<E: EventRepository> {
    pub enrollment_service: Arc<EventEnrollmentUsecase<E>>,
}

impl<E: EventRepository> Clone for EventState<E> {
    fn clone(&self) -> Self {
        Self {
            enrollment_service: Arc::clone(&self.enrollment_service),
        }
    }
}

// handler function

/// handler function for the event listing
async fn list_events<E: EventRepository + Send + Sync>(
    State(state): State<EventState<E>>,
) -> impl IntoResponse {
    match state.enrollment_service.list_events().await {
        Ok(summaries) => {
            let response = EventsResponse {
                success: true,
                events: summaries.into_iter().map(EventPayload::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// handler function for enrollment
async fn enroll<E: EventRepository + Send + Sync>(
    State(state): State<EventState<E>>,
    Json(payload): Json<EnrollmentRequest>,
) -> impl IntoResponse {
    let (Some(user_id), Some(event_id)) = (payload.user_id, payload.event_id) else {
        return error_response(DomainError::InvalidInput);
    };

    match state.enrollment_service.enroll(user_id, event_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiMessage::ok("Registered for event successfully")),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// handler function for withdrawal
async fn withdraw<E: EventRepository + Send + Sync>(
    State(state): State<EventState<E>>,
    Json(payload): Json<EnrollmentRequest>,
) -> impl IntoResponse {
    let (Some(user_id), Some(event_id)) = (payload.user_id, payload.event_id) else {
        return error_response(DomainError::InvalidInput);
    };

    match state.enrollment_service.withdraw(user_id, event_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiMessage::ok("Unregistered from event successfully")),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// handler function for a user's registration listing
async fn user_registrations<E: EventRepository + Send + Sync>(
    State(state): State<EventState<E>>,
    Path(user_id): Path<i32>,
) -> impl IntoResponse {
    match state.enrollment_service.user_registrations(user_id).await {
        Ok(event_ids) => {
            let response = RegistrationsResponse {
                success: true,
                event_ids,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}
