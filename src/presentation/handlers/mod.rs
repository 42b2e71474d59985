pub mod auth_handler;
pub mod event_handler;

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Envelope for plain success/failure responses
#[derive(Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Map a service failure to its HTTP response. Every business-rule error is
/// handled here, exactly once, at the presentation boundary. Storage failures
/// are logged and reported as a bare 500 without internal detail.
pub(crate) fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::InvalidInput => StatusCode::BAD_REQUEST,
        DomainError::DuplicateUsername | DomainError::AlreadyRegistered => StatusCode::CONFLICT,
        DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        DomainError::NotRegistered => StatusCode::NOT_FOUND,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = match &err {
        DomainError::Repository(e) => {
            tracing::error!(error = %e, "storage failure");
            "Database error".to_string()
        }
        other => other.to_string(),
    };

    (
        status,
        Json(ApiMessage {
            success: false,
            message,
        }),
    )
        .into_response()
}
