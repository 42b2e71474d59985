use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        repositories::user_repository::UserRepository, services::digest_service::PasswordDigester,
    },
    presentation::handlers::{ApiMessage, error_response},
    usecase::{login_usecase::LoginUsecase, register_user_usecase::RegisterUserUsecase},
};

// Request

/// json for register request
///
/// Fields are optional so that an absent field reaches the empty-input check
/// and comes back as a 400 instead of a deserialization error.
#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// json for login request
#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// Response

/// json for login response
#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user_id: i32,
}

/* Router Function and Handler Function */

// Auth Router

/// function return Router object
/// Suppose to be merged by main router
pub fn create_auth_router<
    U: UserRepository + Send + Sync + 'static,
    P: PasswordDigester + Send + Sync + 'static,
>(
    register_service: RegisterUserUsecase<U, P>,
    login_service: LoginUsecase<U, P>,
) -> Router {
    let state = AuthState {
        register_service: Arc::new(register_service),
        login_service: Arc::new(login_service),
    };

    Router::new()
        .route("/register", post(register::<U, P>))
        .route("/login", post(login::<U, P>))
        .with_state(state)
}

pub struct AuthState<U: UserRepository, P: PasswordDigester> {
    pub register_service: Arc<RegisterUserUsecase<U, P>>,
    pub login_service: Arc<LoginUsecase<U, P>>,
}

impl<U: UserRepository, P: PasswordDigester> Clone for AuthState<U, P> {
    fn clone(&self) -> Self {
        Self {
            register_service: Arc::clone(&self.register_service),
            login_service: Arc::clone(&self.login_service),
        }
    }
}

// handler function

/// handler function for register
async fn register<U: UserRepository + Send + Sync, P: PasswordDigester + Send + Sync>(
    State(state): State<AuthState<U, P>>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let username = payload.username.as_deref().unwrap_or("");
    let password = payload.password.as_deref().unwrap_or("");

    match state.register_service.register(username, password).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiMessage::ok("User registered successfully")),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// handler function for login
async fn login<U: UserRepository + Send + Sync, P: PasswordDigester + Send + Sync>(
    State(state): State<AuthState<U, P>>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    match state
        .login_service
        .login(&payload.username, &payload.password)
        .await
    {
        Ok(user_id) => {
            let response = LoginResponse {
                success: true,
                message: "Login successful".to_string(),
                user_id,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}
