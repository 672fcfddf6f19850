//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Serialize;
use utoipa::ToSchema;

use common::{AppResult, ErrorResponse};
use domain::{SignupPayload, User, UserResponse, MSG_SIGNUP_SUCCESS};

use crate::extractors::ValidatedSignup;
use crate::state::AppState;

/// Successful signup response
#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    /// Created user, without credentials
    pub user: UserResponse,
    #[schema(example = "User created successfully")]
    pub message: String,
    pub success: bool,
}

impl From<User> for SignupResponse {
    fn from(user: User) -> Self {
        Self {
            user: UserResponse::from(user),
            message: MSG_SIGNUP_SUCCESS.to_string(),
            success: true,
        }
    }
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/signup", post(signup))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "Authentication",
    request_body = SignupPayload,
    responses(
        (status = 201, description = "User created", body = SignupResponse),
        (status = 400, description = "Invalid input or user already exists", body = ErrorResponse),
        (status = 500, description = "Database operation failed", body = ErrorResponse)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedSignup(request): ValidatedSignup,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let user = state.signup_service.signup(request).await?;

    Ok((StatusCode::CREATED, Json(SignupResponse::from(user))))
}
