//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::auth_handler::SignupResponse;
use common::ErrorResponse;
use domain::{SignupPayload, UserResponse, UserRole};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::auth_handler::signup),
    components(schemas(SignupPayload, SignupResponse, UserResponse, UserRole, ErrorResponse)),
    tags((name = "Authentication", description = "User registration"))
)]
pub struct ApiDoc;
