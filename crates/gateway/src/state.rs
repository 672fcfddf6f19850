//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::service::SignupService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub signup_service: Arc<dyn SignupService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(signup_service: Arc<dyn SignupService>) -> Self {
        Self { signup_service }
    }
}
