//! API Gateway Library
//!
//! HTTP front end for user signup: request parsing and validation, the
//! signup route, error rendering and API docs.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use user_service_lib::{build_signup_service, Storage};

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(
    config: GatewayConfig,
    storage: Storage,
) -> Result<(), Box<dyn std::error::Error>> {
    let signup_service = build_signup_service(storage, &config.database).await?;
    let state = AppState::new(signup_service);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
