pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{generate::GenerateController, health};
use crate::infrastructure::config::Config;
use request_id::request_id_middleware;

/// Build the application router.
///
/// Shared by the binary and the e2e harness so both run the exact same
/// routes and middleware stack.
pub fn create_router(
    config: Arc<Config>,
    generate_controller: Arc<GenerateController>,
) -> Router {
    let generate_routes = Router::new()
        .route("/api/generate", post(GenerateController::generate))
        .with_state(generate_controller);

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config);

    // The page is served from a different origin in development, so CORS
    // stays permissive.
    Router::new()
        .merge(health_routes)
        .merge(generate_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    generate_controller: Arc<GenerateController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(config.clone(), generate_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
