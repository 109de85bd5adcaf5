use crate::infrastructure::config::Config;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// There is no datastore to probe; readiness reports the configured provider
/// and model so a misconfigured deploy shows up before the first generation.
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "provider": "openai",
            "model": config.openai_model,
        })),
    )
}
