//! Health check endpoint

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health_check))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok", or "degraded" when the store does not answer
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub db: bool,
}

pub async fn health_check(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: store ping failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db { "ok" } else { "degraded" },
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        db,
    })
}
