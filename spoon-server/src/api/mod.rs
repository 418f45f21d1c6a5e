//! HTTP API
//!
//! JSON endpoints under `/api`, a health probe, and the front-end bundle for
//! every other path.

pub mod frontend;
pub mod health;
pub mod menu;
pub mod reservations;

use axum::Router;
use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::any;
use http::{HeaderValue, Method, Uri, header};
use shared::AppError;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// UUID v4 request ids
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(reservations::router())
        // Unknown API paths get a JSON 404 instead of the front-end shell
        .route("/api", any(api_not_found))
        .route("/api/{*path}", any(api_not_found))
}

/// Build the fully layered application
pub fn build_app(state: ServerState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let app = build_router()
        .fallback_service(frontend::serve_dir(&state.config.frontend_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        // Propagate sits inside Set so it sees the generated id
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(XRequestId))
        .with_state(state);

    match cors {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

/// Allow-list CORS for the configured origins, if any
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

async fn api_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
