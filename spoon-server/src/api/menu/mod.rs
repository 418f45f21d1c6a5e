//! Menu API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/menu", routes())
        .route("/api/menu/", get(handler::list))
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list))
}
