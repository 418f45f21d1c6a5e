//! Reservation API

mod handler;

pub use handler::validate_reservation;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/reservations", routes())
        .route(
            "/api/reservations/",
            get(handler::list).post(handler::create),
        )
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).post(handler::create))
}
