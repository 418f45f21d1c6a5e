//! Reservation API Handlers

use axum::extract::rejection::JsonRejection;
use axum::{Json, extract::State};
use http::StatusCode;
use shared::ErrorCode;
use shared::models::{Reservation, ReservationCreate, ReservationRequest};

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, is_blank, non_blank,
    parse_guests, validate_optional_text, validate_text_len,
};
use crate::utils::{AppError, AppResult};

/// GET /api/reservations - every booking, in store order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state.store.list_reservations().await?;
    Ok(Json(reservations))
}

/// POST /api/reservations
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ReservationRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let Json(payload) = payload.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let data = validate_reservation(payload)?;

    let reservation = state.store.create_reservation(data).await?;
    tracing::info!(
        id = %reservation.id,
        date = %reservation.date,
        time = %reservation.time,
        guests = reservation.guests,
        "Reservation created"
    );

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Turn a submitted booking form into an insert payload
///
/// Missing required fields are reported together, ahead of a malformed
/// `guests` value and length limits.
pub fn validate_reservation(req: ReservationRequest) -> AppResult<ReservationCreate> {
    let guests = match req.guests.as_ref() {
        Some(value) => parse_guests(value),
        None => Ok(None),
    };

    let mut missing = Vec::new();
    if is_blank(req.name.as_deref()) {
        missing.push("name");
    }
    if is_blank(req.date.as_deref()) {
        missing.push("date");
    }
    if is_blank(req.time.as_deref()) {
        missing.push("time");
    }
    if matches!(guests, Ok(None)) {
        missing.push("guests");
    }
    if !missing.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::ReservationIncomplete,
            format!("Missing required fields: {}", missing.join(", ")),
        )
        .with_detail("fields", missing));
    }

    let Some(guests) = guests? else {
        return Err(AppError::new(ErrorCode::ReservationIncomplete));
    };

    let name = req.name.unwrap_or_default();
    let date = req.date.unwrap_or_default();
    let time = req.time.unwrap_or_default();
    let email = non_blank(req.email);
    let phone = non_blank(req.phone);
    let message = non_blank(req.message);

    validate_text_len(&name, "name", MAX_NAME_LEN)?;
    validate_text_len(&date, "date", MAX_SHORT_TEXT_LEN)?;
    validate_text_len(&time, "time", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&message, "message", MAX_NOTE_LEN)?;

    Ok(ReservationCreate {
        name,
        email,
        phone,
        date,
        time,
        guests,
        message,
    })
}
