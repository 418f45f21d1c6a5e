//! Input validation helpers
//!
//! Text length limits for the booking form and the lenient `guests` parser.

use serde_json::Value;
use shared::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Guest names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Phone numbers, dates, times
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Free-text notes left with a booking
pub const MAX_NOTE_LEN: usize = 500;

// ── Helpers ─────────────────────────────────────────────────────────

/// True when the value is absent or whitespace only
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Validate that a string is within the length limit (in characters)
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field)
        .with_detail("max_len", max_len));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_text_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Drop optional text that is empty after trimming
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse the `guests` field
///
/// Accepts a JSON integer or a string holding one (HTML number inputs post
/// strings). `Ok(None)` means the field is effectively missing: null or a
/// blank string.
pub fn parse_guests(value: &Value) -> Result<Option<i64>, AppError> {
    let invalid = || AppError::new(ErrorCode::ReservationInvalidGuests).with_detail("field", "guests");

    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_i64().map(Some).ok_or_else(invalid),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>().map(Some).map_err(|_| invalid())
        }
        _ => Err(invalid()),
    }
}
