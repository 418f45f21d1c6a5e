//! Reservation Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A table booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Calendar date as submitted (e.g. "2024-12-25"), not parsed
    pub date: String,
    /// Time of day as submitted (e.g. "19:00"), not parsed
    pub time: String,
    pub guests: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Raw booking form as posted by the client
///
/// Every field is optional here so that a missing field is reported as a
/// validation error instead of a deserialization failure. `guests` stays an
/// untyped JSON value because HTML number inputs submit strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<Value>,
    pub message: Option<String>,
}

/// Validated insert payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub message: Option<String>,
}

impl ReservationCreate {
    /// Attach a store-assigned id
    pub fn into_reservation(self, id: impl Into<String>) -> Reservation {
        Reservation {
            id: id.into(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            guests: self.guests,
            message: self.message,
        }
    }
}
