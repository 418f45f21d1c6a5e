//! BSON documents as stored in MongoDB
//!
//! The wire models in `shared` carry the id as a hex string; these carry the
//! native `ObjectId` and convert at the repository boundary.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use shared::models::{MenuItem, MenuItemCreate, Reservation, ReservationCreate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: String,
    pub category: String,
    pub spicy: bool,
    pub available: bool,
}

impl From<MenuItemCreate> for MenuDocument {
    fn from(item: MenuItemCreate) -> Self {
        Self {
            id: None,
            name: item.name,
            price: item.price,
            description: item.description,
            image: item.image,
            category: item.category,
            spicy: item.spicy,
            available: item.available,
        }
    }
}

impl From<MenuDocument> for MenuItem {
    fn from(doc: MenuDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            price: doc.price,
            description: doc.description,
            image: doc.image,
            category: doc.category,
            spicy: doc.spicy,
            available: doc.available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    pub guests: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<ReservationCreate> for ReservationDocument {
    fn from(data: ReservationCreate) -> Self {
        Self {
            id: None,
            name: data.name,
            email: data.email,
            phone: data.phone,
            date: data.date,
            time: data.time,
            guests: data.guests,
            message: data.message,
        }
    }
}

impl From<ReservationDocument> for Reservation {
    fn from(doc: ReservationDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            date: doc.date,
            time: doc.time,
            guests: doc.guests,
            message: doc.message,
        }
    }
}
