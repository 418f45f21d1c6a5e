//! Database Module
//!
//! MongoDB persistence for the menu and reservation collections.

pub mod memory;
pub mod models;
pub mod mongo;
pub mod repository;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use repository::{
    MenuRepository, RepoError, RepoResult, ReservationRepository, Store,
};

/// Database used when neither `MONGO_DB` nor the URI names one
pub const DEFAULT_DATABASE: &str = "test";

pub const MENU_COLLECTION: &str = "menu";
pub const RESERVATION_COLLECTION: &str = "reservations";
