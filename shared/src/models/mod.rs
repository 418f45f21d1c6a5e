//! Data models
//!
//! Shared between spoon-server and any client of the HTTP API.
//! IDs are the store's ObjectId rendered as a 24-char hex string and travel
//! as `_id` on the wire, matching what the front end already reads.

pub mod menu_item;
pub mod reservation;

// Re-exports
pub use menu_item::*;
pub use reservation::*;
