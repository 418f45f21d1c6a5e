//! Shared types for the Silver Spoon site
//!
//! Wire models for the menu and reservation API, the error type every
//! endpoint renders, and the client-side cart reducer.

pub mod cart;
pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use cart::{CartAction, CartLine, CartState};
pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
