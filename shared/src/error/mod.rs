//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Error with code, message and optional details
//! - [`ErrorBody`]: JSON shape of every error response
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 2xxx: Reservation errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ReservationIncomplete).with_detail("field", "time");
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, 2001);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
