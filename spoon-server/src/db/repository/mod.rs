//! Repository Module
//!
//! Store-agnostic access to the two collections. Handlers and the seeder
//! only see these traits; [`MongoStore`](crate::db::MongoStore) backs them in
//! production and [`MemoryStore`](crate::db::MemoryStore) in tests.

pub mod menu;
pub mod reservation;

pub use menu::MenuRepository;
pub use reservation::ReservationRepository;

use async_trait::async_trait;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Invalid connection string: {0}")]
    InvalidUri(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<mongodb::error::Error> for RepoError {
    fn from(err: mongodb::error::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Store failures never leak driver detail to the client
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        tracing::error!(error = %err, "Store operation failed");
        AppError::new(ErrorCode::DatabaseError)
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Everything the HTTP layer needs from a backing store
#[async_trait]
pub trait Store: MenuRepository + ReservationRepository {
    /// Round-trip to the backing store
    async fn ping(&self) -> RepoResult<()>;
}
