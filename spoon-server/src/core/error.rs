use std::net::SocketAddr;

use thiserror::Error;

use crate::db::RepoError;

/// Startup and lifecycle failures
///
/// Request-level failures are `shared::AppError`; anything here stops the
/// process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(#[from] RepoError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for startup code
pub type Result<T> = std::result::Result<T, ServerError>;
