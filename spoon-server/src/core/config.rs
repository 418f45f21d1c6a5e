use std::path::PathBuf;

use super::error::ServerError;

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Where the compiled front-end bundle lives by default
pub const DEFAULT_FRONTEND_DIR: &str = "frontend/dist";

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | MONGO_URI | (required) | MongoDB connection string |
/// | MONGO_DB | database in the URI, else `test` | database name |
/// | PORT | 5000 | HTTP port |
/// | FRONTEND_DIR | frontend/dist | compiled SPA bundle |
/// | CORS_ORIGINS | (unset) | comma-separated origin allow-list |
/// | ENVIRONMENT | development | reported at startup |
///
/// # Example
///
/// ```ignore
/// MONGO_URI=mongodb://localhost:27017/silver_spoon PORT=8080 cargo run -p spoon-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongo_uri: String,
    /// Database name override
    pub mongo_db: Option<String>,
    /// HTTP listen port
    pub http_port: u16,
    /// Compiled front-end bundle served for every non-API path
    pub frontend_dir: PathBuf,
    /// Origins allowed to call the API cross-site; empty disables CORS
    pub cors_origins: Vec<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mongo_uri = var("MONGO_URI")
            .ok_or_else(|| ServerError::Config("MONGO_URI must be set".into()))?;

        let http_port = match var("PORT") {
            Some(port) => port
                .parse()
                .map_err(|e| ServerError::Config(format!("Invalid PORT value {port:?}: {e}")))?,
            None => DEFAULT_HTTP_PORT,
        };

        let cors_origins = var("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(|o| o.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            mongo_uri,
            mongo_db: var("MONGO_DB"),
            http_port,
            frontend_dir: var("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR)),
            cors_origins,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_uri: "mongodb://localhost:27017".into(),
            mongo_db: None,
            http_port: DEFAULT_HTTP_PORT,
            frontend_dir: PathBuf::from(DEFAULT_FRONTEND_DIR),
            cors_origins: Vec::new(),
            environment: "development".into(),
        }
    }
}
