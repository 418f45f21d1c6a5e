//! Shared request state

use std::sync::Arc;

use super::{Config, Result};
use crate::db::{MongoStore, Store};
use crate::seed::{self, SeedOutcome};

/// State cloned into every handler
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Arc<dyn Store>,
}

impl ServerState {
    pub fn new(config: Config, store: Arc<dyn Store>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Connect to MongoDB and seed the menu
    ///
    /// A malformed `MONGO_URI` is fatal. An unreachable or unresolvable
    /// database is not: the failure is logged, seeding is skipped and the
    /// server still starts, answering 500 on store-backed routes until the
    /// database comes back.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store = MongoStore::connect(config)?;

        match store.ping().await {
            Ok(()) => {
                tracing::info!(database = store.database_name(), "Connected to MongoDB");
                if let SeedOutcome::Failed = seed::seed_menu(&store).await {
                    tracing::warn!("Starting with an unseeded menu");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "MongoDB connection failed, skipping menu seed");
            }
        }

        Ok(Self::new(config.clone(), Arc::new(store)))
    }
}
