//! MongoDB-backed store

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ConnectionString};
use mongodb::{Client, Collection, Database};
use tokio::sync::OnceCell;

use super::models::{MenuDocument, ReservationDocument};
use super::repository::{RepoError, RepoResult, Store};
use super::{DEFAULT_DATABASE, MENU_COLLECTION, RESERVATION_COLLECTION};
use crate::core::Config;

#[derive(Debug)]
pub struct MongoStore {
    uri: String,
    db_name: String,
    db: OnceCell<Database>,
}

impl MongoStore {
    /// Validate the configured URI and prepare a lazily built client
    ///
    /// Only the URI syntax is checked here. `mongodb+srv://` resolution and
    /// the client itself are built on first use, so an unreachable or
    /// unresolvable cluster surfaces as [`RepoError::Unavailable`] from
    /// [`Store::ping`] or a query, and is retried on the next call.
    /// Database name: `MONGO_DB`, else the one in the URI, else `test`.
    pub fn connect(config: &Config) -> RepoResult<Self> {
        let parsed = ConnectionString::parse(&config.mongo_uri)
            .map_err(|e| RepoError::InvalidUri(e.to_string()))?;

        let db_name = config
            .mongo_db
            .clone()
            .or(parsed.default_database)
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(Self {
            uri: config.mongo_uri.clone(),
            db_name,
            db: OnceCell::new(),
        })
    }

    pub fn database_name(&self) -> &str {
        &self.db_name
    }

    async fn database(&self) -> RepoResult<&Database> {
        self.db
            .get_or_try_init(|| async {
                let mut options = ClientOptions::parse(self.uri.as_str())
                    .await
                    .map_err(|e| RepoError::Unavailable(e.to_string()))?;
                options.app_name = Some("spoon-server".to_string());

                let client = Client::with_options(options)
                    .map_err(|e| RepoError::Unavailable(e.to_string()))?;
                tracing::debug!(database = %self.db_name, "MongoDB client created");
                Ok(client.database(&self.db_name))
            })
            .await
    }

    pub(crate) async fn menu(&self) -> RepoResult<Collection<MenuDocument>> {
        Ok(self.database().await?.collection(MENU_COLLECTION))
    }

    pub(crate) async fn reservations(&self) -> RepoResult<Collection<ReservationDocument>> {
        Ok(self.database().await?.collection(RESERVATION_COLLECTION))
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn ping(&self) -> RepoResult<()> {
        self.database()
            .await?
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
