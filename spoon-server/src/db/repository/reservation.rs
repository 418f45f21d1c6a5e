//! Reservation Repository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use shared::models::{Reservation, ReservationCreate};

use super::{RepoError, RepoResult};
use crate::db::MongoStore;
use crate::db::models::ReservationDocument;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// All reservations in store-native order
    async fn list_reservations(&self) -> RepoResult<Vec<Reservation>>;

    /// Insert and return the stored reservation with its new id
    async fn create_reservation(&self, data: ReservationCreate) -> RepoResult<Reservation>;
}

#[async_trait]
impl ReservationRepository for MongoStore {
    async fn list_reservations(&self) -> RepoResult<Vec<Reservation>> {
        let cursor = self.reservations().await?.find(doc! {}).await?;
        let docs: Vec<ReservationDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Reservation::from).collect())
    }

    async fn create_reservation(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        let result = self
            .reservations()
            .await?
            .insert_one(ReservationDocument::from(data.clone()))
            .await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepoError::Database("Inserted reservation has no ObjectId".into()))?;
        Ok(data.into_reservation(id.to_hex()))
    }
}
