//! In-memory store
//!
//! Keeps insertion order and hands out ObjectId-shaped hex ids, so handlers
//! see the same shapes as with MongoDB. [`MemoryStore::set_offline`] makes
//! every call fail, for exercising the 500 paths.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use parking_lot::Mutex;
use shared::models::{MenuItem, MenuItemCreate, Reservation, ReservationCreate};

use super::repository::{MenuRepository, RepoError, RepoResult, ReservationRepository, Store};

#[derive(Debug, Default)]
pub struct MemoryStore {
    menu: Mutex<Vec<MenuItem>>,
    reservations: Mutex<Vec<Reservation>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> RepoResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(RepoError::Unavailable("memory store is offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MenuRepository for MemoryStore {
    async fn count_menu_items(&self) -> RepoResult<u64> {
        self.check_online()?;
        Ok(self.menu.lock().len() as u64)
    }

    async fn list_menu_items(&self) -> RepoResult<Vec<MenuItem>> {
        self.check_online()?;
        Ok(self.menu.lock().clone())
    }

    async fn insert_menu_items(&self, items: Vec<MenuItemCreate>) -> RepoResult<usize> {
        self.check_online()?;
        let count = items.len();
        let mut menu = self.menu.lock();
        menu.extend(
            items
                .into_iter()
                .map(|item| item.into_item(ObjectId::new().to_hex())),
        );
        Ok(count)
    }
}

#[async_trait]
impl ReservationRepository for MemoryStore {
    async fn list_reservations(&self) -> RepoResult<Vec<Reservation>> {
        self.check_online()?;
        Ok(self.reservations.lock().clone())
    }

    async fn create_reservation(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        self.check_online()?;
        let reservation = data.into_reservation(ObjectId::new().to_hex());
        self.reservations.lock().push(reservation.clone());
        Ok(reservation)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        self.check_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(name: &str) -> ReservationCreate {
        ReservationCreate {
            name: name.into(),
            email: None,
            phone: None,
            date: "2024-12-25".into(),
            time: "19:00".into(),
            guests: 2,
            message: None,
        }
    }

    #[tokio::test]
    async fn test_reservations_keep_insertion_order_and_unique_ids() {
        let store = MemoryStore::new();
        let first = store.create_reservation(booking("Ada")).await.unwrap();
        let second = store.create_reservation(booking("Chidi")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.id.len(), 24);

        let all = store.list_reservations().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_offline_store_fails_every_call() {
        let store = MemoryStore::new();
        store.set_offline(true);

        assert!(store.ping().await.is_err());
        assert!(store.count_menu_items().await.is_err());
        assert!(store.list_reservations().await.is_err());
        assert!(store.create_reservation(booking("Ada")).await.is_err());

        store.set_offline(false);
        assert!(store.ping().await.is_ok());
        assert!(store.list_reservations().await.unwrap().is_empty());
    }
}
