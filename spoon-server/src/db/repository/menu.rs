//! Menu Repository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use shared::models::{MenuItem, MenuItemCreate};

use super::RepoResult;
use crate::db::MongoStore;
use crate::db::models::MenuDocument;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn count_menu_items(&self) -> RepoResult<u64>;

    /// All items in store-native order
    async fn list_menu_items(&self) -> RepoResult<Vec<MenuItem>>;

    /// Bulk insert; returns the number of items written
    async fn insert_menu_items(&self, items: Vec<MenuItemCreate>) -> RepoResult<usize>;
}

#[async_trait]
impl MenuRepository for MongoStore {
    async fn count_menu_items(&self) -> RepoResult<u64> {
        Ok(self.menu().await?.count_documents(doc! {}).await?)
    }

    async fn list_menu_items(&self) -> RepoResult<Vec<MenuItem>> {
        let cursor = self.menu().await?.find(doc! {}).await?;
        let docs: Vec<MenuDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(MenuItem::from).collect())
    }

    async fn insert_menu_items(&self, items: Vec<MenuItemCreate>) -> RepoResult<usize> {
        if items.is_empty() {
            return Ok(0);
        }
        let docs: Vec<MenuDocument> = items.into_iter().map(MenuDocument::from).collect();
        let result = self.menu().await?.insert_many(docs).await?;
        Ok(result.inserted_ids.len())
    }
}
