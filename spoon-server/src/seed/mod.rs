//! Boot-time menu seeding
//!
//! Writes the launch catalog when the menu collection is empty. Seeding
//! failures are logged and never stop the server.

pub mod catalog;

pub use catalog::menu_catalog;

use shared::models::MenuItemCreate;

use crate::db::MenuRepository;

/// What [`seed_menu`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Collection was empty; this many items were written
    Seeded(usize),
    /// Collection already held this many documents; nothing written
    AlreadySeeded(u64),
    /// Count or insert failed
    Failed,
}

/// Seed the launch catalog into an empty menu
pub async fn seed_menu<R: MenuRepository + ?Sized>(repo: &R) -> SeedOutcome {
    seed_menu_with(repo, menu_catalog()).await
}

/// Seed `items` into an empty menu
///
/// Count-then-insert is not atomic; two servers booting against the same
/// empty database can both seed.
pub async fn seed_menu_with<R: MenuRepository + ?Sized>(
    repo: &R,
    items: Vec<MenuItemCreate>,
) -> SeedOutcome {
    let count = match repo.count_menu_items().await {
        Ok(count) => count,
        Err(e) => {
            tracing::error!(error = %e, "Failed to count menu items, skipping seed");
            return SeedOutcome::Failed;
        }
    };

    if count > 0 {
        tracing::info!(count, "Menu already seeded");
        return SeedOutcome::AlreadySeeded(count);
    }

    tracing::info!(items = items.len(), "Seeding menu items...");
    match repo.insert_menu_items(items).await {
        Ok(inserted) => {
            tracing::info!(inserted, "Menu seeded successfully");
            SeedOutcome::Seeded(inserted)
        }
        Err(e) => {
            tracing::error!(error = %e, "Menu seed failed");
            SeedOutcome::Failed
        }
    }
}
