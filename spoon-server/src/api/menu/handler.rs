//! Menu API Handlers

use axum::{Json, extract::State};
use shared::models::MenuItem;

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/menu - every dish, in store order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.store.list_menu_items().await?;
    Ok(Json(items))
}
