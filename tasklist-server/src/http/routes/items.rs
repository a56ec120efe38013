//! Item endpoints
//!
//! Every handler re-reads the whole collection; mutating handlers write it
//! back in full exactly once.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use chrono::Utc;
use tracing::instrument;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{ClearCompletedResponse, CreateItemRequest, Item, UpdateItemRequest};
use crate::store::new_id;

/// GET /items - full collection in stored order
#[instrument(skip(state))]
async fn list_items(State(state): State<Arc<AppState>>) -> Json<Vec<Item>> {
    Json(state.store.load_all().await)
}

/// POST /items - create an item at the front of the list
#[instrument(skip(state, req))]
async fn create_item(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let text = req.text()?;

    let _permit = state.queue.acquire().await;
    let mut items = state.store.load_all().await;

    let item = Item::new(new_id(), text, Utc::now());
    items.insert(0, item.clone());
    state.store.save_all(&items).await?;

    tracing::info!(id = %item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /items/{id} - apply text and/or completed
#[instrument(skip(state, req), fields(id = %id))]
async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let _permit = state.queue.acquire().await;
    let mut items = state.store.load_all().await;

    // Unknown id wins over an invalid body
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| ApiError::NotFound { id: id.clone() })?;
    let patch = req.into_patch()?;
    patch.apply(item);
    let updated = item.clone();

    state.store.save_all(&items).await?;

    tracing::info!(id = %updated.id, completed = updated.completed, "item updated");
    Ok(Json(updated))
}

/// DELETE /items/{id} - remove one item
#[instrument(skip(state), fields(id = %id))]
async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let _permit = state.queue.acquire().await;
    let mut items = state.store.load_all().await;

    let index = items
        .iter()
        .position(|item| item.id == id)
        .ok_or_else(|| ApiError::NotFound { id: id.clone() })?;
    items.remove(index);

    state.store.save_all(&items).await?;

    tracing::info!(id = %id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /items - clear every completed item
#[instrument(skip(state))]
async fn clear_completed(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClearCompletedResponse>, ApiError> {
    let _permit = state.queue.acquire().await;
    let mut items = state.store.load_all().await;

    let before = items.len();
    items.retain(|item| !item.completed);
    let removed = before - items.len();

    state.store.save_all(&items).await?;

    tracing::info!(removed, "completed items cleared");
    Ok(Json(ClearCompletedResponse { removed }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/items",
            get(list_items).post(create_item).delete(clear_completed),
        )
        .route("/items/{id}", patch(update_item).delete(delete_item))
}
