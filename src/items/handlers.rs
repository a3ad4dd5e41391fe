//! REST API handlers for shopping-list operations
//!
//! This module implements the HTTP endpoints for listing, adding,
//! deleting, totalling, and filtering items.

use super::{helpers::*, models::Item, state::SharedState};
use crate::error::{ApiError, ApiResult};
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, warn};

/// Creates routes for item-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/items", get(list_items))
        .route("/add", post(add_item))
        .route("/delete/:name", post(delete_item))
        .route("/delete", post(delete_all_items))
        .route("/get", get(total_price))
        .route("/get/:supermarket", get(items_from_supermarket))
}

/// Endpoint: GET /items
/// Returns every item on the list; an empty list is seeded with the demo
/// items first.
async fn list_items(State(state): State<SharedState>) -> Json<Vec<Item>> {
    Json(state.list())
}

/// Endpoint: POST /add
/// Appends the posted item to the list. A body that does not decode into
/// the item shape is answered with 400 instead of tearing the worker down.
async fn add_item(
    State(state): State<SharedState>,
    body: Result<Json<Item>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(item) = body.map_err(|rejection| {
        warn!("rejected item payload: {}", rejection.body_text());
        ApiError::bad_request(rejection.body_text())
    })?;

    debug!(name = %item.name, "adding item");
    state.add(item);
    Ok(empty_json_ok())
}

/// Endpoint: POST /delete/:name
/// Removes the first item matching `name` exactly. Unknown names are a
/// silent no-op.
async fn delete_item(State(state): State<SharedState>, Path(name): Path<String>) -> Response {
    let removed = state.remove_first_named(&name);
    debug!(%name, removed, "delete by name");
    empty_json_ok()
}

/// Endpoint: POST /delete
/// Clears the whole list.
async fn delete_all_items(State(state): State<SharedState>) -> Response {
    state.clear();
    empty_json_ok()
}

/// Endpoint: GET /get
/// Returns the sum of all item prices as a bare JSON number.
async fn total_price(State(state): State<SharedState>) -> Json<f64> {
    Json(state.total_price())
}

/// Endpoint: GET /get/:supermarket
/// Returns the items bought at the given supermarket, matched
/// case- and whitespace-insensitively.
async fn items_from_supermarket(
    State(state): State<SharedState>,
    Path(supermarket): Path<String>,
) -> Json<Vec<Item>> {
    Json(state.items_from_supermarket(&supermarket))
}
