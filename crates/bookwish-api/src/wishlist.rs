use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};

use bookwish_core::WishlistStore;
use bookwish_types::WishlistEntry;
use bookwish_types::api::{Claims, RemoveEntryResponse, WishlistEntryResponse, WishlistItemRequest};

use crate::auth::{AppState, blocking};
use crate::error::ApiError;

fn to_response(entry: WishlistEntry) -> WishlistEntryResponse {
    WishlistEntryResponse {
        id: entry.id,
        title: entry.title,
        author: entry.author,
        created_at: entry.created_at,
    }
}

pub async fn list_entries(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let entries = blocking(&state, move |db| WishlistStore::new(db).list_entries(claims.sub)).await?;
    Ok(Json(entries.into_iter().map(to_response).collect::<Vec<_>>()))
}

pub async fn add_entry(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<WishlistItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = blocking(&state, move |db| {
        WishlistStore::new(db).add_entry(claims.sub, &req.title, &req.author)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(to_response(entry))))
}

pub async fn remove_entry(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<WishlistItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = blocking(&state, move |db| {
        WishlistStore::new(db).remove_entry(claims.sub, &req.title, &req.author)
    })
    .await?;

    Ok(Json(RemoveEntryResponse { removed }))
}
