use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use bookwish_types::api::SearchQuery;

use crate::auth::AppState;

/// Catalog search. Never fails: lookup problems yield an empty list.
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    Json(state.lookup.search(&query.q, query.by).await)
}
