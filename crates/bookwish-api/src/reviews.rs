use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use bookwish_core::ReviewStore;
use bookwish_types::Review;
use bookwish_types::api::{AddReviewRequest, Claims, ReviewQuery, ReviewResponse};

use crate::auth::{AppState, blocking};
use crate::error::ApiError;

fn to_response(review: Review) -> ReviewResponse {
    ReviewResponse {
        username: review.username,
        body: review.body,
        created_at: review.created_at,
    }
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let reviews = blocking(&state, move |db| {
        ReviewStore::new(db).list_reviews(&query.title, &query.author)
    })
    .await?;

    Ok(Json(reviews.into_iter().map(to_response).collect::<Vec<_>>()))
}

pub async fn add_review(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AddReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let review = blocking(&state, move |db| {
        ReviewStore::new(db).add_review(claims.sub, &req.title, &req.author, &req.body)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(to_response(review))))
}
