use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::CreateReviewRequest;
use crate::domain::models::review::Review;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn create_review(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    state.hotel_repo.find_by_id(&payload.hotel_id).await?
        .ok_or(AppError::NotFound("Hotel not found".into()))?;

    let review = Review::new(payload.hotel_id, user.id, payload.content, payload.rating);
    let created = state.review_repo.create(&review).await?;

    info!("Review published: {} for hotel {}", created.id, created.hotel_id);
    Ok(Json(created))
}

pub async fn hotel_reviews(
    State(state): State<Arc<AppState>>,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.hotel_repo.find_by_id(&hotel_id).await?
        .ok_or(AppError::NotFound("Hotel not found".into()))?;

    let reviews = state.review_repo.list_by_hotel(&hotel_id).await?;
    Ok(Json(reviews))
}
