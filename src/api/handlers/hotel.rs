use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminUser;
use crate::api::dtos::requests::{CreateHotelRequest, SearchHotelsQuery, UpdateHotelRequest};
use crate::domain::models::hotel::{Hotel, NewHotelParams};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn list_hotels(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = state.hotel_repo.list().await?;
    Ok(Json(hotels))
}

pub async fn search_hotels(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchHotelsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = state.hotel_repo.search(&query.city, &query.name).await?;
    Ok(Json(hotels))
}

pub async fn get_hotel(
    State(state): State<Arc<AppState>>,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = state.hotel_repo.find_by_id(&hotel_id).await?
        .ok_or(AppError::NotFound("Hotel not found".into()))?;
    Ok(Json(hotel))
}

pub async fn create_hotel(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateHotelRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    let hotel = Hotel::new(NewHotelParams {
        name: payload.name,
        description: payload.description,
        address: payload.address,
        city: payload.city,
        stars: payload.stars,
        price_per_night: payload.price_per_night,
    });

    let created = state.hotel_repo.create(&hotel).await?;
    info!("Hotel created: {} ({})", created.id, created.name);

    Ok(Json(created))
}

pub async fn update_hotel(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(hotel_id): Path<String>,
    Json(payload): Json<UpdateHotelRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut hotel = state.hotel_repo.find_by_id(&hotel_id).await?
        .ok_or(AppError::NotFound("Hotel not found".into()))?;

    if let Some(name) = payload.name { hotel.name = name; }
    if let Some(description) = payload.description { hotel.description = description; }
    if let Some(address) = payload.address { hotel.address = address; }
    if let Some(city) = payload.city { hotel.city = city; }
    if let Some(stars) = payload.stars { hotel.stars = stars; }
    if let Some(price) = payload.price_per_night { hotel.price_per_night = price; }

    if !(1..=5).contains(&hotel.stars) {
        return Err(AppError::Validation("Stars must be between 1 and 5".into()));
    }
    if hotel.price_per_night < 0.0 {
        return Err(AppError::Validation("Nightly price cannot be negative".into()));
    }

    let updated = state.hotel_repo.update(&hotel).await?;
    info!("Hotel updated: {}", updated.id);

    Ok(Json(updated))
}

pub async fn delete_hotel(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.hotel_repo.delete(&hotel_id).await?;
    info!("Hotel deleted: {}", hotel_id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
