use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::api::dtos::requests::CreateBookingRequest;
use crate::api::dtos::responses::BookingResponse;
use crate::domain::models::booking::BookingStatus;
use crate::domain::ports::CreateBookingParams;
use crate::domain::services::{availability, stats};
use crate::error::AppError;
use std::sync::Arc;
use chrono::NaiveDate;
use tracing::info;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let check_in = parse_date(&payload.check_in)?;
    let check_out = parse_date(&payload.check_out)?;

    if check_out <= check_in {
        return Err(AppError::Validation("Check-out must be after check-in".into()));
    }

    let created = state.booking_repo.create_checked(CreateBookingParams {
        hotel_id: payload.hotel_id,
        user_id: user.id,
        check_in,
        check_out,
    }).await?;

    info!("Booking created: {} for hotel {}", created.id, created.hotel_id);
    Ok(Json(created))
}

pub async fn occupied_dates(
    State(state): State<Arc<AppState>>,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.hotel_repo.find_by_id(&hotel_id).await?
        .ok_or(AppError::NotFound("Hotel not found".into()))?;

    let bookings = state.booking_repo.list_active_by_hotel(&hotel_id).await?;
    Ok(Json(availability::occupied_ranges(&bookings)))
}

pub async fn my_bookings(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.booking_repo.list_by_user(&user.id).await?;
    let bookings: Vec<BookingResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    // Foreign bookings are indistinguishable from missing ones.
    if booking.user_id != user.id && !user.is_admin() {
        return Err(AppError::NotFound("Booking not found".into()));
    }

    Ok(Json(booking))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.user_id != user.id {
        return Err(AppError::NotFound("Booking not found".into()));
    }

    if booking.state() == BookingStatus::Cancelled {
        return Ok(Json(booking));
    }

    let cancelled = state.booking_repo.cancel(&booking.id).await?;
    info!("Booking cancelled: {}", cancelled.id);

    Ok(Json(cancelled))
}

pub async fn all_bookings(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.booking_repo.list_all().await?;
    let bookings: Vec<BookingResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(bookings))
}

pub async fn admin_stats(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.booking_repo.list_all().await?;
    let bookings: Vec<_> = rows.into_iter().map(|r| r.booking).collect();
    Ok(Json(stats::aggregate(&bookings)))
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))
}
