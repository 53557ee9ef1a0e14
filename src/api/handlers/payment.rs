use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::responses::PaymentResponse;
use crate::domain::models::booking::BookingStatus;
use crate::domain::services::payment::{self, CardDetails};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

pub async fn process_payment(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(booking_id): Path<String>,
    Json(card): Json<CardDetails>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.user_id != user.id {
        return Err(AppError::NotFound("Booking not found".into()));
    }

    match booking.state() {
        BookingStatus::Cancelled => {
            return Err(AppError::InvalidState("A cancelled booking cannot be paid".into()));
        }
        BookingStatus::Paid => {
            return Err(AppError::Conflict("Booking has already been paid".into()));
        }
        BookingStatus::Pending => {}
    }

    payment::validate_card(&card, Utc::now().date_naive())?;
    payment::authorize(&card)?;

    // Guarded transition; a concurrent payment loses here with a conflict.
    let paid = state.booking_repo.mark_paid(&booking.id).await?;
    info!("Payment authorized for booking {}", paid.id);

    Ok(Json(PaymentResponse { success: true, booking: paid }))
}
