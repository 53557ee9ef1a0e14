use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminUser;
use crate::api::dtos::requests::CreateContactRequest;
use crate::domain::models::contact::ContactMessage;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn submit_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    let message = ContactMessage::new(payload.name, payload.email, payload.subject, payload.message);
    let created = state.contact_repo.create(&message).await?;

    info!("Contact message received: {}", created.id);
    Ok(Json(created))
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let messages = state.contact_repo.list().await?;
    Ok(Json(messages))
}

pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(message_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let message = state.contact_repo.mark_read(&message_id).await?;
    Ok(Json(message))
}
