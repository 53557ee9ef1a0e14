use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Payment rejected: {0}")]
    PaymentRejected(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                if let Some(db_err) = e.as_database_error() {
                    let code = db_err.code().unwrap_or_default();

                    // 2067 = SQLite Unique Constraint
                    // 23505 = PostgreSQL Unique Violation
                    if code == "2067" || code == "23505" {
                        return (
                            StatusCode::CONFLICT,
                            Json(json!({ "message": "Resource already exists (duplicate entry)" }))
                        ).into_response();
                    }
                }

                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidState(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::PaymentRejected(msg) => (StatusCode::PAYMENT_REQUIRED, msg.clone()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}
