use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::domain::models::auth::{AuthResponse, Claims, UserProfile};
use crate::domain::models::user::{User, ROLE_USER};
use crate::error::AppError;
use std::sync::Arc;
use argon2::{PasswordHash, Argon2, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use tracing::info;
use validator::Validate;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("Email is already registered".into()));
    }

    let password_hash = User::hash_password(&payload.password)?;
    let user = User::new(payload.first_name, payload.email, password_hash, ROLE_USER);
    let created = state.user_repo.create(&user).await?;

    info!("User registered: {}", created.id);

    Ok(Json(UserProfile {
        id: created.id,
        first_name: created.first_name,
        email: created.email,
        role: created.role,
    }))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_email(&payload.email).await?
        .ok_or(AppError::Unauthorized)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal)?;

    Argon2::default().verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    let access_token = issue_token(&user, &state.config.jwt_secret)?;

    info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        access_token,
        user: UserProfile {
            id: user.id,
            first_name: user.first_name,
            email: user.email,
            role: user.role,
        },
    }))
}

fn issue_token(user: &User, secret: &str) -> Result<String, AppError> {
    let now = Utc::now();

    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp: (now + Duration::hours(24)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| {
            tracing::error!("JWT encoding failed: {}", e);
            AppError::Internal
        })
}
