use axum::{
    extract::{FromRequestParts, FromRef},
    http::{header, request::Parts},
};
use crate::state::AppState;
use crate::domain::models::auth::Claims;
use crate::domain::models::user::ROLE_ADMIN;
use crate::error::AppError;
use std::sync::Arc;
use jsonwebtoken::{decode, DecodingKey, Validation};
use tracing::Span;

/// Identity carried by a valid `Authorization: Bearer <jwt>` header.
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts.headers.get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::Unauthorized)?;

        let token = header_value.strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let decoding_key = DecodingKey::from_secret(app_state.config.jwt_secret.as_bytes());

        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(|_| AppError::Unauthorized)?;

        Span::current().record("user_id", token_data.claims.sub.as_str());

        Ok(AuthUser {
            id: token_data.claims.sub,
            email: token_data.claims.email,
            role: token_data.claims.role,
        })
    }
}

/// AuthUser plus the admin role gate.
pub struct AdminUser(pub AuthUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Administrator access required".into()));
        }

        Ok(AdminUser(user))
    }
}
