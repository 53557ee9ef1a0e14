#![allow(dead_code)]

use hotel_reservation_backend::{
    api::router::create_router,
    config::Config,
    domain::models::user::{User, ROLE_ADMIN},
    state::AppState,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_contact_repo::SqliteContactRepo,
        sqlite_hotel_repo::SqliteHotelRepo,
        sqlite_review_repo::SqliteReviewRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@hotels.local";
pub const ADMIN_PASSWORD: &str = "admin-secret";

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "test-secret-key".to_string(),
            admin_email: None,
            admin_password: None,
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            hotel_repo: Arc::new(SqliteHotelRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            review_repo: Arc::new(SqliteReviewRepo::new(pool.clone())),
            contact_repo: Arc::new(SqliteContactRepo::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Registers a regular user and returns their access token.
    pub async fn register_user(&self, first_name: &str, email: &str, password: &str) -> String {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({
                    "first_name": first_name,
                    "email": email,
                    "password": password
                }).to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Registration failed in test helper: status {}", response.status());
        }

        self.login(email, password).await
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "email": email, "password": password }).to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        body["access_token"].as_str().expect("No access_token in login body").to_string()
    }

    /// Inserts the admin account directly (registration only creates users)
    /// and returns its access token.
    pub async fn seed_admin(&self) -> String {
        let hash = User::hash_password(ADMIN_PASSWORD).unwrap();
        let admin = User::new("Admin".to_string(), ADMIN_EMAIL.to_string(), hash, ROLE_ADMIN);
        self.state.user_repo.create(&admin).await.expect("Failed to seed admin");

        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    pub async fn create_hotel(&self, admin_token: &str, name: &str, city: &str, price_per_night: f64) -> Value {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/hotels")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {admin_token}"))
                .body(Body::from(json!({
                    "name": name,
                    "description": "A quiet place near the plaza",
                    "address": "Jr. Asamblea 123",
                    "city": city,
                    "stars": 3,
                    "price_per_night": price_per_night
                }).to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Hotel creation failed in test helper: status {}", response.status());
        }

        parse_body(response).await
    }

    pub async fn create_booking(
        &self,
        token: &str,
        hotel_id: &str,
        check_in: &str,
        check_out: &str,
    ) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/bookings")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::from(json!({
                    "hotelId": hotel_id,
                    "checkIn": check_in,
                    "checkOut": check_out
                }).to_string()))
                .unwrap()
        ).await.unwrap()
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
