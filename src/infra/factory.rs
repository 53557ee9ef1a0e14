use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::models::user::{User, ROLE_ADMIN};
use crate::domain::ports::UserRepository;
use crate::state::AppState;
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_contact_repo::PostgresContactRepo,
    postgres_hotel_repo::PostgresHotelRepo, postgres_review_repo::PostgresReviewRepo,
    postgres_user_repo::PostgresUserRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_contact_repo::SqliteContactRepo,
    sqlite_hotel_repo::SqliteHotelRepo, sqlite_review_repo::SqliteReviewRepo,
    sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let state = if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            hotel_repo: Arc::new(PostgresHotelRepo::new(pool.clone())),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            review_repo: Arc::new(PostgresReviewRepo::new(pool.clone())),
            contact_repo: Arc::new(PostgresContactRepo::new(pool.clone())),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            hotel_repo: Arc::new(SqliteHotelRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            review_repo: Arc::new(SqliteReviewRepo::new(pool.clone())),
            contact_repo: Arc::new(SqliteContactRepo::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        }
    };

    seed_admin(config, state.user_repo.as_ref()).await;

    state
}

/// Ensures the configured admin account exists. Registration only ever
/// creates regular users.
async fn seed_admin(config: &Config, user_repo: &dyn UserRepository) {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        return;
    };

    match user_repo.find_by_email(email).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            let hash = User::hash_password(password).expect("Failed to hash admin password");
            let admin = User::new("Admin".to_string(), email.clone(), hash, ROLE_ADMIN);
            user_repo.create(&admin).await.expect("Failed to seed admin user");
            info!("Seeded admin account: {}", email);
        }
        Err(e) => panic!("Failed to look up admin account: {e}"),
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
