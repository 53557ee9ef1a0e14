use crate::domain::{models::review::{Review, ReviewWithAuthor}, ports::ReviewRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresReviewRepo {
    pool: PgPool,
}

impl PostgresReviewRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, hotel_id, user_id, content, rating, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *"
        )
            .bind(&review.id).bind(&review.hotel_id).bind(&review.user_id)
            .bind(&review.content).bind(review.rating).bind(review.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_hotel(&self, hotel_id: &str) -> Result<Vec<ReviewWithAuthor>, AppError> {
        sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.*, u.first_name AS author_name
             FROM reviews r JOIN users u ON u.id = r.user_id
             WHERE r.hotel_id = $1 ORDER BY r.created_at DESC"
        )
            .bind(hotel_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
