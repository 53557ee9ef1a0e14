use crate::domain::{models::contact::ContactMessage, ports::ContactRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresContactRepo {
    pool: PgPool,
}

impl PostgresContactRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepo {
    async fn create(&self, message: &ContactMessage) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contacts (id, name, email, subject, message, is_read, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&message.id).bind(&message.name).bind(&message.email)
            .bind(&message.subject).bind(&message.message).bind(message.is_read)
            .bind(message.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, AppError> {
        sqlx::query_as::<_, ContactMessage>("SELECT * FROM contacts ORDER BY created_at DESC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn mark_read(&self, id: &str) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>("UPDATE contacts SET is_read = TRUE WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Message not found".into()))
    }
}
