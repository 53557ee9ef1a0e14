use crate::domain::{models::contact::ContactMessage, ports::ContactRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteContactRepo {
    pool: SqlitePool,
}

impl SqliteContactRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepo {
    async fn create(&self, message: &ContactMessage) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contacts (id, name, email, subject, message, is_read, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
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
        // One-way and idempotent: re-marking a read message changes nothing.
        sqlx::query_as::<_, ContactMessage>("UPDATE contacts SET is_read = 1 WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Message not found".into()))
    }
}
