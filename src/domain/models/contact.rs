use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            subject,
            message,
            is_read: false,
            created_at: Utc::now(),
        }
    }
}
