use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Review {
    pub id: String,
    pub hotel_id: String,
    pub user_id: String,
    pub content: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct ReviewWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub review: Review,
    pub author_name: String,
}

impl Review {
    pub fn new(hotel_id: String, user_id: String, content: String, rating: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            hotel_id,
            user_id,
            content,
            rating,
            created_at: Utc::now(),
        }
    }
}
