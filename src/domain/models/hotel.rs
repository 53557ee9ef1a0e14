use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub stars: i32,
    pub price_per_night: f64,
    pub created_at: DateTime<Utc>,
}

pub struct NewHotelParams {
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub stars: i32,
    pub price_per_night: f64,
}

impl Hotel {
    pub fn new(params: NewHotelParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            description: params.description,
            address: params.address,
            city: params.city,
            stars: params.stars,
            price_per_night: params.price_per_night,
            created_at: Utc::now(),
        }
    }
}
