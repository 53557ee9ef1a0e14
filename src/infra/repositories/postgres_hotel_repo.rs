use crate::domain::{models::hotel::Hotel, ports::HotelRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

pub struct PostgresHotelRepo {
    pool: PgPool,
}

impl PostgresHotelRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelRepository for PostgresHotelRepo {
    async fn create(&self, hotel: &Hotel) -> Result<Hotel, AppError> {
        sqlx::query_as::<_, Hotel>(
            "INSERT INTO hotels (id, name, description, address, city, stars, price_per_night, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *"
        )
            .bind(&hotel.id).bind(&hotel.name).bind(&hotel.description).bind(&hotel.address)
            .bind(&hotel.city).bind(hotel.stars).bind(hotel.price_per_night).bind(hotel.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Hotel>, AppError> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels ORDER BY name ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn search(&self, city: &str, name: &str) -> Result<Vec<Hotel>, AppError> {
        sqlx::query_as::<_, Hotel>(
            "SELECT * FROM hotels WHERE city ILIKE '%' || $1 || '%' AND name ILIKE '%' || $2 || '%' ORDER BY name ASC"
        )
            .bind(city).bind(name)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, hotel: &Hotel) -> Result<Hotel, AppError> {
        sqlx::query_as::<_, Hotel>(
            "UPDATE hotels SET name=$1, description=$2, address=$3, city=$4, stars=$5, price_per_night=$6
             WHERE id=$7
             RETURNING *"
        )
            .bind(&hotel.name).bind(&hotel.description).bind(&hotel.address).bind(&hotel.city)
            .bind(hotel.stars).bind(hotel.price_per_night).bind(&hotel.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let active = sqlx::query(
            "SELECT COUNT(*) as count FROM bookings WHERE hotel_id = $1 AND status != 'cancelled'"
        )
            .bind(id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?
            .get::<i64, _>("count");

        if active > 0 {
            return Err(AppError::Conflict("Hotel still has active bookings".into()));
        }

        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id).execute(&mut *tx).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Hotel not found".into()));
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }
}
