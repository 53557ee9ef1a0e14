use crate::domain::models::{booking::{Booking, BookingWithHotel, NewBookingParams}, hotel::Hotel};
use crate::domain::ports::{BookingRepository, CreateBookingParams};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create_checked(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Row lock on the hotel serializes concurrent creations per hotel,
        // so the overlap count below cannot race another insert.
        let hotel = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1 FOR UPDATE")
            .bind(&params.hotel_id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Hotel not found".into()))?;

        let overlapping = sqlx::query(
            "SELECT COUNT(*) as count FROM bookings WHERE hotel_id = $1 AND check_in < $2 AND check_out > $3 AND status != 'cancelled'"
        )
            .bind(&params.hotel_id).bind(params.check_out).bind(params.check_in)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?
            .get::<i64, _>("count");

        if overlapping > 0 {
            return Err(AppError::Conflict("The selected dates are no longer available".into()));
        }

        let booking = Booking::new(NewBookingParams {
            hotel_id: params.hotel_id,
            user_id: params.user_id,
            check_in: params.check_in,
            check_out: params.check_out,
            nightly_rate: hotel.price_per_night,
        });

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, hotel_id, user_id, check_in, check_out, status, total_price, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.hotel_id).bind(&booking.user_id)
            .bind(booking.check_in).bind(booking.check_out).bind(&booking.status)
            .bind(booking.total_price).bind(booking.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<BookingWithHotel>, AppError> {
        sqlx::query_as::<_, BookingWithHotel>(
            "SELECT b.*, h.name AS hotel_name, h.city AS hotel_city
             FROM bookings b JOIN hotels h ON h.id = b.hotel_id
             WHERE b.user_id = $1 ORDER BY b.created_at DESC"
        )
            .bind(user_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<BookingWithHotel>, AppError> {
        sqlx::query_as::<_, BookingWithHotel>(
            "SELECT b.*, h.name AS hotel_name, h.city AS hotel_city
             FROM bookings b JOIN hotels h ON h.id = b.hotel_id
             ORDER BY b.created_at DESC"
        )
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_active_by_hotel(&self, hotel_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE hotel_id = $1 AND status != 'cancelled' ORDER BY check_in ASC"
        )
            .bind(hotel_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn cancel(&self, id: &str) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = 'cancelled' WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Booking not found".into()))
    }

    async fn mark_paid(&self, id: &str) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = 'paid' WHERE id = $1 AND status = 'pending' RETURNING *"
        )
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::Conflict("Booking is not pending payment".into()))
    }
}
