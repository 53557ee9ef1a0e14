use crate::domain::models::{
    booking::{Booking, BookingWithHotel},
    contact::ContactMessage,
    hotel::Hotel,
    review::{Review, ReviewWithAuthor},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn create(&self, hotel: &Hotel) -> Result<Hotel, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError>;
    async fn list(&self) -> Result<Vec<Hotel>, AppError>;
    async fn search(&self, city: &str, name: &str) -> Result<Vec<Hotel>, AppError>;
    async fn update(&self, hotel: &Hotel) -> Result<Hotel, AppError>;
    /// Fails with Conflict while non-cancelled bookings still reference the hotel.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

pub struct CreateBookingParams {
    pub hotel_id: String,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Availability check and insert run in one transaction, serialized per
    /// hotel, so two concurrent requests cannot both pass the overlap check.
    async fn create_checked(&self, params: CreateBookingParams) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<BookingWithHotel>, AppError>;
    async fn list_all(&self) -> Result<Vec<BookingWithHotel>, AppError>;
    /// Non-cancelled bookings for a hotel, ordered by check-in.
    async fn list_active_by_hotel(&self, hotel_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn cancel(&self, id: &str) -> Result<Booking, AppError>;
    /// Status-guarded `pending` -> `paid` transition; a lost race is a Conflict.
    async fn mark_paid(&self, id: &str) -> Result<Booking, AppError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, AppError>;
    async fn list_by_hotel(&self, hotel_id: &str) -> Result<Vec<ReviewWithAuthor>, AppError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, message: &ContactMessage) -> Result<ContactMessage, AppError>;
    async fn list(&self) -> Result<Vec<ContactMessage>, AppError>;
    async fn mark_read(&self, id: &str) -> Result<ContactMessage, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}
