use std::sync::Arc;
use crate::domain::ports::{
    BookingRepository, ContactRepository, HotelRepository, ReviewRepository, UserRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub hotel_repo: Arc<dyn HotelRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub user_repo: Arc<dyn UserRepository>,
}
