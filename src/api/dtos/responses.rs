use serde::Serialize;
use crate::domain::models::booking::{Booking, BookingWithHotel};

#[derive(Serialize)]
pub struct HotelSummary {
    pub id: String,
    pub name: String,
    pub city: String,
}

#[derive(Serialize)]
pub struct BookingResponse {
    #[serde(flatten)]
    pub booking: Booking,
    pub hotel: HotelSummary,
}

impl From<BookingWithHotel> for BookingResponse {
    fn from(row: BookingWithHotel) -> Self {
        Self {
            hotel: HotelSummary {
                id: row.booking.hotel_id.clone(),
                name: row.hotel_name,
                city: row.hotel_city,
            },
            booking: row.booking,
        }
    }
}

#[derive(Serialize)]
pub struct PaymentResponse {
    pub success: bool,
    pub booking: Booking,
}
