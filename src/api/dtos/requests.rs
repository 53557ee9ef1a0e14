use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateHotelRequest {
    #[validate(length(min = 1, message = "Hotel name is required"))]
    pub name: String,
    pub description: String,
    pub address: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(range(min = 1, max = 5, message = "Stars must be between 1 and 5"))]
    pub stars: i32,
    #[validate(range(min = 0.0, message = "Nightly price cannot be negative"))]
    pub price_per_night: f64,
}

#[derive(Deserialize)]
pub struct UpdateHotelRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub stars: Option<i32>,
    pub price_per_night: Option<f64>,
}

#[derive(Deserialize)]
pub struct SearchHotelsQuery {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
}

// Stay dates arrive as ISO `YYYY-MM-DD` strings and are parsed in the
// handler so malformed input surfaces as a 400 with a message.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub hotel_id: String,
    pub check_in: String,
    pub check_out: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[serde(rename = "hotelId")]
    pub hotel_id: String,
    #[validate(length(min = 10, message = "Review content must be at least 10 characters"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
}

#[derive(Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}
