use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Lifecycle state of a booking. `cancelled` is terminal; the only other
/// legal move is `pending` -> `paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Paid,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Paid => "paid",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "paid" => Some(BookingStatus::Paid),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Paid)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Paid, BookingStatus::Cancelled)
        )
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub hotel_id: String,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub hotel_id: String,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nightly_rate: f64,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let nights = (params.check_out - params.check_in).num_days();

        Self {
            id: Uuid::new_v4().to_string(),
            hotel_id: params.hotel_id,
            user_id: params.user_id,
            check_in: params.check_in,
            check_out: params.check_out,
            status: BookingStatus::Pending.as_str().to_string(),
            total_price: nights as f64 * params.nightly_rate,
            created_at: Utc::now(),
        }
    }

    pub fn state(&self) -> BookingStatus {
        BookingStatus::parse(&self.status).unwrap_or(BookingStatus::Pending)
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Booking row joined with the hotel columns the booking lists display.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct BookingWithHotel {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub booking: Booking,
    pub hotel_name: String,
    pub hotel_city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_total_price_is_nights_times_rate() {
        let booking = Booking::new(NewBookingParams {
            hotel_id: "h1".into(),
            user_id: "u1".into(),
            check_in: date("2025-07-01"),
            check_out: date("2025-07-05"),
            nightly_rate: 120.0,
        });

        assert_eq!(booking.nights(), 4);
        assert_eq!(booking.total_price, 480.0);
        assert_eq!(booking.state(), BookingStatus::Pending);
    }

    #[test]
    fn test_cancelled_is_terminal() {
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Paid));
        assert!(!BookingStatus::Paid.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn test_paid_only_from_pending() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Paid));
        assert!(!BookingStatus::Paid.can_transition_to(BookingStatus::Paid));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Paid));
    }

    #[test]
    fn test_status_round_trip() {
        for s in [BookingStatus::Pending, BookingStatus::Paid, BookingStatus::Cancelled] {
            assert_eq!(BookingStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(BookingStatus::parse("CONFIRMED"), None);
    }
}
