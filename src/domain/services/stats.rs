use serde::Serialize;
use crate::domain::models::booking::{Booking, BookingStatus};

#[derive(Debug, Serialize, PartialEq)]
pub struct RevenueStats {
    pub total_collected: f64,
    pub total_potential: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CountStats {
    pub total_reservations: i64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct BookingStats {
    pub revenue: RevenueStats,
    pub counts: CountStats,
}

/// Folds the booking set into the dashboard figures. Recomputed on demand;
/// cancelled bookings count toward neither revenue nor reservations.
pub fn aggregate(bookings: &[Booking]) -> BookingStats {
    let mut total_collected = 0.0;
    let mut total_potential = 0.0;
    let mut total_reservations = 0;

    for booking in bookings {
        match booking.state() {
            BookingStatus::Paid => {
                total_collected += booking.total_price;
                total_potential += booking.total_price;
                total_reservations += 1;
            }
            BookingStatus::Pending => {
                total_potential += booking.total_price;
                total_reservations += 1;
            }
            BookingStatus::Cancelled => {}
        }
    }

    BookingStats {
        revenue: RevenueStats { total_collected, total_potential },
        counts: CountStats { total_reservations },
    }
}
