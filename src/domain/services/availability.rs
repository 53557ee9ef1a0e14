use chrono::NaiveDate;
use serde::Serialize;
use crate::domain::models::booking::{Booking, BookingStatus};

/// A [from, to) stay interval blocked by a non-cancelled booking.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct OccupiedRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Half-open interval overlap: [a1, a2) and [b1, b2) collide iff
/// a1 < b2 && b1 < a2. Adjacent ranges (checkout day == next check-in)
/// do not overlap; the checkout-morning handoff is allowed.
pub fn ranges_overlap(a1: NaiveDate, a2: NaiveDate, b1: NaiveDate, b2: NaiveDate) -> bool {
    a1 < b2 && b1 < a2
}

/// Projects the occupied ranges of a hotel out of its booking set,
/// ordered by check-in. Cancelled bookings release their dates.
pub fn occupied_ranges(bookings: &[Booking]) -> Vec<OccupiedRange> {
    let mut ranges: Vec<OccupiedRange> = bookings
        .iter()
        .filter(|b| b.state() != BookingStatus::Cancelled)
        .map(|b| OccupiedRange { from: b.check_in, to: b.check_out })
        .collect();

    ranges.sort_by_key(|r| (r.from, r.to));
    ranges
}

/// Client-side style pre-check: does the candidate stay collide with any
/// non-cancelled booking? The authoritative check runs inside the booking
/// repository's insert transaction.
pub fn conflicts_with(bookings: &[Booking], check_in: NaiveDate, check_out: NaiveDate) -> bool {
    bookings
        .iter()
        .filter(|b| b.state() != BookingStatus::Cancelled)
        .any(|b| ranges_overlap(check_in, check_out, b.check_in, b.check_out))
}
