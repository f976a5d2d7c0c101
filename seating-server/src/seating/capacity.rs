//! Seat accounting for a single table

use shared::models::Guest;

/// Seats taken by a roster. A party size below one counts as one seat.
pub fn seats_used(guests: &[Guest]) -> i32 {
    guests.iter().map(Guest::seats).sum()
}

/// Seats left at a table; negative when the roster already overshoots.
pub fn available_seats(capacity: i32, guests: &[Guest]) -> i32 {
    capacity - seats_used(guests)
}

pub fn is_full(capacity: i32, guests: &[Guest]) -> bool {
    seats_used(guests) >= capacity
}
