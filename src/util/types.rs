//! Shared identifier and capacity types.

/// Identifier of a car in the fleet.
pub type CarId = i64;

/// Identifier of a journey (a group of people requesting seats).
pub type JourneyId = i64;

/// Seat count: a car's capacity or a journey's demand.
pub type Seats = i64;

/// Largest seat count a single car may offer, and the ceiling on what a
/// journey may request.
pub const MAX_SEATS: Seats = 6;

/// True when `id` is a usable car or journey identifier.
#[must_use]
pub fn valid_id(id: i64) -> bool {
    id > 0
}

/// True when `seats` is within the supported `1..=MAX_SEATS` range.
#[must_use]
pub fn valid_seats(seats: Seats) -> bool {
    (1..=MAX_SEATS).contains(&seats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_bounds() {
        assert!(valid_id(1));
        assert!(!valid_id(0));
        assert!(!valid_id(-7));
    }

    #[test]
    fn seat_bounds() {
        assert!(valid_seats(1));
        assert!(valid_seats(MAX_SEATS));
        assert!(!valid_seats(0));
        assert!(!valid_seats(MAX_SEATS + 1));
        assert!(!valid_seats(-2));
    }
}
