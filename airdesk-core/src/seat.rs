use serde::{Deserialize, Serialize};

/// A bookable seat with a price fixed at layout time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    seat_number: String,
    price: u32,
    booked: bool,
}

impl Seat {
    pub fn new(seat_number: impl Into<String>, price: u32) -> Self {
        Self {
            seat_number: seat_number.into(),
            price,
            booked: false,
        }
    }

    pub fn seat_number(&self) -> &str {
        &self.seat_number
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn is_available(&self) -> bool {
        !self.booked
    }

    /// Callers must check availability first; only `Flight` books seats.
    pub(crate) fn book(&mut self) {
        self.booked = true;
    }

    pub(crate) fn free(&mut self) {
        self.booked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_book_and_free() {
        let mut seat = Seat::new("12C", 250);
        assert!(seat.is_available());

        seat.book();
        assert!(!seat.is_available());

        seat.free();
        assert!(seat.is_available());

        // Freeing twice is harmless
        seat.free();
        assert!(seat.is_available());
        assert_eq!(seat.price(), 250);
    }
}
