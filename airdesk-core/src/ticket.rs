use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier handed to the passenger on a confirmed booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u32);

impl TicketId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketIdParseError {
    #[error("ticket id must contain only digits: {0:?}")]
    NotNumeric(String),
    #[error("ticket id out of range: {0}")]
    OutOfRange(#[from] ParseIntError),
}

impl FromStr for TicketId {
    type Err = TicketIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TicketIdParseError::NotNumeric(s.to_string()));
        }
        Ok(Self(s.parse()?))
    }
}

/// Hands out ticket ids that are never reused within one registry
#[derive(Debug, Clone)]
pub struct TicketIdGenerator {
    /// `None` once `u32::MAX` has been issued
    next: Option<u32>,
}

impl TicketIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    pub fn next_id(&mut self) -> CoreResult<TicketId> {
        let id = self.next.ok_or(CoreError::TicketIdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(TicketId(id))
    }
}

impl Default for TicketIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable record of one confirmed booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    ticket_id: TicketId,
    flight_number: String,
    date: String,
    seat_number: String,
    passenger_name: String,
    price: u32,
}

impl Ticket {
    pub fn new(
        ticket_id: TicketId,
        flight_number: impl Into<String>,
        date: impl Into<String>,
        seat_number: impl Into<String>,
        passenger_name: impl Into<String>,
        price: u32,
    ) -> Self {
        Self {
            ticket_id,
            flight_number: flight_number.into(),
            date: date.into(),
            seat_number: seat_number.into(),
            passenger_name: passenger_name.into(),
            price,
        }
    }

    pub fn ticket_id(&self) -> TicketId {
        self.ticket_id
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn seat_number(&self) -> &str {
        &self.seat_number
    }

    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticket Information:")?;
        writeln!(f, "Flight Number: {}", self.flight_number)?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Seat Number: {}", self.seat_number)?;
        writeln!(f, "Price: ${}", self.price)?;
        writeln!(f, "Passenger Name: {}", self.passenger_name)?;
        write!(f, "Ticket ID: {}", self.ticket_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_is_monotonic() {
        let mut ids = TicketIdGenerator::new();
        let first = ids.next_id().unwrap();
        let second = ids.next_id().unwrap();
        assert_eq!(first, TicketId::new(1));
        assert!(second > first);
    }

    #[test]
    fn test_generator_exhaustion_is_an_error() {
        let mut ids = TicketIdGenerator::starting_at(u32::MAX - 1);
        assert_eq!(ids.next_id(), Ok(TicketId::new(u32::MAX - 1)));
        assert_eq!(ids.next_id(), Ok(TicketId::new(u32::MAX)));
        assert_eq!(ids.next_id(), Err(CoreError::TicketIdsExhausted));
        assert_eq!(ids.next_id(), Err(CoreError::TicketIdsExhausted));
    }

    #[test]
    fn test_ticket_id_parsing() {
        assert_eq!("42".parse::<TicketId>().unwrap(), TicketId::new(42));
        assert!(matches!("+42".parse::<TicketId>(), Err(TicketIdParseError::NotNumeric(_))));
        assert!(matches!("".parse::<TicketId>(), Err(TicketIdParseError::NotNumeric(_))));
        assert!(matches!("99999999999".parse::<TicketId>(), Err(TicketIdParseError::OutOfRange(_))));
    }

    #[test]
    fn test_ticket_display() {
        let ticket = Ticket::new(TicketId::new(7), "FR123", "2024-05-01", "1A", "Alice", 100);
        let text = ticket.to_string();

        assert!(text.starts_with("Ticket Information:\n"));
        assert!(text.contains("Flight Number: FR123\n"));
        assert!(text.contains("Seat Number: 1A\n"));
        assert!(text.contains("Price: $100\n"));
        assert!(text.contains("Passenger Name: Alice\n"));
        assert!(text.ends_with("Ticket ID: 7"));
    }
}
