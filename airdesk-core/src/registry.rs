use crate::flight::Flight;
use crate::seat::Seat;
use crate::ticket::{Ticket, TicketId, TicketIdGenerator};
use crate::{CoreError, CoreResult};

/// Every flight known to the booking desk, keyed by (date, flight number).
///
/// Owns the ticket id generator so ids stay unique across all flights.
#[derive(Debug, Default)]
pub struct FlightRegistry {
    flights: Vec<Flight>,
    ids: TicketIdGenerator,
}

impl FlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity is not checked here; the schedule loader rejects duplicates.
    pub fn register(&mut self, flight: Flight) {
        tracing::debug!(
            flight = flight.flight_number(),
            date = flight.date(),
            seats = flight.seats().len(),
            "Flight registered"
        );
        self.flights.push(flight);
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }

    pub fn find(&self, date: &str, flight_number: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.matches(date, flight_number))
    }

    pub fn find_mut(&mut self, date: &str, flight_number: &str) -> Option<&mut Flight> {
        self.flights.iter_mut().find(|f| f.matches(date, flight_number))
    }

    pub fn available_seats(&self, date: &str, flight_number: &str) -> CoreResult<Vec<&Seat>> {
        self.find(date, flight_number)
            .map(Flight::available_seats)
            .ok_or_else(|| flight_not_found(date, flight_number))
    }

    /// Book a seat on the given flight.
    ///
    /// A seat held by a live ticket reports `SeatAlreadyBooked`; any other
    /// refusal from the flight means the seat does not exist.
    pub fn book(
        &mut self,
        date: &str,
        flight_number: &str,
        seat_number: &str,
        passenger_name: &str,
    ) -> CoreResult<TicketId> {
        let flight = self
            .flights
            .iter_mut()
            .find(|f| f.matches(date, flight_number))
            .ok_or_else(|| flight_not_found(date, flight_number))?;

        if flight.is_seat_ticketed(seat_number) {
            tracing::debug!(flight = flight_number, date, seat = seat_number, "Seat already ticketed");
            return Err(CoreError::SeatAlreadyBooked(seat_number.to_string()));
        }

        flight.book_seat(seat_number, passenger_name, &mut self.ids)
    }

    /// Return a ticket from whichever flight holds it
    pub fn return_ticket(&mut self, ticket_id: TicketId) -> CoreResult<Ticket> {
        let flight = self
            .flights
            .iter_mut()
            .find(|f| f.ticket_by_id(ticket_id).is_some())
            .ok_or_else(|| {
                tracing::debug!(%ticket_id, "Return requested for unknown ticket");
                CoreError::TicketNotFound(ticket_id)
            })?;

        flight.return_ticket(ticket_id)
    }

    pub fn find_ticket(&self, ticket_id: TicketId) -> Option<(&Flight, &Ticket)> {
        self.flights
            .iter()
            .find_map(|f| f.ticket_by_id(ticket_id).map(|t| (f, t)))
    }

    /// Tickets held by `passenger_name` across all flights, flight order first
    pub fn tickets_by_passenger(&self, passenger_name: &str) -> Vec<&Ticket> {
        self.flights
            .iter()
            .flat_map(|f| f.tickets_by_passenger(passenger_name))
            .collect()
    }
}

fn flight_not_found(date: &str, flight_number: &str) -> CoreError {
    CoreError::FlightNotFound {
        date: date.to_string(),
        flight_number: flight_number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::SeatBand;

    fn registry() -> FlightRegistry {
        let mut registry = FlightRegistry::new();
        registry.register(Flight::new("FR123", "2024-05-01", 3, &[SeatBand::new(1, 2, 100)]).unwrap());
        registry.register(Flight::new("FR123", "2024-05-02", 2, &[SeatBand::new(1, 1, 80)]).unwrap());
        registry
    }

    #[test]
    fn test_find_by_date_and_number() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find("2024-05-02", "FR123").unwrap().seats().len(), 2);
        assert!(registry.find("2024-05-03", "FR123").is_none());
        assert!(registry.find("2024-05-01", "FR124").is_none());
    }

    #[test]
    fn test_book_unknown_flight() {
        let mut registry = registry();
        let result = registry.book("2024-05-09", "FR123", "1A", "Alice");
        assert_eq!(
            result,
            Err(CoreError::FlightNotFound {
                date: "2024-05-09".to_string(),
                flight_number: "FR123".to_string(),
            })
        );
        assert!(registry.available_seats("2024-05-09", "FR123").is_err());
    }

    #[test]
    fn test_book_distinguishes_taken_from_missing() {
        let mut registry = registry();
        registry.book("2024-05-01", "FR123", "1A", "Alice").unwrap();

        assert_eq!(
            registry.book("2024-05-01", "FR123", "1A", "Bob"),
            Err(CoreError::SeatAlreadyBooked("1A".to_string()))
        );
        assert_eq!(
            registry.book("2024-05-01", "FR123", "7F", "Bob"),
            Err(CoreError::SeatUnavailable("7F".to_string()))
        );
    }

    #[test]
    fn test_ids_are_unique_across_flights() {
        let mut registry = registry();
        let a = registry.book("2024-05-01", "FR123", "1A", "Alice").unwrap();
        let b = registry.book("2024-05-02", "FR123", "1A", "Alice").unwrap();
        assert_ne!(a, b);

        let (flight, ticket) = registry.find_ticket(b).unwrap();
        assert_eq!(flight.date(), "2024-05-02");
        assert_eq!(ticket.price(), 80);
    }

    #[test]
    fn test_return_searches_every_flight() {
        let mut registry = registry();
        registry.book("2024-05-01", "FR123", "2C", "Alice").unwrap();
        let id = registry.book("2024-05-02", "FR123", "1B", "Bob").unwrap();

        let ticket = registry.return_ticket(id).unwrap();
        assert_eq!(ticket.passenger_name(), "Bob");
        assert_eq!(ticket.price(), 80);
        assert!(registry.find_ticket(id).is_none());
        assert_eq!(registry.available_seats("2024-05-02", "FR123").unwrap().len(), 2);

        assert_eq!(registry.return_ticket(id), Err(CoreError::TicketNotFound(id)));
    }

    #[test]
    fn test_tickets_by_passenger_across_flights() {
        let mut registry = registry();
        registry.book("2024-05-01", "FR123", "1A", "Alice").unwrap();
        registry.book("2024-05-01", "FR123", "1B", "Bob").unwrap();
        registry.book("2024-05-02", "FR123", "1A", "Alice").unwrap();

        let tickets = registry.tickets_by_passenger("Alice");
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].date(), "2024-05-01");
        assert_eq!(tickets[1].date(), "2024-05-02");
        assert!(registry.tickets_by_passenger("Carol").is_empty());
    }
}
