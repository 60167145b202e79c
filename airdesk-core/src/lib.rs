pub mod seat;
pub mod ticket;
pub mod flight;
pub mod registry;

pub use seat::Seat;
pub use ticket::{Ticket, TicketId, TicketIdGenerator, TicketIdParseError};
pub use flight::{Flight, LayoutError, SeatBand, MAX_SEATS_PER_ROW};
pub use registry::FlightRegistry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Flight {flight_number} on {date} not found")]
    FlightNotFound {
        date: String,
        flight_number: String,
    },
    #[error("Seat {0} is not available")]
    SeatUnavailable(String),
    #[error("Seat {0} is already booked")]
    SeatAlreadyBooked(String),
    #[error("Ticket with ID {0} not found")]
    TicketNotFound(TicketId),
    #[error("No ticket IDs left to issue")]
    TicketIdsExhausted,
}

pub type CoreResult<T> = Result<T, CoreError>;
