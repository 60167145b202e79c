use airdesk_core::CoreError;
use crate::command::CommandError;

/// A refused command, reported to the user without ending the session
#[derive(Debug)]
pub enum AppError {
    Core(CoreError),
    Command(CommandError),
}

impl AppError {
    /// Stable name for JSON output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::FlightNotFound { .. }) => "flight_not_found",
            AppError::Core(CoreError::SeatUnavailable(_)) => "seat_unavailable",
            AppError::Core(CoreError::SeatAlreadyBooked(_)) => "seat_already_booked",
            AppError::Core(CoreError::TicketNotFound(_)) => "ticket_not_found",
            AppError::Core(CoreError::TicketIdsExhausted) => "ticket_ids_exhausted",
            AppError::Command(CommandError::Unknown(_)) => "invalid_command",
            AppError::Command(CommandError::MissingArgument { .. }) => "missing_argument",
            AppError::Command(CommandError::InvalidTicketId(_)) => "invalid_ticket_id",
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::Core(CoreError::FlightNotFound { .. }) => "Flight not found.".to_string(),
            AppError::Core(CoreError::SeatUnavailable(seat)) => {
                format!("Seat {} does not exist on this flight.", seat)
            }
            AppError::Core(CoreError::SeatAlreadyBooked(seat)) => {
                format!("Seat {} is already booked.", seat)
            }
            AppError::Core(CoreError::TicketNotFound(id)) => {
                format!("Ticket with ID {} not found.", id)
            }
            AppError::Core(CoreError::TicketIdsExhausted) => {
                "No more tickets can be issued.".to_string()
            }
            AppError::Command(err) => err.to_string(),
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        Self::Core(err)
    }
}

impl From<CommandError> for AppError {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}
