use airdesk_core::{CoreError, FlightRegistry};
use airdesk_store::OutputFormat;
use std::io::{BufRead, Write};

use crate::command::{Command, ViewTarget};
use crate::error::AppError;
use crate::render::{write_response, Response, SeatView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive booking desk: owns the registry for its whole lifetime
pub struct Session<W: Write> {
    registry: FlightRegistry,
    out: W,
    format: OutputFormat,
    prompt: String,
}

impl<W: Write> Session<W> {
    pub fn new(registry: FlightRegistry, out: W) -> Self {
        Self {
            registry,
            out,
            format: OutputFormat::Text,
            prompt: "Enter command: ".to_string(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn registry(&self) -> &FlightRegistry {
        &self.registry
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands until `exit` or end of input
    pub fn run<R: BufRead>(&mut self, mut input: R) -> anyhow::Result<()> {
        let mut line = String::new();
        loop {
            if self.format == OutputFormat::Text && !self.prompt.is_empty() {
                write!(self.out, "{}", self.prompt)?;
                self.out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input, closing session");
                break;
            }

            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(err) => {
                tracing::debug!(input = line.trim(), error = %err, "Rejected command");
                self.respond(&AppError::from(err).into())?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> anyhow::Result<Flow> {
        let flow = if command == Command::Exit {
            Flow::Exit
        } else {
            Flow::Continue
        };

        let response = self.dispatch(command).unwrap_or_else(Response::from);
        self.respond(&response)?;
        Ok(flow)
    }

    fn dispatch(&mut self, command: Command) -> Result<Response, AppError> {
        let response = match command {
            Command::Check { date, flight_number } => {
                let seats = self
                    .registry
                    .available_seats(&date, &flight_number)?
                    .into_iter()
                    .map(SeatView::from)
                    .collect();
                Response::AvailableSeats { flight_number, date, seats }
            }
            Command::Book {
                date,
                flight_number,
                seat_number,
                passenger_name,
            } => {
                let ticket_id =
                    self.registry
                        .book(&date, &flight_number, &seat_number, &passenger_name)?;
                Response::Booked { ticket_id }
            }
            Command::Return { ticket_id } => Response::Refunded {
                ticket: self.registry.return_ticket(ticket_id)?,
            },
            Command::View(ViewTarget::Ticket(ticket_id)) => {
                let (_, ticket) = self
                    .registry
                    .find_ticket(ticket_id)
                    .ok_or(CoreError::TicketNotFound(ticket_id))?;
                Response::Ticket { ticket: ticket.clone() }
            }
            Command::View(ViewTarget::Passenger(passenger_name)) => {
                let tickets = self
                    .registry
                    .tickets_by_passenger(&passenger_name)
                    .into_iter()
                    .cloned()
                    .collect();
                Response::PassengerTickets { passenger_name, tickets }
            }
            Command::Exit => Response::Exiting,
        };
        Ok(response)
    }

    fn respond(&mut self, response: &Response) -> std::io::Result<()> {
        write_response(&mut self.out, self.format, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdesk_core::{Flight, SeatBand};

    fn session() -> Session<Vec<u8>> {
        let mut registry = FlightRegistry::new();
        registry.register(Flight::new("FR123", "2024-05-01", 3, &[SeatBand::new(1, 2, 100)]).unwrap());
        Session::new(registry, Vec::new())
    }

    fn output(session: Session<Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_book_then_check() {
        let mut session = session();
        session.handle_line("book 2024-05-01 FR123 1A Alice").unwrap();
        session.handle_line("check 2024-05-01 FR123").unwrap();

        assert_eq!(
            output(session),
            "Confirmed with ID 1\n\
             Available seats for Flight FR123 on 2024-05-01:\n\
             1B $100\n1C $100\n2A $100\n2B $100\n2C $100\n"
        );
    }

    #[test]
    fn test_errors_keep_the_session_alive() {
        let mut session = session();
        assert_eq!(session.handle_line("fly FR123").unwrap(), Flow::Continue);
        assert_eq!(session.handle_line("check 2024-06-01 FR123").unwrap(), Flow::Continue);
        assert_eq!(session.handle_line("return 5").unwrap(), Flow::Continue);
        assert_eq!(session.handle_line("exit").unwrap(), Flow::Exit);

        assert_eq!(
            output(session),
            "Invalid command. Try again.\nFlight not found.\nTicket with ID 5 not found.\nExiting...\n"
        );
    }

    #[test]
    fn test_view_oversized_id_reports_invalid_id() {
        let mut session = session();
        session.handle_line("book 2024-05-01 FR123 1A 99999999999").unwrap();
        session.handle_line("view 99999999999").unwrap();

        assert_eq!(
            output(session),
            "Confirmed with ID 1\nInvalid ticket ID \"99999999999\".\n"
        );
    }
}
