use airdesk_core::{Seat, Ticket, TicketId};
use airdesk_store::OutputFormat;
use serde::Serialize;
use std::io::{self, Write};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub seat_number: String,
    pub price: u32,
}

impl From<&Seat> for SeatView {
    fn from(seat: &Seat) -> Self {
        Self {
            seat_number: seat.seat_number().to_string(),
            price: seat.price(),
        }
    }
}

/// Outcome of one command, ready to be written out
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    AvailableSeats {
        flight_number: String,
        date: String,
        seats: Vec<SeatView>,
    },
    Booked {
        ticket_id: TicketId,
    },
    Refunded {
        ticket: Ticket,
    },
    Ticket {
        ticket: Ticket,
    },
    PassengerTickets {
        passenger_name: String,
        tickets: Vec<Ticket>,
    },
    Error {
        code: &'static str,
        message: String,
    },
    Exiting,
}

impl From<AppError> for Response {
    fn from(err: AppError) -> Self {
        Response::Error {
            code: err.code(),
            message: err.message(),
        }
    }
}

pub fn write_response<W: Write>(out: &mut W, format: OutputFormat, response: &Response) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, response),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, response)?;
            writeln!(out)
        }
    }
}

fn write_text<W: Write>(out: &mut W, response: &Response) -> io::Result<()> {
    match response {
        Response::AvailableSeats { flight_number, date, seats } => {
            writeln!(out, "Available seats for Flight {} on {}:", flight_number, date)?;
            for seat in seats {
                writeln!(out, "{} ${}", seat.seat_number, seat.price)?;
            }
        }
        Response::Booked { ticket_id } => writeln!(out, "Confirmed with ID {}", ticket_id)?,
        Response::Refunded { ticket } => writeln!(
            out,
            "Confirmed ${} refund for {}",
            ticket.price(),
            ticket.passenger_name()
        )?,
        Response::Ticket { ticket } => writeln!(out, "{}\n", ticket)?,
        Response::PassengerTickets { passenger_name, tickets } => {
            if tickets.is_empty() {
                writeln!(out, "No tickets found for user {}.", passenger_name)?;
            }
            for ticket in tickets {
                writeln!(out, "{}\n", ticket)?;
            }
        }
        Response::Error { message, .. } => writeln!(out, "{}", message)?,
        Response::Exiting => writeln!(out, "Exiting...")?,
    }
    Ok(())
}
