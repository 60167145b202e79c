use crate::seat::Seat;
use crate::ticket::{Ticket, TicketId, TicketIdGenerator};
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Seat letters run from `A` to `Z`
pub const MAX_SEATS_PER_ROW: u32 = 26;

/// Contiguous rows sharing one price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatBand {
    pub row_start: u32,
    pub row_end: u32,
    pub price: u32,
}

impl SeatBand {
    pub fn new(row_start: u32, row_end: u32, price: u32) -> Self {
        Self { row_start, row_end, price }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("seats per row must be 1..={MAX_SEATS_PER_ROW}, got {0}")]
    SeatsPerRow(u32),
    #[error("seat {0} is laid out more than once")]
    DuplicateSeat(String),
}

/// Seat inventory and ticket ledger for one flight on one date
#[derive(Debug, Clone)]
pub struct Flight {
    flight_number: String,
    date: String,
    seats_per_row: u32,
    seats: Vec<Seat>,
    tickets: Vec<Ticket>,
}

impl Flight {
    /// Lays out every row of every band with `seats_per_row` lettered seats.
    ///
    /// Seat numbers must come out unique, so overlapping bands are refused.
    pub fn new(
        flight_number: impl Into<String>,
        date: impl Into<String>,
        seats_per_row: u32,
        bands: &[SeatBand],
    ) -> Result<Self, LayoutError> {
        if !(1..=MAX_SEATS_PER_ROW).contains(&seats_per_row) {
            return Err(LayoutError::SeatsPerRow(seats_per_row));
        }

        let mut seats = Vec::new();
        let mut numbers = HashSet::new();
        for band in bands {
            for row in band.row_start..=band.row_end {
                for offset in 0..seats_per_row {
                    let letter = char::from(b'A' + offset as u8);
                    let seat_number = format!("{row}{letter}");
                    if !numbers.insert(seat_number.clone()) {
                        return Err(LayoutError::DuplicateSeat(seat_number));
                    }
                    seats.push(Seat::new(seat_number, band.price));
                }
            }
        }

        Ok(Self {
            flight_number: flight_number.into(),
            date: date.into(),
            seats_per_row,
            seats,
            tickets: Vec::new(),
        })
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn matches(&self, date: &str, flight_number: &str) -> bool {
        self.date == date && self.flight_number == flight_number
    }

    /// True when a live ticket already references `seat_number`
    pub fn is_seat_ticketed(&self, seat_number: &str) -> bool {
        self.tickets.iter().any(|t| t.seat_number() == seat_number)
    }

    /// Book an available seat and record the ticket.
    ///
    /// Fails with `SeatUnavailable` both when the seat does not exist and
    /// when it is already booked. An id is drawn only once a free seat is found.
    pub fn book_seat(
        &mut self,
        seat_number: &str,
        passenger_name: &str,
        ids: &mut TicketIdGenerator,
    ) -> CoreResult<TicketId> {
        let seat = self
            .seats
            .iter_mut()
            .find(|s| s.seat_number() == seat_number && s.is_available())
            .ok_or_else(|| CoreError::SeatUnavailable(seat_number.to_string()))?;

        let ticket_id = ids.next_id()?;
        seat.book();
        self.tickets.push(Ticket::new(
            ticket_id,
            self.flight_number.clone(),
            self.date.clone(),
            seat_number,
            passenger_name,
            seat.price(),
        ));

        tracing::info!(
            flight = %self.flight_number,
            date = %self.date,
            seat = seat_number,
            %ticket_id,
            "Seat booked"
        );
        Ok(ticket_id)
    }

    /// Remove a ticket from the ledger and free its seat
    pub fn return_ticket(&mut self, ticket_id: TicketId) -> CoreResult<Ticket> {
        let index = self
            .tickets
            .iter()
            .position(|t| t.ticket_id() == ticket_id)
            .ok_or(CoreError::TicketNotFound(ticket_id))?;

        let ticket = self.tickets.remove(index);
        if let Some(seat) = self
            .seats
            .iter_mut()
            .find(|s| s.seat_number() == ticket.seat_number())
        {
            seat.free();
        }

        tracing::info!(
            flight = %self.flight_number,
            date = %self.date,
            seat = ticket.seat_number(),
            %ticket_id,
            refund = ticket.price(),
            "Ticket returned"
        );
        Ok(ticket)
    }

    /// Seats with no live ticket, in layout order
    pub fn available_seats(&self) -> Vec<&Seat> {
        self.seats.iter().filter(|s| s.is_available()).collect()
    }

    pub fn ticket_by_id(&self, ticket_id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.ticket_id() == ticket_id)
    }

    pub fn tickets_by_passenger(&self, passenger_name: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.passenger_name() == passenger_name)
            .collect()
    }
}
