use airdesk_core::{TicketId, TicketIdParseError};

/// A parsed line from the booking desk prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check {
        date: String,
        flight_number: String,
    },
    Book {
        date: String,
        flight_number: String,
        seat_number: String,
        passenger_name: String,
    },
    Return {
        ticket_id: TicketId,
    },
    View(ViewTarget),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewTarget {
    Ticket(TicketId),
    Passenger(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid command. Try again.")]
    Unknown(String),
    #[error("Missing {argument}. Usage: {usage}")]
    MissingArgument {
        argument: &'static str,
        usage: &'static str,
    },
    #[error("Invalid ticket ID {0:?}.")]
    InvalidTicketId(String),
}

const CHECK_USAGE: &str = "check <date> <flight>";
const BOOK_USAGE: &str = "book <date> <flight> <seat> <passenger>";
const RETURN_USAGE: &str = "return <ticket-id>";
const VIEW_USAGE: &str = "view <ticket-id | passenger>";

impl Command {
    /// Split on whitespace; extra trailing tokens are ignored.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default();

        match name {
            "exit" => Ok(Command::Exit),
            "check" => Ok(Command::Check {
                date: arg(&mut tokens, "date", CHECK_USAGE)?,
                flight_number: arg(&mut tokens, "flight number", CHECK_USAGE)?,
            }),
            "book" => Ok(Command::Book {
                date: arg(&mut tokens, "date", BOOK_USAGE)?,
                flight_number: arg(&mut tokens, "flight number", BOOK_USAGE)?,
                seat_number: arg(&mut tokens, "seat number", BOOK_USAGE)?,
                passenger_name: arg(&mut tokens, "passenger name", BOOK_USAGE)?,
            }),
            "return" => {
                let raw = arg(&mut tokens, "ticket ID", RETURN_USAGE)?;
                let ticket_id = raw
                    .parse()
                    .map_err(|_| CommandError::InvalidTicketId(raw.clone()))?;
                Ok(Command::Return { ticket_id })
            }
            "view" => {
                let raw = arg(&mut tokens, "ticket ID or passenger name", VIEW_USAGE)?;
                // All-digit arguments are ids, even when too large to be issued
                let target = match raw.parse::<TicketId>() {
                    Ok(id) => ViewTarget::Ticket(id),
                    Err(TicketIdParseError::NotNumeric(_)) => ViewTarget::Passenger(raw),
                    Err(TicketIdParseError::OutOfRange(_)) => {
                        return Err(CommandError::InvalidTicketId(raw));
                    }
                };
                Ok(Command::View(target))
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn arg<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    argument: &'static str,
    usage: &'static str,
) -> Result<String, CommandError> {
    tokens
        .next()
        .map(str::to_string)
        .ok_or(CommandError::MissingArgument { argument, usage })
}
