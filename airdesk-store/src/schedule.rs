//! Loader for the flat schedule file.
//!
//! One flight per line:
//!
//! ```text
//! <date> <flight> <seats-per-row> <row-start>:<row-end> <price> [<row-start>:<row-end> <price> ...]
//! ```
//!
//! Blank lines and `#` comments are skipped. Row ranges may also be written
//! `<start>-<end>`, and a price may carry a leading or trailing `$`.

use airdesk_core::{Flight, FlightRegistry, LayoutError, SeatBand};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub use airdesk_core::MAX_SEATS_PER_ROW;

/// Highest row number a schedule may declare
pub const MAX_ROW: u32 = 999;

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Failed to read schedule {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: seats per row must be 1..={max}, got {value:?}")]
    InvalidSeatsPerRow { line: usize, value: String, max: u32 },
    #[error("line {line}: malformed seat band {token:?}, expected <start>:<end>")]
    MalformedBand { line: usize, token: String },
    #[error("line {line}: row range {start}:{end} is empty or starts at row 0")]
    InvalidRowRange { line: usize, start: u32, end: u32 },
    #[error("line {line}: row {row} is beyond the last row {max}")]
    RowOutOfRange { line: usize, row: u32, max: u32 },
    #[error("line {line}: rows {second} overlap rows {first}")]
    OverlappingBands {
        line: usize,
        first: String,
        second: String,
    },
    #[error("line {line}: seat band {band} has no price")]
    MissingPrice { line: usize, band: String },
    #[error("line {line}: price must be a positive integer, got {value:?}")]
    InvalidPrice { line: usize, value: String },
    #[error("line {line}: flight {flight_number} on {date} declares no seat bands")]
    NoSeatBands {
        line: usize,
        date: String,
        flight_number: String,
    },
    #[error("line {line}: {source}")]
    Layout {
        line: usize,
        #[source]
        source: LayoutError,
    },
    #[error("line {line}: flight {flight_number} on {date} is already scheduled")]
    DuplicateFlight {
        line: usize,
        date: String,
        flight_number: String,
    },
}

/// Parse one non-empty schedule line. `line` is 1-based and only used in errors.
pub fn parse_line(text: &str, line: usize) -> Result<Flight, ScheduleError> {
    let mut tokens = text.split_whitespace();

    let date = tokens
        .next()
        .ok_or(ScheduleError::MissingField { line, field: "date" })?;
    let flight_number = tokens
        .next()
        .ok_or(ScheduleError::MissingField { line, field: "flight number" })?;
    let seats_per_row = tokens
        .next()
        .ok_or(ScheduleError::MissingField { line, field: "seats per row" })
        .and_then(|raw| parse_seats_per_row(raw, line))?;

    let mut bands: Vec<SeatBand> = Vec::new();
    while let Some(range) = tokens.next() {
        let (start, end) = parse_row_range(range, line)?;
        if let Some(earlier) = bands
            .iter()
            .find(|b| start <= b.row_end && b.row_start <= end)
        {
            return Err(ScheduleError::OverlappingBands {
                line,
                first: format!("{}:{}", earlier.row_start, earlier.row_end),
                second: format!("{}:{}", start, end),
            });
        }
        let price = tokens
            .next()
            .ok_or_else(|| ScheduleError::MissingPrice { line, band: range.to_string() })
            .and_then(|raw| parse_price(raw, line))?;
        bands.push(SeatBand::new(start, end, price));
    }

    if bands.is_empty() {
        return Err(ScheduleError::NoSeatBands {
            line,
            date: date.to_string(),
            flight_number: flight_number.to_string(),
        });
    }

    Flight::new(flight_number, date, seats_per_row, &bands)
        .map_err(|source| ScheduleError::Layout { line, source })
}

pub fn parse_schedule(text: &str) -> Result<FlightRegistry, ScheduleError> {
    let mut registry = FlightRegistry::new();
    let mut seen = HashSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let flight = parse_line(trimmed, line)?;
        let key = (flight.date().to_string(), flight.flight_number().to_string());
        if !seen.insert(key) {
            return Err(ScheduleError::DuplicateFlight {
                line,
                date: flight.date().to_string(),
                flight_number: flight.flight_number().to_string(),
            });
        }
        registry.register(flight);
    }

    Ok(registry)
}

pub fn load_schedule(path: impl AsRef<Path>) -> Result<FlightRegistry, ScheduleError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let registry = parse_schedule(&text)?;
    tracing::info!(path = %path.display(), flights = registry.len(), "Schedule loaded");
    Ok(registry)
}

fn parse_seats_per_row(raw: &str, line: usize) -> Result<u32, ScheduleError> {
    match raw.parse::<u32>() {
        Ok(n) if (1..=MAX_SEATS_PER_ROW).contains(&n) => Ok(n),
        _ => Err(ScheduleError::InvalidSeatsPerRow {
            line,
            value: raw.to_string(),
            max: MAX_SEATS_PER_ROW,
        }),
    }
}

fn parse_row_range(token: &str, line: usize) -> Result<(u32, u32), ScheduleError> {
    let malformed = || ScheduleError::MalformedBand { line, token: token.to_string() };

    let (start, end) = token.split_once([':', '-']).ok_or_else(malformed)?;
    let start: u32 = start.parse().map_err(|_| malformed())?;
    let end: u32 = end.parse().map_err(|_| malformed())?;

    if start == 0 || start > end {
        return Err(ScheduleError::InvalidRowRange { line, start, end });
    }
    if end > MAX_ROW {
        return Err(ScheduleError::RowOutOfRange { line, row: end, max: MAX_ROW });
    }
    Ok((start, end))
}

fn parse_price(raw: &str, line: usize) -> Result<u32, ScheduleError> {
    let digits = raw.trim_start_matches('$').trim_end_matches('$');
    match digits.parse::<u32>() {
        Ok(price) if price > 0 => Ok(price),
        _ => Err(ScheduleError::InvalidPrice { line, value: raw.to_string() }),
    }
}
