//! Seating error types.

use thiserror::Error;

use crate::reservation::Seats;

/// Seating errors
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum SeatingError {
    /// A standard table serves a single party per sitting
    #[error("Table is already serving a party")]
    AlreadyOccupied,

    /// Not enough free seats for the party
    #[error("Not enough seats: available {available}, requested {requested}")]
    InsufficientSeats { requested: Seats, available: Seats },
}

/// Result type for seating operations
pub type SeatingResult<T> = Result<T, SeatingError>;
