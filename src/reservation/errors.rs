//! Reservation error types.

use thiserror::Error;

use super::models::ReservationId;

/// Reservation errors
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ReservationError {
    /// Booking for nobody
    #[error("A reservation must seat at least one guest")]
    EmptyParty,

    /// No way to reach the guest
    #[error("A reservation must carry a contact email")]
    MissingEmail,

    /// Unknown reservation
    #[error("No reservation found with id {0}")]
    NotFound(ReservationId),

    /// Identifier already taken
    #[error("A reservation with id {0} already exists")]
    DuplicateId(ReservationId),
}

/// Result type for reservation operations
pub type ReservationResult<T> = Result<T, ReservationError>;
