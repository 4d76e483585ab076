//! Reservation models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::errors::{ReservationError, ReservationResult};

/// Type alias for reservation identifiers.
pub type ReservationId = Uuid;

/// Type alias for restaurant identifiers.
pub type RestaurantId = i64;

/// Type alias for whole seats. Party sizes and table capacities are
/// counted in seats; a negative count is unrepresentable.
pub type Seats = u32;

/// A single booking for one sitting.
///
/// Reservations are immutable values. The admission engine only ever
/// groups them; edits go through the `with_` methods, which return a
/// fresh reservation.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Reservation {
    pub id: ReservationId,
    /// When the party arrives. Also identifies the sitting whose table
    /// inventory the party competes for.
    pub at: DateTime<Utc>,
    pub email: String,
    pub name: String,
    /// Number of guests in the party.
    pub quantity: Seats,
}

impl Reservation {
    #[must_use]
    pub fn new(
        id: ReservationId,
        at: DateTime<Utc>,
        email: impl Into<String>,
        name: impl Into<String>,
        quantity: Seats,
    ) -> Self {
        Self {
            id,
            at,
            email: email.into(),
            name: name.into(),
            quantity,
        }
    }

    /// Check the booking seats at least one guest and carries a way to
    /// reach them. Runs at the boundary; the admission engine itself
    /// never validates.
    pub fn validate(&self) -> ReservationResult<()> {
        if self.quantity == 0 {
            return Err(ReservationError::EmptyParty);
        }
        if self.email.is_empty() {
            return Err(ReservationError::MissingEmail);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_at(mut self, at: DateTime<Utc>) -> Self {
        self.at = at;
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: Seats) -> Self {
        self.quantity = quantity;
        self
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = format!("party of {} under {} at {}", self.quantity, self.name, self.at);
        write!(f, "{repr}")
    }
}
