//! The table model: seating units and their capacity rules.

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
    mem::discriminant,
};

use super::errors::{SeatingError, SeatingResult};
use crate::reservation::{Reservation, Seats};

/// A single physical seating unit.
///
/// Standard tables serve exactly one party at a time; communal tables
/// share their seats between any number of distinct parties. Either way a
/// party occupies one table in its entirety - it is never split across
/// tables. Seating never mutates a table: [`Table::seat`] returns a fresh
/// value, so the floor plan can be re-derived per admission decision
/// without state leaking between requests.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum Table {
    Standard {
        seats: Seats,
        occupant: Option<Reservation>,
    },
    Communal {
        seats: Seats,
        occupants: Vec<Reservation>,
    },
}

impl Table {
    /// An empty standard table.
    #[must_use]
    pub fn standard(seats: Seats) -> Self {
        Self::Standard {
            seats,
            occupant: None,
        }
    }

    /// An empty communal table.
    #[must_use]
    pub fn communal(seats: Seats) -> Self {
        Self::Communal {
            seats,
            occupants: Vec::new(),
        }
    }

    /// Total seats the table was built with. Fixed for the table's
    /// lifetime regardless of who is seated.
    #[must_use]
    pub fn capacity(&self) -> Seats {
        match self {
            Self::Standard { seats, .. } | Self::Communal { seats, .. } => *seats,
        }
    }

    /// Combined size of every party currently seated.
    #[must_use]
    pub fn seated_quantity(&self) -> Seats {
        match self {
            Self::Standard { occupant, .. } => occupant.as_ref().map_or(0, |r| r.quantity),
            Self::Communal { occupants, .. } => occupants.iter().map(|r| r.quantity).sum(),
        }
    }

    /// Seats not yet claimed by a party.
    #[must_use]
    pub fn remaining_seats(&self) -> Seats {
        self.capacity().saturating_sub(self.seated_quantity())
    }

    /// Whether a party of `quantity` can be seated here.
    ///
    /// A standard table only hosts when nobody is seated yet, however many
    /// seats its occupant leaves free; a communal table hosts any party
    /// that fits its remaining seats.
    #[must_use]
    pub fn can_host(&self, quantity: Seats) -> bool {
        match self {
            Self::Standard { seats, occupant } => occupant.is_none() && quantity <= *seats,
            Self::Communal { .. } => quantity <= self.remaining_seats(),
        }
    }

    /// Seat a party, returning the updated table.
    ///
    /// Fails where [`Table::can_host`] is false; this transition never
    /// silently overbooks.
    pub fn seat(&self, reservation: Reservation) -> SeatingResult<Self> {
        match self {
            Self::Standard {
                occupant: Some(_), ..
            } => Err(SeatingError::AlreadyOccupied),
            Self::Standard {
                seats,
                occupant: None,
            } => {
                if reservation.quantity <= *seats {
                    Ok(Self::Standard {
                        seats: *seats,
                        occupant: Some(reservation),
                    })
                } else {
                    Err(SeatingError::InsufficientSeats {
                        requested: reservation.quantity,
                        available: *seats,
                    })
                }
            }
            Self::Communal { seats, occupants } => {
                let available = self.remaining_seats();
                if reservation.quantity <= available {
                    let mut occupants = occupants.clone();
                    occupants.push(reservation);
                    Ok(Self::Communal {
                        seats: *seats,
                        occupants,
                    })
                } else {
                    Err(SeatingError::InsufficientSeats {
                        requested: reservation.quantity,
                        available,
                    })
                }
            }
        }
    }

    #[must_use]
    pub fn is_standard(&self) -> bool {
        matches!(self, Self::Standard { .. })
    }

    #[must_use]
    pub fn is_communal(&self) -> bool {
        matches!(self, Self::Communal { .. })
    }

    /// Parties currently seated at the table.
    #[must_use]
    pub fn occupants(&self) -> &[Reservation] {
        match self {
            Self::Standard { occupant, .. } => occupant.as_slice(),
            Self::Communal { occupants, .. } => occupants.as_slice(),
        }
    }
}

// Tables compare by capacity and variant; who is currently seated does
// not factor into identity. Callers rely on this to deduplicate table
// types in floor-plan configuration.
impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && discriminant(self) == discriminant(other)
    }
}

impl Eq for Table {}

impl Hash for Table {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity().hash(state);
        discriminant(self).hash(state);
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Standard { seats, .. } => format!("standard table for {seats}"),
            Self::Communal { seats, .. } => format!("communal table for {seats}"),
        };
        write!(f, "{repr}")
    }
}
