//! Reservation module providing booking values and the storage seam.
//!
//! This module implements:
//! - Immutable reservation values with copy-and-update transitions
//! - Boundary validation (party size, contact details)
//! - The query seam handing the admission engine one sitting's bookings
//! - An in-memory reservation book for tests and demos
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use maitre_d::reservation::{Reservation, ReservationBook, ReservationSource, SittingWindow};
//! use uuid::Uuid;
//!
//! let mut book = ReservationBook::new();
//! let at = Utc::now();
//! let r = Reservation::new(Uuid::new_v4(), at, "ana@example.com", "Ana", 4);
//! book.create(1, r)?;
//!
//! let sitting = book.reservations_in(1, SittingWindow::instant(at))?;
//! assert_eq!(sitting.len(), 1);
//! # Ok::<(), maitre_d::reservation::ReservationError>(())
//! ```

pub mod errors;
pub mod ledger;
pub mod models;

pub use errors::{ReservationError, ReservationResult};
pub use ledger::{ReservationBook, ReservationSource, SittingWindow};
pub use models::{Reservation, ReservationId, RestaurantId, Seats};
