//! # Maitre D
//!
//! A restaurant reservation admission library.
//!
//! A restaurant's floor plan is a fixed set of tables; every sitting, the
//! reservations booked for it compete for that inventory. Deciding whether
//! one more party fits is a bin-packing feasibility problem over typed
//! bins: standard tables serve a single party, communal tables share their
//! seats between parties. This crate models the tables and answers the
//! admission question with an exact backtracking search, so a seatable
//! combination is never turned away and no table is ever overbooked.
//!
//! ## Architecture
//!
//! - **Tables** are immutable values. Seating a party returns a new table;
//!   the floor plan is re-derived from configuration for every decision,
//!   so nothing leaks between requests.
//! - **The maître d'** owns a snapshot of the floor plan and decides
//!   admission as a pure function of (tables, reservations). Largest
//!   parties are placed first, tightest-fitting tables are tried first,
//!   and dead ends backtrack - a greedy-only pass would reject seatable
//!   combinations.
//! - **Storage stays outside.** Callers fetch a sitting's reservations
//!   through the [`reservation::ReservationSource`] seam, hand the engine
//!   an immutable snapshot, and serialize their own check-then-act
//!   sequences.
//!
//! ## Core Modules
//!
//! - [`reservation`]: booking values, validation, and the storage seam
//! - [`seating`]: the table model, floor-plan configuration, and the
//!   admission engine
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use maitre_d::{MaitreD, Reservation, Table};
//! use uuid::Uuid;
//!
//! let maitre_d = MaitreD::new([Table::communal(8), Table::standard(4)]);
//!
//! let party = Reservation::new(Uuid::new_v4(), Utc::now(), "ana@example.com", "Ana", 6);
//! assert!(maitre_d.will_accept(&[], &party));
//! ```

/// Booking values and the reservation storage seam.
pub mod reservation;
pub use reservation::{
    Reservation, ReservationBook, ReservationError, ReservationId, ReservationSource,
    RestaurantId, Seats, SittingWindow,
};

/// Table model, floor-plan configuration, and admission decisions.
pub mod seating;
pub use seating::{
    MaitreD, SeatingConfig, SeatingError, ServiceHours, Table, TableKind, TableSpec,
};
