//! Seating module providing the table model and admission decisions.
//!
//! This module implements:
//! - Standard and communal table variants with their capacity rules
//! - Pure copy-and-update seating transitions
//! - The maître d': an exact feasibility search over one sitting
//! - Floor-plan configuration with validation
//!
//! ## Architecture
//!
//! Tables are cheap immutable values rebuilt from configuration for each
//! admission decision. The maître d' searches for a complete assignment
//! of the sitting's parties to tables, backtracking out of dead ends, so
//! the answer is exact rather than a greedy guess: a combination that
//! fits is never turned away.
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use maitre_d::seating::{MaitreD, Table};
//! use maitre_d::reservation::Reservation;
//! use uuid::Uuid;
//!
//! let maitre_d = MaitreD::new([Table::communal(6), Table::communal(6)]);
//! let eleven = Reservation::new(Uuid::new_v4(), Utc::now(), "g@example.com", "Gro", 11);
//!
//! // Twelve seats in the room, but no single table seats eleven.
//! assert!(!maitre_d.will_accept(&[], &eleven));
//! ```

pub mod config;
pub mod errors;
pub mod maitre_d;
pub mod table;

pub use config::{SeatingConfig, TableKind, TableSpec};
pub use errors::{SeatingError, SeatingResult};
pub use maitre_d::{MaitreD, ServiceHours};
pub use table::Table;
