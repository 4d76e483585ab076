//! Floor-plan configuration models.
//!
//! A restaurant's tables are configuration, not state: the maître d'
//! re-derives fresh table values from the same plan for every decision.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::table::Table;
use crate::reservation::Seats;

/// Table variants
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Standard,
    Communal,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Standard => write!(f, "standard"),
            TableKind::Communal => write!(f, "communal"),
        }
    }
}

/// One table in the floor plan.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableSpec {
    pub kind: TableKind,
    pub seats: Seats,
}

impl TableSpec {
    /// An empty table built to this spec.
    #[must_use]
    pub fn build(&self) -> Table {
        match self.kind {
            TableKind::Standard => Table::standard(self.seats),
            TableKind::Communal => Table::communal(self.seats),
        }
    }
}

/// Restaurant seating configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SeatingConfig {
    /// Restaurant name
    pub name: String,

    /// The fixed floor plan
    pub tables: Vec<TableSpec>,

    /// First seating of the day
    pub opens_at: Option<NaiveTime>,

    /// Final seating of the day
    pub last_seating: Option<NaiveTime>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            name: "Default Restaurant".to_string(),
            tables: vec![
                TableSpec {
                    kind: TableKind::Standard,
                    seats: 2,
                },
                TableSpec {
                    kind: TableKind::Standard,
                    seats: 2,
                },
                TableSpec {
                    kind: TableKind::Standard,
                    seats: 4,
                },
                TableSpec {
                    kind: TableKind::Standard,
                    seats: 4,
                },
                TableSpec {
                    kind: TableKind::Communal,
                    seats: 8,
                },
            ],
            opens_at: NaiveTime::from_hms_opt(18, 0, 0),
            last_seating: NaiveTime::from_hms_opt(21, 0, 0),
        }
    }
}

impl SeatingConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.tables.is_empty() {
            return Err("A restaurant needs at least one table".to_string());
        }

        if self.tables.iter().any(|table| table.seats == 0) {
            return Err("Tables must have at least one seat".to_string());
        }

        if let (Some(opens_at), Some(last_seating)) = (self.opens_at, self.last_seating) {
            if last_seating < opens_at {
                return Err("Last seating cannot come before opening".to_string());
            }
        }

        Ok(())
    }

    /// Parse a floor plan from JSON application settings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Largest party the floor plan can ever seat at one table. Calendar
    /// reporting uses this as the day's headline size.
    #[must_use]
    pub fn largest_table(&self) -> Seats {
        self.tables.iter().map(|table| table.seats).max().unwrap_or(0)
    }
}
