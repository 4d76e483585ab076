//! Admission decisions over a restaurant's fixed seating inventory.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::config::SeatingConfig;
use super::table::Table;
use crate::reservation::{Reservation, Seats};

/// Service hours applied by the clock-aware admission path. Sittings
/// before `opens_at` or after `last_seating` are turned away.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ServiceHours {
    pub opens_at: NaiveTime,
    pub last_seating: NaiveTime,
}

/// Decides whether a candidate reservation fits the floor plan.
///
/// The maître d' holds an immutable snapshot of the restaurant's tables
/// and answers admission as a pure function of (tables, reservations):
/// no storage, no shared state, safe to call concurrently. Whether two
/// concurrent decide-then-persist sequences against the same sitting are
/// serialized is the caller's transaction boundary, not ours.
#[derive(Clone, Debug)]
pub struct MaitreD {
    tables: Vec<Table>,
    hours: Option<ServiceHours>,
}

impl MaitreD {
    #[must_use]
    pub fn new<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = Table>,
    {
        Self {
            tables: tables.into_iter().collect(),
            hours: None,
        }
    }

    #[must_use]
    pub fn with_hours<I>(tables: I, hours: ServiceHours) -> Self
    where
        I: IntoIterator<Item = Table>,
    {
        Self {
            tables: tables.into_iter().collect(),
            hours: Some(hours),
        }
    }

    /// Build the maître d' from a floor-plan configuration. Service hours
    /// apply only when the configuration carries both endpoints.
    #[must_use]
    pub fn from_config(config: &SeatingConfig) -> Self {
        let tables = config.tables.iter().map(|spec| spec.build()).collect();
        let hours = match (config.opens_at, config.last_seating) {
            (Some(opens_at), Some(last_seating)) => Some(ServiceHours {
                opens_at,
                last_seating,
            }),
            _ => None,
        };
        Self { tables, hours }
    }

    /// The floor plan this maître d' decides against.
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Decide whether `candidate` can join the sitting already holding
    /// `existing` without overbooking any table.
    ///
    /// Rejection means no room; it is never an error. Re-evaluating an
    /// update is the caller's concern: exclude the candidate's own prior
    /// version from `existing` first, since quantities are all the
    /// engine sees.
    #[must_use]
    pub fn will_accept(&self, existing: &[Reservation], candidate: &Reservation) -> bool {
        self.allocate(existing, candidate).is_some()
    }

    /// Clock-aware variant of [`MaitreD::will_accept`]. A candidate whose
    /// sitting time has already passed, or that falls outside configured
    /// service hours, is turned away before the packing check runs; the
    /// packing check itself never consults the clock.
    #[must_use]
    pub fn will_accept_at(
        &self,
        now: DateTime<Utc>,
        existing: &[Reservation],
        candidate: &Reservation,
    ) -> bool {
        if candidate.at < now {
            log::debug!("turning away {candidate}: sitting time has passed");
            return false;
        }
        if let Some(hours) = self.hours {
            let sitting_time = candidate.at.time();
            if sitting_time < hours.opens_at || hours.last_seating < sitting_time {
                log::debug!("turning away {candidate}: outside service hours");
                return false;
            }
        }
        self.will_accept(existing, candidate)
    }

    /// Search for an assignment of every party in the sitting to exactly
    /// one table, returning the seated floor plan when one exists.
    ///
    /// The search is exact: largest parties are placed first and
    /// tightest-fitting tables tried first, but every dead end
    /// backtracks, so a seatable combination is never rejected. Failed
    /// capacity shapes are memoized; the recursion is bounded by the
    /// number of parties in the sitting.
    #[must_use]
    pub fn allocate(
        &self,
        existing: &[Reservation],
        candidate: &Reservation,
    ) -> Option<Vec<Table>> {
        // A party of zero claims no seats.
        if candidate.quantity == 0 {
            return Some(self.tables.clone());
        }
        // A party is never split across tables, so one that exceeds every
        // table's raw capacity is unseatable no matter what else is
        // booked.
        if !self
            .tables
            .iter()
            .any(|table| candidate.quantity <= table.capacity())
        {
            log::debug!("no table fits a party of {}", candidate.quantity);
            return None;
        }

        let mut sitting: Vec<Reservation> = existing
            .iter()
            .filter(|r| r.quantity > 0)
            .cloned()
            .collect();
        sitting.push(candidate.clone());
        // Large parties are the tightest constraint; they claim capacity
        // before smaller parties fragment it.
        sitting.sort_by(|a, b| b.quantity.cmp(&a.quantity));

        let mut dead_ends = HashSet::new();
        Self::pack(self.tables.clone(), &sitting, &mut dead_ends)
    }

    fn pack(
        tables: Vec<Table>,
        pending: &[Reservation],
        dead_ends: &mut HashSet<SearchKey>,
    ) -> Option<Vec<Table>> {
        let Some((party, rest)) = pending.split_first() else {
            return Some(tables);
        };
        let key = search_key(&tables, pending.len());
        if dead_ends.contains(&key) {
            return None;
        }

        // Tightest fit first, leaving the largest gaps open for the
        // parties still waiting.
        let mut candidates: Vec<usize> = (0..tables.len())
            .filter(|&i| tables[i].can_host(party.quantity))
            .collect();
        candidates.sort_by_key(|&i| tables[i].remaining_seats());

        for i in candidates {
            let Ok(seated) = tables[i].seat(party.clone()) else {
                continue;
            };
            let mut next = tables.clone();
            next[i] = seated;
            if let Some(plan) = Self::pack(next, rest, dead_ends) {
                return Some(plan);
            }
        }

        dead_ends.insert(key);
        None
    }
}

/// States that differ only by which parties sit where explore the same
/// subtree; a failed state is remembered by the capacity shape left
/// behind. An occupied standard table contributes no usable capacity.
type SearchKey = (usize, Vec<(bool, Seats)>);

fn search_key(tables: &[Table], pending: usize) -> SearchKey {
    let mut shape: Vec<(bool, Seats)> = tables
        .iter()
        .map(|table| match table {
            Table::Standard {
                occupant: Some(_), ..
            } => (false, 0),
            Table::Standard {
                seats,
                occupant: None,
            } => (false, *seats),
            Table::Communal { .. } => (true, table.remaining_seats()),
        })
        .collect();
    shape.sort_unstable();
    (pending, shape)
}
