//! Reservation storage seam.
//!
//! The admission engine never reads storage. Callers query one sitting's
//! bookings through [`ReservationSource`] and hand the engine an immutable
//! snapshot. Two concurrent "read, decide, write" sequences against the
//! same sitting must be serialized by the caller; nothing here makes that
//! check-then-act atomic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::{ReservationError, ReservationResult};
use super::models::{Reservation, ReservationId, RestaurantId};

/// Closed time interval bounding one sitting.
///
/// Partitioning reservations into sittings is the caller's job; the
/// window just scopes a storage query.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SittingWindow {
    pub from: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl SittingWindow {
    #[must_use]
    pub fn new(from: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self { from, until }
    }

    /// Window covering exactly one sitting instant.
    #[must_use]
    pub fn instant(at: DateTime<Utc>) -> Self {
        Self { from: at, until: at }
    }

    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && at <= self.until
    }
}

/// Query seam for the reservations committed to one sitting.
///
/// Implementations return the finite set of bookings competing for the
/// restaurant's tables within `window`, already scoped; the admission
/// engine performs no time filtering of its own.
pub trait ReservationSource {
    fn reservations_in(
        &self,
        restaurant_id: RestaurantId,
        window: SittingWindow,
    ) -> ReservationResult<Vec<Reservation>>;
}

/// In-memory reservation book, keyed by restaurant.
///
/// Backs the integration tests and demos; a production deployment plugs
/// a database-backed implementation into the same seam.
#[derive(Debug, Default)]
pub struct ReservationBook {
    rows: HashMap<RestaurantId, Vec<Reservation>>,
}

impl ReservationBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new booking.
    pub fn create(
        &mut self,
        restaurant_id: RestaurantId,
        reservation: Reservation,
    ) -> ReservationResult<()> {
        reservation.validate()?;
        let rows = self.rows.entry(restaurant_id).or_default();
        if rows.iter().any(|r| r.id == reservation.id) {
            return Err(ReservationError::DuplicateId(reservation.id));
        }
        log::info!("restaurant {restaurant_id}: booked {reservation}");
        rows.push(reservation);
        Ok(())
    }

    #[must_use]
    pub fn read(&self, restaurant_id: RestaurantId, id: ReservationId) -> Option<&Reservation> {
        self.rows
            .get(&restaurant_id)
            .and_then(|rows| rows.iter().find(|r| r.id == id))
    }

    /// Replace an existing booking wholesale.
    pub fn update(
        &mut self,
        restaurant_id: RestaurantId,
        reservation: Reservation,
    ) -> ReservationResult<()> {
        reservation.validate()?;
        let rows = self
            .rows
            .get_mut(&restaurant_id)
            .ok_or(ReservationError::NotFound(reservation.id))?;
        let row = rows
            .iter_mut()
            .find(|r| r.id == reservation.id)
            .ok_or(ReservationError::NotFound(reservation.id))?;
        log::info!("restaurant {restaurant_id}: rebooked {reservation}");
        *row = reservation;
        Ok(())
    }

    /// Remove a booking, returning it.
    pub fn delete(
        &mut self,
        restaurant_id: RestaurantId,
        id: ReservationId,
    ) -> ReservationResult<Reservation> {
        let rows = self
            .rows
            .get_mut(&restaurant_id)
            .ok_or(ReservationError::NotFound(id))?;
        let position = rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReservationError::NotFound(id))?;
        let removed = rows.remove(position);
        log::info!("restaurant {restaurant_id}: cancelled {removed}");
        Ok(removed)
    }
}

impl ReservationSource for ReservationBook {
    fn reservations_in(
        &self,
        restaurant_id: RestaurantId,
        window: SittingWindow,
    ) -> ReservationResult<Vec<Reservation>> {
        Ok(self
            .rows
            .get(&restaurant_id)
            .map(|rows| {
                rows.iter()
                    .filter(|r| window.contains(r.at))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 9, 14, hour, 0, 0).unwrap()
    }

    fn booking(hour: u32, quantity: u32) -> Reservation {
        Reservation::new(Uuid::new_v4(), at(hour), "g@example.com", "Guest", quantity)
    }

    // === SittingWindow Tests ===

    #[test]
    fn test_window_contains_its_bounds() {
        let window = SittingWindow::new(at(18), at(20));
        assert!(window.contains(at(18)));
        assert!(window.contains(at(19)));
        assert!(window.contains(at(20)));
    }

    #[test]
    fn test_window_excludes_outside_instants() {
        let window = SittingWindow::new(at(18), at(20));
        assert!(!window.contains(at(17)));
        assert!(!window.contains(at(21)));
    }

    #[test]
    fn test_instant_window_matches_only_its_instant() {
        let window = SittingWindow::instant(at(19));
        assert!(window.contains(at(19)));
        assert!(!window.contains(at(18)));
        assert!(!window.contains(at(20)));
    }

    // === Create Tests ===

    #[test]
    fn test_create_then_read_back() {
        let mut book = ReservationBook::new();
        let r = booking(19, 4);
        book.create(1, r.clone()).unwrap();
        assert_eq!(book.read(1, r.id), Some(&r));
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let mut book = ReservationBook::new();
        let r = booking(19, 4);
        book.create(1, r.clone()).unwrap();
        assert_eq!(
            book.create(1, r.clone()),
            Err(ReservationError::DuplicateId(r.id))
        );
    }

    #[test]
    fn test_create_validates_the_booking() {
        let mut book = ReservationBook::new();
        let r = booking(19, 0);
        assert_eq!(book.create(1, r), Err(ReservationError::EmptyParty));
    }

    #[test]
    fn test_same_id_allowed_across_restaurants() {
        let mut book = ReservationBook::new();
        let r = booking(19, 4);
        book.create(1, r.clone()).unwrap();
        assert!(book.create(2, r).is_ok());
    }

    // === Update Tests ===

    #[test]
    fn test_update_replaces_the_booking() {
        let mut book = ReservationBook::new();
        let r = booking(19, 4);
        book.create(1, r.clone()).unwrap();
        book.update(1, r.clone().with_quantity(6)).unwrap();
        assert_eq!(book.read(1, r.id).unwrap().quantity, 6);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut book = ReservationBook::new();
        book.create(1, booking(19, 4)).unwrap();
        let stranger = booking(19, 2);
        assert_eq!(
            book.update(1, stranger.clone()),
            Err(ReservationError::NotFound(stranger.id))
        );
    }

    // === Delete Tests ===

    #[test]
    fn test_delete_returns_the_booking() {
        let mut book = ReservationBook::new();
        let r = booking(19, 4);
        book.create(1, r.clone()).unwrap();
        assert_eq!(book.delete(1, r.id), Ok(r.clone()));
        assert_eq!(book.read(1, r.id), None);
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let mut book = ReservationBook::new();
        book.create(1, booking(19, 4)).unwrap();
        let id = Uuid::new_v4();
        assert_eq!(book.delete(1, id), Err(ReservationError::NotFound(id)));
    }

    // === Query Tests ===

    #[test]
    fn test_query_scopes_to_the_window() {
        let mut book = ReservationBook::new();
        let early = booking(17, 2);
        let seated = booking(19, 4);
        let late = booking(21, 3);
        book.create(1, early).unwrap();
        book.create(1, seated.clone()).unwrap();
        book.create(1, late).unwrap();

        let sitting = book
            .reservations_in(1, SittingWindow::new(at(18), at(20)))
            .unwrap();
        assert_eq!(sitting, vec![seated]);
    }

    #[test]
    fn test_query_scopes_to_the_restaurant() {
        let mut book = ReservationBook::new();
        book.create(1, booking(19, 4)).unwrap();

        let sitting = book
            .reservations_in(2, SittingWindow::instant(at(19)))
            .unwrap();
        assert!(sitting.is_empty());
    }

    #[test]
    fn test_query_unknown_restaurant_is_empty_not_an_error() {
        let book = ReservationBook::new();
        let sitting = book
            .reservations_in(42, SittingWindow::instant(at(19)))
            .unwrap();
        assert!(sitting.is_empty());
    }
}
