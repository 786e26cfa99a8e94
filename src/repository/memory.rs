use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::{RwLock, watch};
use tracing::{debug, info};

use super::{Error, Snapshot, Store, TripFeed};
use crate::{
    reservation::{self, Reservation, ReservationId, ReservationStatus, UserId, check_conflicts},
    trip::{Trip, TripId},
};

#[derive(Default)]
struct Tables {
    trips: BTreeMap<TripId, Trip>,
    reservations: BTreeMap<ReservationId, Reservation>,
    last_trip_id: TripId,
    last_reservation_id: ReservationId,
}

impl Tables {
    fn snapshot(&self) -> Snapshot {
        self.trips.values().cloned().collect()
    }
}

/// Process local store. Ids start at 1 and are never reused.
pub struct MemoryStore {
    tables: RwLock<Tables>,
    snapshots: watch::Sender<Snapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Snapshot::from(Vec::new()));
        Self {
            tables: Default::default(),
            snapshots,
        }
    }

    fn publish(&self, tables: &Tables) {
        let snapshot = tables.snapshot();
        debug!("Publishing {} trips", snapshot.len());
        self.snapshots.send_replace(snapshot);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_trip(&self, mut trip: Trip) -> Result<TripId, Error> {
        let mut tables = self.tables.write().await;
        tables.last_trip_id += 1;
        let id = tables.last_trip_id;
        trip.id = id;
        tables.trips.insert(id, trip);
        self.publish(&tables);
        Ok(id)
    }

    async fn delete_trip(&self, id: TripId) -> Result<(), Error> {
        let mut tables = self.tables.write().await;
        tables.trips.remove(&id).ok_or(Error::TripNotFound(id))?;
        let before = tables.reservations.len();
        tables
            .reservations
            .retain(|_, reservation| reservation.trip_id != id);
        info!(
            "Deleted trip {id} and {} reservations",
            before - tables.reservations.len()
        );
        self.publish(&tables);
        Ok(())
    }

    fn trips(&self) -> TripFeed {
        TripFeed::new(self.snapshots.subscribe())
    }

    async fn trip_by_id(&self, id: TripId) -> Result<Option<Trip>, Error> {
        Ok(self.tables.read().await.trips.get(&id).cloned())
    }

    async fn insert_reservation(&self, mut reservation: Reservation) -> Result<ReservationId, Error> {
        if reservation.seats.is_empty() {
            return Err(reservation::Error::NoSeatsSelected.into());
        }
        let mut tables = self.tables.write().await;
        let trip = tables
            .trips
            .get(&reservation.trip_id)
            .ok_or(Error::TripNotFound(reservation.trip_id))?;
        let total = trip.total_seats;
        if let Some(seat) = reservation.seats.iter().find(|seat| *seat == 0 || *seat > total) {
            return Err(reservation::Error::SeatOutOfRange { seat, total }.into());
        }
        let reserved = reservation::reserved_seats(
            tables
                .reservations
                .values()
                .filter(|existing| existing.trip_id == reservation.trip_id),
        );
        check_conflicts(&reservation.seats, &reserved)?;

        tables.last_reservation_id += 1;
        let id = tables.last_reservation_id;
        reservation.id = id;
        tables.reservations.insert(id, reservation);
        Ok(id)
    }

    async fn reservations_by_trip(&self, trip_id: TripId) -> Result<Vec<Reservation>, Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .reservations
            .values()
            .filter(|reservation| reservation.trip_id == trip_id)
            .cloned()
            .collect())
    }

    async fn reservations_by_user(&self, user_id: UserId) -> Result<Vec<Reservation>, Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .reservations
            .values()
            .filter(|reservation| reservation.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn cancel_reservation(&self, id: ReservationId) -> Result<(), Error> {
        let mut tables = self.tables.write().await;
        let reservation = tables
            .reservations
            .get_mut(&id)
            .ok_or(Error::ReservationNotFound(id))?;
        reservation.status = ReservationStatus::Cancelled;
        Ok(())
    }
}
