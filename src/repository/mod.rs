use async_trait::async_trait;
use std::{io, sync::Arc};
use thiserror::Error;
use tokio::sync::watch;

mod memory;
pub mod source;
pub use memory::*;

use crate::{
    reservation::{self, Reservation, ReservationId, UserId},
    trip::{Trip, TripId},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Trip {0} does not exist")]
    TripNotFound(TripId),
    #[error("Reservation {0} does not exist")]
    ReservationNotFound(ReservationId),
    #[error(transparent)]
    Reservation(#[from] reservation::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Full list of trips at one point in time.
pub type Snapshot = Arc<[Trip]>;

/// Local persistence for trips and reservations.
///
/// Implementations assign ids on insert and may suspend on I/O. Callers
/// await each operation before issuing the next one.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_trip(&self, trip: Trip) -> Result<TripId, Error>;

    /// Removes a trip together with its reservations.
    async fn delete_trip(&self, id: TripId) -> Result<(), Error>;

    /// Subscribes to the trip list. The feed yields the current list first,
    /// then a new snapshot after every change.
    fn trips(&self) -> TripFeed;

    async fn trip_by_id(&self, id: TripId) -> Result<Option<Trip>, Error>;

    /// Stores an active reservation. Fails with a seat conflict if any of its
    /// seats is held by another active reservation at the time of the write.
    async fn insert_reservation(&self, reservation: Reservation) -> Result<ReservationId, Error>;

    async fn reservations_by_trip(&self, trip_id: TripId) -> Result<Vec<Reservation>, Error>;

    async fn reservations_by_user(&self, user_id: UserId) -> Result<Vec<Reservation>, Error>;

    async fn cancel_reservation(&self, id: ReservationId) -> Result<(), Error>;
}

/// A live view of the trip list.
///
/// Ends once the store that produced it is dropped, and cannot be restarted.
/// Ask the store for a new feed instead.
pub struct TripFeed {
    receiver: watch::Receiver<Snapshot>,
    started: bool,
}

impl TripFeed {
    pub fn new(receiver: watch::Receiver<Snapshot>) -> Self {
        Self {
            receiver,
            started: false,
        }
    }

    /// Latest snapshot without waiting.
    pub fn current(&self) -> Snapshot {
        self.receiver.borrow().clone()
    }

    /// Waits for the next snapshot. The first call returns immediately.
    pub async fn next(&mut self) -> Option<Snapshot> {
        if self.started {
            self.receiver.changed().await.ok()?;
        }
        self.started = true;
        Some(self.receiver.borrow_and_update().clone())
    }

    pub fn into_receiver(self) -> watch::Receiver<Snapshot> {
        self.receiver
    }
}
