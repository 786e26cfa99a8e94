use std::{collections::BTreeSet, path::Path, sync::Arc};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    repository::{self, Store, TripFeed, source},
    reservation::{
        self, Reservation, ReservationBuilder, ReservationId, SeatList, SeatNumber, UserId,
        check_conflicts,
    },
    seat::{self, SeatMap},
    trip::{Trip, TripForm, TripId, ValidationError},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Reservation(#[from] reservation::Error),
    #[error(transparent)]
    Seat(#[from] seat::Error),
    #[error("Trip {0} does not exist")]
    TripNotFound(TripId),
    #[error("Reservation {0} does not exist")]
    ReservationNotFound(ReservationId),
    #[error("Store error: {0}")]
    Store(repository::Error),
}

impl From<repository::Error> for Error {
    fn from(value: repository::Error) -> Self {
        match value {
            repository::Error::TripNotFound(id) => Error::TripNotFound(id),
            repository::Error::ReservationNotFound(id) => Error::ReservationNotFound(id),
            repository::Error::Reservation(err) => Error::Reservation(err),
            err => Error::Store(err),
        }
    }
}

/// Supplies the signed in user.
pub trait Session: Send + Sync {
    fn user_id(&self) -> UserId;
}

impl Session for UserId {
    fn user_id(&self) -> UserId {
        *self
    }
}

/// The trip and reservation workflows on top of a [`Store`].
pub struct Engine<S> {
    store: Arc<S>,
}

impl<S> Clone for Engine<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: Store> Engine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates an admin form and stores the trip. Returns the trip with its new id.
    pub async fn create_trip(&self, form: &TripForm) -> Result<Trip, Error> {
        let mut trip = form.validate()?;
        trip.id = self.store.insert_trip(trip.clone()).await?;
        info!(
            "Created {} trip {} {} ({} seats)",
            trip.kind,
            trip.id,
            trip.route_label(),
            trip.total_seats
        );
        Ok(trip)
    }

    pub async fn delete_trip(&self, id: TripId) -> Result<(), Error> {
        self.store.delete_trip(id).await?;
        Ok(())
    }

    pub fn trips(&self) -> TripFeed {
        self.store.trips()
    }

    pub async fn trip(&self, id: TripId) -> Result<Trip, Error> {
        self.store
            .trip_by_id(id)
            .await?
            .ok_or(Error::TripNotFound(id))
    }

    /// Seats held by active reservations, read fresh from the store.
    pub async fn reserved_seats(&self, trip_id: TripId) -> Result<BTreeSet<SeatNumber>, Error> {
        let reservations = self.store.reservations_by_trip(trip_id).await?;
        Ok(reservation::reserved_seats(&reservations))
    }

    /// A seat map for the trip with nothing selected yet.
    pub async fn seat_map(&self, trip_id: TripId) -> Result<SeatMap, Error> {
        let trip = self.trip(trip_id).await?;
        let reserved = self.reserved_seats(trip_id).await?;
        Ok(SeatMap::new(&trip, reserved))
    }

    /// Commits a seat selection for the session's user.
    ///
    /// The reserved set is read again here rather than trusting whatever the
    /// seat map showed, since another user may have confirmed in between.
    pub async fn confirm<C>(
        &self,
        trip_id: TripId,
        selection: &SeatList,
        session: &C,
    ) -> Result<Reservation, Error>
    where
        C: Session + ?Sized,
    {
        if selection.is_empty() {
            return Err(reservation::Error::NoSeatsSelected.into());
        }
        let trip = self.trip(trip_id).await?;
        let reserved = self.reserved_seats(trip_id).await?;
        if let Err(err) = check_conflicts(selection, &reserved) {
            warn!("Rejected reservation on trip {trip_id}: {err}");
            return Err(err.into());
        }

        let mut reservation = ReservationBuilder::new(&trip, session.user_id())
            .seats(selection.iter())
            .build()?;
        reservation.id = self.store.insert_reservation(reservation.clone()).await?;
        info!(
            "Reserved seats {} on trip {trip_id} for user {} ({} total)",
            reservation.seats, reservation.user_id, reservation.total_price
        );
        Ok(reservation)
    }

    pub async fn reservations_for<C>(&self, session: &C) -> Result<Vec<Reservation>, Error>
    where
        C: Session + ?Sized,
    {
        Ok(self.store.reservations_by_user(session.user_id()).await?)
    }

    /// Cancels one of the session user's reservations, freeing its seats.
    pub async fn cancel_reservation<C>(&self, id: ReservationId, session: &C) -> Result<(), Error>
    where
        C: Session + ?Sized,
    {
        let owned = self
            .reservations_for(session)
            .await?
            .iter()
            .any(|reservation| reservation.id == id);
        if !owned {
            return Err(Error::ReservationNotFound(id));
        }
        self.store.cancel_reservation(id).await?;
        info!("Cancelled reservation {id}");
        Ok(())
    }

    /// Creates a trip for every valid row of a CSV sheet and returns how many were created.
    pub async fn import_csv<P: AsRef<Path>>(
        &self,
        path: P,
        config: &source::Config,
    ) -> Result<usize, Error> {
        let forms = source::csv::read_forms(path, config)?;
        let mut created = 0;
        for (i, form) in forms.iter().enumerate() {
            match self.create_trip(form).await {
                Ok(_) => created += 1,
                Err(Error::Validation(err)) => warn!("Skipping trip row {}: {err}", i + 1),
                Err(err) => return Err(err),
            }
        }
        info!("Imported {created} of {} trips", forms.len());
        Ok(created)
    }
}
