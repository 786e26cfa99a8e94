use std::collections::BTreeSet;

use super::{Error, Reservation, ReservationStatus, SeatList, SeatNumber, UserId};
use crate::trip::Trip;

/// Fails with [`Error::SeatConflict`] listing every candidate seat that is already reserved.
pub fn check_conflicts(candidate: &SeatList, reserved: &BTreeSet<SeatNumber>) -> Result<(), Error> {
    let seats = candidate.intersection(reserved);
    if seats.is_empty() {
        Ok(())
    } else {
        Err(Error::SeatConflict { seats })
    }
}

/// Turns a seat selection into a reservation ready to be stored.
///
/// Does not look at other reservations, run [`check_conflicts`] against a
/// freshly read reserved set before building.
pub struct ReservationBuilder<'a> {
    trip: &'a Trip,
    user_id: UserId,
    seats: SeatList,
}

impl<'a> ReservationBuilder<'a> {
    pub fn new(trip: &'a Trip, user_id: UserId) -> Self {
        Self {
            trip,
            user_id,
            seats: SeatList::new(),
        }
    }

    pub fn seats<I>(mut self, seats: I) -> Self
    where
        I: IntoIterator<Item = SeatNumber>,
    {
        self.seats = seats.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<Reservation, Error> {
        if self.seats.is_empty() {
            return Err(Error::NoSeatsSelected);
        }
        let total = self.trip.total_seats;
        if let Some(seat) = self.seats.iter().find(|seat| *seat == 0 || *seat > total) {
            return Err(Error::SeatOutOfRange { seat, total });
        }

        Ok(Reservation {
            id: 0,
            user_id: self.user_id,
            trip_id: self.trip.id,
            total_price: self.trip.price_for(self.seats.len()),
            seats: self.seats,
            status: ReservationStatus::Active,
        })
    }
}
