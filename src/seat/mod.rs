use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::{
    reservation::{SeatList, SeatNumber},
    trip::{Trip, TripKind},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Seat {seat} is not on the map, trip has {total} seats")]
    SeatOutOfRange { seat: SeatNumber, total: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatState {
    Available,
    Selected,
    Reserved,
}

/// Grid geometry of a seat map. Seats fill rows left to right starting at 1,
/// the last row may be partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub columns: u32,
    pub rows: u32,
    pub seats: u32,
}

impl Layout {
    pub const fn new(kind: TripKind, total_seats: u32) -> Self {
        let columns = kind.columns();
        Self {
            columns,
            rows: total_seats.div_ceil(columns),
            seats: total_seats,
        }
    }

    /// Zero based (row, column) of a seat number, None if the seat is not on
    /// the map.
    pub const fn position(&self, seat: SeatNumber) -> Option<(u32, u32)> {
        if seat == 0 || seat > self.seats {
            return None;
        }
        let index = seat - 1;
        Some((index / self.columns, index % self.columns))
    }
}

/// Seat states for one trip as seen by one user.
///
/// Reserved seats come from committed reservations. The selection never
/// holds a reserved seat.
#[derive(Debug, Clone)]
pub struct SeatMap {
    kind: TripKind,
    total_seats: u32,
    price: f64,
    reserved: BTreeSet<SeatNumber>,
    selected: BTreeSet<SeatNumber>,
}

impl SeatMap {
    pub fn new(trip: &Trip, reserved: BTreeSet<SeatNumber>) -> Self {
        Self {
            kind: trip.kind,
            total_seats: trip.total_seats,
            price: trip.price,
            reserved,
            selected: BTreeSet::new(),
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.kind, self.total_seats)
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    fn check(&self, seat: SeatNumber) -> Result<(), Error> {
        if seat == 0 || seat > self.total_seats {
            Err(Error::SeatOutOfRange {
                seat,
                total: self.total_seats,
            })
        } else {
            Ok(())
        }
    }

    /// State of a single seat, None if the seat is not on the map.
    pub fn state(&self, seat: SeatNumber) -> Option<SeatState> {
        self.check(seat).ok()?;
        let state = if self.reserved.contains(&seat) {
            SeatState::Reserved
        } else if self.selected.contains(&seat) {
            SeatState::Selected
        } else {
            SeatState::Available
        };
        Some(state)
    }

    /// Every seat from 1 to the seat count with its state.
    pub fn states(&self) -> impl Iterator<Item = (SeatNumber, SeatState)> + '_ {
        (1..=self.total_seats).filter_map(|seat| self.state(seat).map(|state| (seat, state)))
    }

    /// Seats grouped by row, as they would be drawn.
    pub fn rows(&self) -> Vec<Vec<(SeatNumber, SeatState)>> {
        let columns = self.layout().columns as usize;
        let seats: Vec<_> = self.states().collect();
        seats.chunks(columns).map(|row| row.to_vec()).collect()
    }

    /// Flips a seat in or out of the selection and returns its new state.
    /// Reserved seats are left untouched.
    pub fn toggle(&mut self, seat: SeatNumber) -> Result<SeatState, Error> {
        self.check(seat)?;
        if !self.reserved.contains(&seat) && !self.selected.remove(&seat) {
            self.selected.insert(seat);
        }
        Ok(self.state(seat).unwrap_or(SeatState::Available))
    }

    /// Selects each seat in turn, as if clicked in order.
    pub fn select_all<I>(&mut self, seats: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = SeatNumber>,
    {
        for seat in seats {
            self.check(seat)?;
            if !self.reserved.contains(&seat) {
                self.selected.insert(seat);
            }
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Replaces the reserved set with a fresh read. Selected seats that someone
    /// else reserved in the meantime leave the selection and are returned.
    pub fn refresh_reserved(&mut self, reserved: BTreeSet<SeatNumber>) -> SeatList {
        self.reserved = reserved;
        let taken: SeatList = self.selected.intersection(&self.reserved).copied().collect();
        for seat in taken.iter() {
            self.selected.remove(&seat);
        }
        taken
    }

    pub fn reserved(&self) -> &BTreeSet<SeatNumber> {
        &self.reserved
    }

    pub fn selection(&self) -> SeatList {
        self.selected.iter().copied().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn total_price(&self) -> f64 {
        self.selected.len() as f64 * self.price
    }

    /// Selected seats ascending, e.g. `"3, 7, 12"`.
    pub fn selected_label(&self) -> String {
        self.selection().to_label()
    }

    pub fn available_count(&self) -> usize {
        self.states()
            .filter(|(_, state)| *state == SeatState::Available)
            .count()
    }
}

#[cfg(test)]
fn bus(total_seats: u32) -> Trip {
    Trip {
        id: 1,
        kind: TripKind::Bus,
        company: "Metro Turizm".into(),
        departure: "İstanbul".into(),
        destination: "Ankara".into(),
        date: "2025-01-15".into(),
        departure_time: "10:00".into(),
        arrival_time: "16:00".into(),
        price: 500.0,
        total_seats,
    }
}

#[test]
fn layout_rounds_rows_up() {
    assert_eq!(Layout::new(TripKind::Bus, 41), Layout { columns: 4, rows: 11, seats: 41 });
    assert_eq!(Layout::new(TripKind::Flight, 180), Layout { columns: 6, rows: 30, seats: 180 });
}

#[test]
fn layout_position() {
    let layout = Layout::new(TripKind::Bus, 40);
    assert_eq!(layout.position(1), Some((0, 0)));
    assert_eq!(layout.position(4), Some((0, 3)));
    assert_eq!(layout.position(5), Some((1, 0)));
    assert_eq!(layout.position(0), None);
    assert_eq!(layout.position(40), Some((9, 3)));
    assert_eq!(layout.position(41), None);
}

#[test]
fn last_row_is_partial() {
    let map = SeatMap::new(&bus(22), BTreeSet::new());
    let rows = map.rows();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows.last().map(|row| row.len()), Some(2));
}

#[test]
fn reserved_seat_wins_over_selection() {
    let mut map = SeatMap::new(&bus(40), BTreeSet::new());
    map.toggle(7).unwrap();
    let taken = map.refresh_reserved(BTreeSet::from([7]));
    assert_eq!(map.state(7), Some(SeatState::Reserved));
    assert_eq!(taken.to_string(), "7");
    assert!(map.selection().is_empty());
}
