use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error;

mod builder;
pub use builder::*;

use crate::trip::TripId;

pub type ReservationId = u64;
pub type UserId = u64;
pub type SeatNumber = u32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("At least one seat must be selected")]
    NoSeatsSelected,
    #[error("Seat {seat} does not exist, trip has {total} seats")]
    SeatOutOfRange { seat: SeatNumber, total: u32 },
    #[error("Seats {seats} are already reserved")]
    SeatConflict { seats: SeatList },
    #[error("Malformed seat list {0:?}")]
    MalformedSeatList(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Active,
    Cancelled,
}

/// Ordered, duplicate free seat numbers.
///
/// Serialized as ascending decimal numbers joined by commas without spaces,
/// e.g. `"3,7,12"`. That string is what gets stored and sent over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SeatList(BTreeSet<SeatNumber>);

impl SeatList {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, seat: SeatNumber) -> bool {
        self.0.contains(&seat)
    }

    pub fn iter(&self) -> impl Iterator<Item = SeatNumber> + '_ {
        self.0.iter().copied()
    }

    pub fn as_set(&self) -> &BTreeSet<SeatNumber> {
        &self.0
    }

    /// Seats present in both lists.
    pub fn intersection(&self, other: &BTreeSet<SeatNumber>) -> SeatList {
        self.0.intersection(other).copied().collect()
    }

    /// Human readable form used in labels, e.g. `"3, 7, 12"`.
    pub fn to_label(&self) -> String {
        self.join(", ")
    }

    fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(|seat| seat.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl Display for SeatList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(","))
    }
}

impl FromStr for SeatList {
    type Err = self::Error;

    /// Parses the canonical form. An empty string is an empty list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut seats = BTreeSet::new();
        if s.is_empty() {
            return Ok(Self(seats));
        }
        let mut last = 0;
        for part in s.split(',') {
            let canonical = part.bytes().all(|b| b.is_ascii_digit()) && !part.starts_with('0');
            if !canonical {
                return Err(self::Error::MalformedSeatList(s.to_string()));
            }
            let seat: SeatNumber = part
                .parse()
                .map_err(|_| self::Error::MalformedSeatList(s.to_string()))?;
            if seat <= last {
                return Err(self::Error::MalformedSeatList(s.to_string()));
            }
            last = seat;
            seats.insert(seat);
        }
        Ok(Self(seats))
    }
}

impl From<SeatList> for String {
    fn from(value: SeatList) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for SeatList {
    type Error = self::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromIterator<SeatNumber> for SeatList {
    fn from_iter<T: IntoIterator<Item = SeatNumber>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeSet<SeatNumber>> for SeatList {
    fn from(value: BTreeSet<SeatNumber>) -> Self {
        Self(value)
    }
}

/// A user's claim on one or more seats of a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Assigned by the store on insert, zero until then.
    pub id: ReservationId,
    pub user_id: UserId,
    pub trip_id: TripId,
    pub seats: SeatList,
    pub total_price: f64,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

/// Union of the seats held by the active reservations in `reservations`.
pub fn reserved_seats<'a, I>(reservations: I) -> BTreeSet<SeatNumber>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    reservations
        .into_iter()
        .filter(|reservation| reservation.is_active())
        .flat_map(|reservation| reservation.seats.iter())
        .collect()
}

#[test]
fn seat_list_canonical_form() {
    let seats: SeatList = [12, 3, 7].into_iter().collect();
    assert_eq!(seats.to_string(), "3,7,12");
    assert_eq!(seats.to_label(), "3, 7, 12");
}

#[test]
fn seat_list_rejects_spaces_and_disorder() {
    assert!("3, 7".parse::<SeatList>().is_err());
    assert!("7,3".parse::<SeatList>().is_err());
    assert!("0,3".parse::<SeatList>().is_err());
    assert!("3,,7".parse::<SeatList>().is_err());
}

#[test]
fn seat_list_rejects_signs_and_leading_zeros() {
    assert!("+3".parse::<SeatList>().is_err());
    assert!("03,7".parse::<SeatList>().is_err());
    assert!("3,-7".parse::<SeatList>().is_err());
    assert!("3,7,".parse::<SeatList>().is_err());
    assert_eq!("10,20".parse::<SeatList>().map(|seats| seats.len()), Ok(2));
}

#[test]
fn seat_list_parses_canonical() {
    let seats: SeatList = "3,7,12".parse().unwrap();
    assert_eq!(seats.iter().collect::<Vec<_>>(), vec![3, 7, 12]);
}
