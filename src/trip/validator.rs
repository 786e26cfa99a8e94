use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
};
use thiserror::Error;

use super::{Trip, TripKind};
use crate::shared::time::Time;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form fields that must be filled before a trip can be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Company,
    Departure,
    Destination,
    Date,
    DepartureTime,
    ArrivalTime,
    Price,
    TotalSeats,
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Company => "company",
            Field::Departure => "departure",
            Field::Destination => "destination",
            Field::Date => "date",
            Field::DepartureTime => "departure_time",
            Field::ArrivalTime => "arrival_time",
            Field::Price => "price",
            Field::TotalSeats => "total_seats",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Field {field} is required")]
    MissingField { field: Field },
    #[error("Seat count for {kind} must be between {} and {}, got {actual}", .expected.start(), .expected.end())]
    InvalidSeatCount {
        kind: TripKind,
        expected: RangeInclusive<u32>,
        actual: u32,
    },
    #[error("Price for {kind} must be above 0 and at most {max}, got {actual}")]
    InvalidPrice { kind: TripKind, max: f64, actual: f64 },
    #[error("Date {0:?} is not a YYYY-MM-DD calendar date")]
    InvalidDate(String),
    #[error("{field} {value:?} is not a HH:MM time")]
    InvalidTime { field: Field, value: String },
}

pub fn validate_seat_count(kind: TripKind, seats: u32) -> Result<(), ValidationError> {
    let expected = kind.seat_range();
    if expected.contains(&seats) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSeatCount {
            kind,
            expected,
            actual: seats,
        })
    }
}

pub fn validate_price(kind: TripKind, price: f64) -> Result<(), ValidationError> {
    let max = kind.max_price();
    // Written so NaN fails as well.
    if price > 0.0 && price <= max {
        Ok(())
    } else {
        Err(ValidationError::InvalidPrice {
            kind,
            max,
            actual: price,
        })
    }
}

/// Checks the numeric bounds that depend on the trip type.
pub fn validate(kind: TripKind, seats: u32, price: f64) -> Result<(), ValidationError> {
    validate_seat_count(kind, seats)?;
    validate_price(kind, price)
}

fn require(field: Field, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(value.to_string())
    }
}

/// Raw admin input for a new trip, every field as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripForm {
    #[serde(rename = "type")]
    pub kind: TripKind,
    pub company: String,
    pub departure: String,
    pub destination: String,
    pub date: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: String,
    pub total_seats: String,
}

impl TripForm {
    /// Validates the form and builds the trip it describes, with id left at zero.
    ///
    /// Missing fields are reported first, then seat count, price, date and times.
    /// Numeric text that does not parse counts as zero and so fails its bound check.
    pub fn validate(&self) -> Result<Trip, ValidationError> {
        let company = require(Field::Company, &self.company)?;
        let departure = require(Field::Departure, &self.departure)?;
        let destination = require(Field::Destination, &self.destination)?;
        let date = require(Field::Date, &self.date)?;
        let departure_time = require(Field::DepartureTime, &self.departure_time)?;
        let arrival_time = require(Field::ArrivalTime, &self.arrival_time)?;
        let price = require(Field::Price, &self.price)?;
        let total_seats = require(Field::TotalSeats, &self.total_seats)?;

        let total_seats: u32 = total_seats.parse().unwrap_or(0);
        validate_seat_count(self.kind, total_seats)?;
        let price: f64 = price.parse().unwrap_or(0.0);
        validate_price(self.kind, price)?;

        if date.len() != 10 || NaiveDate::parse_from_str(&date, DATE_FORMAT).is_err() {
            return Err(ValidationError::InvalidDate(date));
        }
        for (field, value) in [
            (Field::DepartureTime, &departure_time),
            (Field::ArrivalTime, &arrival_time),
        ] {
            if Time::parse_hm(value).is_err() {
                return Err(ValidationError::InvalidTime {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(Trip {
            id: 0,
            kind: self.kind,
            company,
            departure,
            destination,
            date,
            departure_time,
            arrival_time,
            price,
            total_seats,
        })
    }
}

impl From<&Trip> for TripForm {
    fn from(trip: &Trip) -> Self {
        Self {
            kind: trip.kind,
            company: trip.company.clone(),
            departure: trip.departure.clone(),
            destination: trip.destination.clone(),
            date: trip.date.clone(),
            departure_time: trip.departure_time.clone(),
            arrival_time: trip.arrival_time.clone(),
            price: trip.price.to_string(),
            total_seats: trip.total_seats.to_string(),
        }
    }
}

#[test]
fn blank_company_is_missing() {
    let form = TripForm {
        company: "   ".into(),
        ..Default::default()
    };
    assert_eq!(
        form.validate(),
        Err(ValidationError::MissingField {
            field: Field::Company
        })
    );
}

#[test]
fn unparseable_seats_count_as_zero() {
    let form = TripForm {
        kind: TripKind::Bus,
        company: "Metro Turizm".into(),
        departure: "İstanbul".into(),
        destination: "Ankara".into(),
        date: "2025-01-15".into(),
        departure_time: "10:00".into(),
        arrival_time: "16:00".into(),
        price: "500".into(),
        total_seats: "kırk".into(),
    };
    assert!(matches!(
        form.validate(),
        Err(ValidationError::InvalidSeatCount { actual: 0, .. })
    ));
}

#[test]
fn nan_price_is_rejected() {
    assert!(validate_price(TripKind::Bus, f64::NAN).is_err());
}
