use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
    str::FromStr,
};

mod validator;
pub use validator::*;

use crate::shared::time::{self, Duration};

pub type TripId = u64;

/// The vehicle a trip runs on. Decides seat limits, price ceiling and seat map width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripKind {
    #[default]
    Bus,
    Flight,
}

impl TripKind {
    pub const fn seat_range(&self) -> RangeInclusive<u32> {
        match self {
            TripKind::Bus => 20..=50,
            TripKind::Flight => 100..=200,
        }
    }

    /// Highest accepted ticket price. Prices must also be strictly positive.
    pub const fn max_price(&self) -> f64 {
        match self {
            TripKind::Bus => 5000.0,
            TripKind::Flight => 10000.0,
        }
    }

    /// Seats per row on the seat map.
    pub const fn columns(&self) -> u32 {
        match self {
            TripKind::Bus => 4,
            TripKind::Flight => 6,
        }
    }
}

impl Display for TripKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripKind::Bus => write!(f, "BUS"),
            TripKind::Flight => write!(f, "FLIGHT"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown trip type {0:?}")]
pub struct UnknownTripKind(pub String);

impl FromStr for TripKind {
    type Err = UnknownTripKind;

    /// Accepts the wire names as well as the labels shown in the admin form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUS" | "OTOBÜS" => Ok(TripKind::Bus),
            "FLIGHT" | "UÇAK" => Ok(TripKind::Flight),
            _ => Err(UnknownTripKind(s.to_string())),
        }
    }
}

/// A bookable bus or flight departure with a fixed seat inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Assigned by the store on insert, zero until then.
    pub id: TripId,
    #[serde(rename = "type")]
    pub kind: TripKind,
    pub company: String,
    pub departure: String,
    pub destination: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub departure_time: String,
    /// `HH:MM`, may be on the following day.
    pub arrival_time: String,
    pub price: f64,
    pub total_seats: u32,
}

impl Trip {
    pub fn duration(&self) -> Result<Duration, time::Error> {
        time::travel_duration(&self.departure_time, &self.arrival_time)
    }

    pub fn duration_label(&self) -> String {
        time::duration_label(&self.departure_time, &self.arrival_time)
    }

    pub fn route_label(&self) -> String {
        format!("{} → {}", self.departure, self.destination)
    }

    pub fn schedule_label(&self) -> String {
        format!(
            "{}  {} → {} ({})",
            self.date,
            self.departure_time,
            self.arrival_time,
            self.duration_label()
        )
    }

    /// Price of `seats` tickets on this trip.
    pub fn price_for(&self, seats: usize) -> f64 {
        seats as f64 * self.price
    }
}
