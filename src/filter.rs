//! Search and facet helpers over a trip list.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{
    shared::{Collation, search_fold},
    trip::Trip,
};

/// Slider range handed out when there are no trips to measure.
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 1000.0);

/// Trip fields that can be offered as filter choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Company,
    Departure,
    Destination,
    Date,
}

impl Facet {
    pub fn value<'a>(&self, trip: &'a Trip) -> &'a str {
        match self {
            Facet::Company => &trip.company,
            Facet::Departure => &trip.departure,
            Facet::Destination => &trip.destination,
            Facet::Date => &trip.date,
        }
    }
}

/// Distinct values of `facet`, sorted with `collation`.
pub fn unique_values(trips: &[Trip], facet: Facet, collation: Collation) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values: Vec<String> = trips
        .iter()
        .map(|trip| facet.value(trip))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect();
    collation.sort(&mut values);
    values
}

pub fn unique_companies(trips: &[Trip]) -> Vec<String> {
    unique_values(trips, Facet::Company, Collation::Turkish)
}

pub fn unique_departures(trips: &[Trip]) -> Vec<String> {
    unique_values(trips, Facet::Departure, Collation::Turkish)
}

pub fn unique_destinations(trips: &[Trip]) -> Vec<String> {
    unique_values(trips, Facet::Destination, Collation::Turkish)
}

pub fn unique_dates(trips: &[Trip]) -> Vec<String> {
    unique_values(trips, Facet::Date, Collation::Turkish)
}

/// Cheapest and most expensive price, [`DEFAULT_PRICE_RANGE`] for an empty list.
pub fn price_range(trips: &[Trip]) -> (f64, f64) {
    trips
        .iter()
        .map(|trip| trip.price)
        .fold(None, |range: Option<(f64, f64)>, price| match range {
            Some((min, max)) => Some((min.min(price), max.max(price))),
            None => Some((price, price)),
        })
        .unwrap_or(DEFAULT_PRICE_RANGE)
}

/// Trips whose company, departure or destination contains `query`, ignoring case.
/// A blank query matches everything. Order is kept.
pub fn filter_by_query<'a>(trips: &'a [Trip], query: &str) -> Vec<&'a Trip> {
    let query = query.trim();
    if query.is_empty() {
        return trips.iter().collect();
    }
    let needle = search_fold(query);
    trips
        .par_iter()
        .filter(|trip| {
            [&trip.company, &trip.departure, &trip.destination]
                .into_iter()
                .any(|field| search_fold(field).contains(&needle))
        })
        .collect()
}

/// Every facet of a trip list at once, as offered to a filter sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub companies: Vec<String>,
    pub departures: Vec<String>,
    pub destinations: Vec<String>,
    pub dates: Vec<String>,
    pub price_range: (f64, f64),
}

impl Facets {
    pub fn new(trips: &[Trip]) -> Self {
        Self::with_collation(trips, Collation::default())
    }

    pub fn with_collation(trips: &[Trip], collation: Collation) -> Self {
        Self {
            companies: unique_values(trips, Facet::Company, collation),
            departures: unique_values(trips, Facet::Departure, collation),
            destinations: unique_values(trips, Facet::Destination, collation),
            dates: unique_values(trips, Facet::Date, collation),
            price_range: price_range(trips),
        }
    }
}
