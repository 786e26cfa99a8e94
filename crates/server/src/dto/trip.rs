use koltuk::trip::{Trip, TripId, TripKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDto {
    pub id: TripId,
    #[serde(rename = "type")]
    pub kind: TripKind,
    pub company: String,
    pub departure: String,
    pub destination: String,
    pub date: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: f64,
    pub total_seats: u32,
}

impl From<&Trip> for TripDto {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id,
            kind: trip.kind,
            company: trip.company.clone(),
            departure: trip.departure.clone(),
            destination: trip.destination.clone(),
            date: trip.date.clone(),
            departure_time: trip.departure_time.clone(),
            arrival_time: trip.arrival_time.clone(),
            duration: trip.duration_label(),
            price: trip.price,
            total_seats: trip.total_seats,
        }
    }
}
