#![allow(dead_code)]

use koltuk::trip::{Trip, TripForm, TripKind};

pub fn trip(
    id: u64,
    kind: TripKind,
    company: &str,
    departure: &str,
    destination: &str,
    date: &str,
    times: (&str, &str),
    price: f64,
    total_seats: u32,
) -> Trip {
    Trip {
        id,
        kind,
        company: company.into(),
        departure: departure.into(),
        destination: destination.into(),
        date: date.into(),
        departure_time: times.0.into(),
        arrival_time: times.1.into(),
        price,
        total_seats,
    }
}

pub fn sample_trips() -> Vec<Trip> {
    vec![
        trip(1, TripKind::Bus, "Metro Turizm", "İstanbul", "Ankara", "2025-01-15", ("10:00", "16:00"), 500.0, 40),
        trip(2, TripKind::Bus, "Kamil Koç", "Ankara", "İzmir", "2025-01-16", ("12:00", "20:00"), 600.0, 40),
        trip(3, TripKind::Flight, "THY", "İstanbul", "İzmir", "2025-01-15", ("14:00", "15:00"), 1500.0, 180),
        trip(4, TripKind::Bus, "Metro Turizm", "İstanbul", "Antalya", "2025-01-17", ("22:00", "08:00"), 800.0, 40),
    ]
}

pub fn bus_form() -> TripForm {
    TripForm {
        kind: TripKind::Bus,
        company: "Metro Turizm".into(),
        departure: "İstanbul".into(),
        destination: "Ankara".into(),
        date: "2025-01-15".into(),
        departure_time: "10:00".into(),
        arrival_time: "16:00".into(),
        price: "500".into(),
        total_seats: "40".into(),
    }
}

pub fn flight_form() -> TripForm {
    TripForm {
        kind: TripKind::Flight,
        company: "THY".into(),
        departure: "İstanbul".into(),
        destination: "İzmir".into(),
        date: "2025-01-15".into(),
        departure_time: "14:00".into(),
        arrival_time: "15:00".into(),
        price: "1500".into(),
        total_seats: "180".into(),
    }
}
