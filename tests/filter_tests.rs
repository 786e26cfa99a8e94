mod common;

use common::{sample_trips, trip};
use koltuk::{
    filter::{self, Facets},
    shared::Collation,
    trip::TripKind,
};

#[test]
fn unique_companies_sorted_and_deduplicated() {
    let companies = filter::unique_companies(&sample_trips());
    assert_eq!(companies, vec!["Kamil Koç", "Metro Turizm", "THY"]);
}

#[test]
fn unique_companies_empty() {
    assert!(filter::unique_companies(&[]).is_empty());
}

#[test]
fn unique_departures_sorted() {
    let departures = filter::unique_departures(&sample_trips());
    assert_eq!(departures, vec!["Ankara", "İstanbul"]);
}

#[test]
fn unique_destinations_sorted() {
    let destinations = filter::unique_destinations(&sample_trips());
    assert_eq!(destinations, vec!["Ankara", "Antalya", "İzmir"]);
}

#[test]
fn unique_dates_sorted_and_deduplicated() {
    let dates = filter::unique_dates(&sample_trips());
    assert_eq!(dates, vec!["2025-01-15", "2025-01-16", "2025-01-17"]);
    assert!(filter::unique_dates(&[]).is_empty());
}

#[test]
fn turkish_collation_orders_special_letters() {
    let trips = vec![
        trip(1, TripKind::Bus, "A", "Zonguldak", "B", "2025-01-01", ("10:00", "12:00"), 100.0, 40),
        trip(2, TripKind::Bus, "A", "Çorum", "B", "2025-01-01", ("10:00", "12:00"), 100.0, 40),
        trip(3, TripKind::Bus, "A", "Uşak", "B", "2025-01-01", ("10:00", "12:00"), 100.0, 40),
        trip(4, TripKind::Bus, "A", "Şanlıurfa", "B", "2025-01-01", ("10:00", "12:00"), 100.0, 40),
        trip(5, TripKind::Bus, "A", "Sivas", "B", "2025-01-01", ("10:00", "12:00"), 100.0, 40),
    ];
    assert_eq!(
        filter::unique_departures(&trips),
        vec!["Çorum", "Sivas", "Şanlıurfa", "Uşak", "Zonguldak"]
    );
}

#[test]
fn facets_never_larger_than_input() {
    let trips = sample_trips();
    let facets = Facets::with_collation(&trips, Collation::CodePoint);
    assert!(facets.companies.len() <= trips.len());
    assert!(facets.departures.len() <= trips.len());
    assert!(facets.destinations.len() <= trips.len());
    assert!(facets.dates.len() <= trips.len());
}

#[test]
fn price_range_min_max() {
    assert_eq!(filter::price_range(&sample_trips()), (500.0, 1500.0));
}

#[test]
fn price_range_empty_defaults() {
    assert_eq!(filter::price_range(&[]), (0.0, 1000.0));
}

#[test]
fn price_range_single_trip() {
    let trips = vec![trip(1, TripKind::Bus, "Test", "A", "B", "2025-01-01", ("10:00", "12:00"), 750.0, 40)];
    assert_eq!(filter::price_range(&trips), (750.0, 750.0));
}

#[test]
fn blank_query_returns_everything_in_order() {
    let trips = sample_trips();
    for query in ["", "   "] {
        let ids: Vec<_> = filter::filter_by_query(&trips, query)
            .iter()
            .map(|trip| trip.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}

#[test]
fn query_matches_company_departure_or_destination() {
    let trips = sample_trips();
    let ids = |query: &str| -> Vec<u64> {
        filter::filter_by_query(&trips, query)
            .iter()
            .map(|trip| trip.id)
            .collect()
    };
    assert_eq!(ids("metro"), vec![1, 4]);
    assert_eq!(ids("ANKARA"), vec![1, 2]);
    assert_eq!(ids("izmir"), vec![2, 3]);
    assert_eq!(ids("thy"), vec![3]);
    assert!(ids("Trabzon").is_empty());
}

#[test]
fn query_ignores_turkish_i_variants() {
    let trips = sample_trips();
    let count = |query: &str| filter::filter_by_query(&trips, query).len();
    assert_eq!(count("istanbul"), 3);
    assert_eq!(count("ISTANBUL"), 3);
    assert_eq!(count("İSTANBUL"), 3);
}
