mod common;

use common::{bus_form, flight_form};
use koltuk::{
    engine::{self, Engine},
    repository::{MemoryStore, Store},
    reservation::{self, Reservation, ReservationStatus, SeatList},
    seat::SeatState,
    trip::{TripForm, ValidationError},
};

fn seats(list: &str) -> SeatList {
    list.parse().unwrap()
}

#[tokio::test]
async fn create_trip_assigns_ids() {
    let engine = Engine::new(MemoryStore::new());
    let first = engine.create_trip(&bus_form()).await.unwrap();
    let second = engine.create_trip(&flight_form()).await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(engine.trip(2).await.unwrap().company, "THY");
}

#[tokio::test]
async fn invalid_trip_is_not_stored() {
    let engine = Engine::new(MemoryStore::new());
    let form = TripForm {
        total_seats: "19".into(),
        ..bus_form()
    };
    let err = engine.create_trip(&form).await.unwrap_err();
    assert!(matches!(
        err,
        engine::Error::Validation(ValidationError::InvalidSeatCount { .. })
    ));
    assert!(engine.trips().current().is_empty());
}

#[tokio::test]
async fn confirm_reservation() {
    let engine = Engine::new(MemoryStore::new());
    let trip = engine.create_trip(&bus_form()).await.unwrap();

    let reservation = engine.confirm(trip.id, &seats("3,7"), &5u64).await.unwrap();
    assert_eq!(reservation.id, 1);
    assert_eq!(reservation.total_price, 1000.0);
    assert_eq!(reservation.seats.to_string(), "3,7");

    let map = engine.seat_map(trip.id).await.unwrap();
    assert_eq!(map.state(3), Some(SeatState::Reserved));
    assert_eq!(map.state(7), Some(SeatState::Reserved));
    assert_eq!(map.state(4), Some(SeatState::Available));
}

#[tokio::test]
async fn empty_confirmation_fails() {
    let engine = Engine::new(MemoryStore::new());
    let trip = engine.create_trip(&bus_form()).await.unwrap();
    let err = engine.confirm(trip.id, &SeatList::new(), &5u64).await.unwrap_err();
    assert!(matches!(
        err,
        engine::Error::Reservation(reservation::Error::NoSeatsSelected)
    ));
}

#[tokio::test]
async fn seat_taken_between_render_and_confirm() {
    let engine = Engine::new(MemoryStore::new());
    let trip = engine.create_trip(&bus_form()).await.unwrap();

    // Both users render the map while seat 7 is still free.
    let mut first = engine.seat_map(trip.id).await.unwrap();
    let mut second = engine.seat_map(trip.id).await.unwrap();
    first.select_all([7, 8]).unwrap();
    second.select_all([3, 7]).unwrap();
    assert_eq!(second.state(7), Some(SeatState::Selected));

    engine.confirm(trip.id, &first.selection(), &1u64).await.unwrap();
    let err = engine
        .confirm(trip.id, &second.selection(), &2u64)
        .await
        .unwrap_err();
    match err {
        engine::Error::Reservation(reservation::Error::SeatConflict { seats }) => {
            assert_eq!(seats.to_string(), "7")
        }
        err => panic!("expected a seat conflict, got {err:?}"),
    }

    // Nothing from the rejected selection was written.
    let reserved = engine.reserved_seats(trip.id).await.unwrap();
    assert!(!reserved.contains(&3));
}

#[tokio::test]
async fn store_rejects_double_booking_on_write() {
    let engine = Engine::new(MemoryStore::new());
    let trip = engine.create_trip(&bus_form()).await.unwrap();
    let reservation = engine.confirm(trip.id, &seats("1,2"), &1u64).await.unwrap();

    let mut copy = reservation.clone();
    copy.id = 0;
    copy.user_id = 2;
    let err = engine.store().insert_reservation(copy).await.unwrap_err();
    assert!(matches!(
        err,
        koltuk::repository::Error::Reservation(reservation::Error::SeatConflict { .. })
    ));
}

#[tokio::test]
async fn store_rejects_empty_seat_list() {
    let engine = Engine::new(MemoryStore::new());
    let trip = engine.create_trip(&bus_form()).await.unwrap();
    let reservation = Reservation {
        id: 0,
        user_id: 1,
        trip_id: trip.id,
        seats: SeatList::new(),
        total_price: 0.0,
        status: ReservationStatus::Active,
    };
    let err = engine.store().insert_reservation(reservation).await.unwrap_err();
    assert!(matches!(
        err,
        koltuk::repository::Error::Reservation(reservation::Error::NoSeatsSelected)
    ));
    assert!(engine.store().reservations_by_trip(trip.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn confirm_unknown_trip() {
    let engine = Engine::new(MemoryStore::new());
    let err = engine.confirm(99, &seats("1"), &1u64).await.unwrap_err();
    assert!(matches!(err, engine::Error::TripNotFound(99)));
}

#[tokio::test]
async fn cancel_frees_seats() {
    let engine = Engine::new(MemoryStore::new());
    let trip = engine.create_trip(&bus_form()).await.unwrap();
    let reservation = engine.confirm(trip.id, &seats("5"), &1u64).await.unwrap();

    // Only the owner may cancel.
    let err = engine
        .cancel_reservation(reservation.id, &2u64)
        .await
        .unwrap_err();
    assert!(matches!(err, engine::Error::ReservationNotFound(_)));

    engine.cancel_reservation(reservation.id, &1u64).await.unwrap();
    let mine = engine.reservations_for(&1u64).await.unwrap();
    assert_eq!(mine[0].status, ReservationStatus::Cancelled);

    engine.confirm(trip.id, &seats("5"), &2u64).await.unwrap();
}

#[tokio::test]
async fn delete_trip_cascades() {
    let engine = Engine::new(MemoryStore::new());
    let trip = engine.create_trip(&bus_form()).await.unwrap();
    engine.confirm(trip.id, &seats("1"), &1u64).await.unwrap();

    engine.delete_trip(trip.id).await.unwrap();
    assert!(engine.reservations_for(&1u64).await.unwrap().is_empty());
    assert!(matches!(
        engine.delete_trip(trip.id).await,
        Err(engine::Error::TripNotFound(_))
    ));
}

#[tokio::test]
async fn trip_feed_yields_snapshots() {
    let engine = Engine::new(MemoryStore::new());
    let mut feed = engine.trips();
    assert_eq!(feed.next().await.map(|trips| trips.len()), Some(0));

    engine.create_trip(&bus_form()).await.unwrap();
    assert_eq!(feed.next().await.map(|trips| trips.len()), Some(1));

    let trip = engine.create_trip(&flight_form()).await.unwrap();
    engine.delete_trip(trip.id).await.unwrap();
    let latest = feed.next().await.unwrap();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].company, "Metro Turizm");
}

#[tokio::test]
async fn trip_feed_ends_with_store() {
    let store = MemoryStore::new();
    let mut feed = store.trips();
    assert!(feed.next().await.is_some());
    drop(store);
    assert!(feed.next().await.is_none());
}
