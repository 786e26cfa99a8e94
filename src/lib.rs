pub mod engine;
pub mod filter;
pub mod repository;
pub mod reservation;
pub mod seat;
pub mod shared;
pub mod trip;

pub mod prelude {
    pub use crate::engine::{Engine, Session};
    pub use crate::filter::{self, Facet};
    pub use crate::repository::{MemoryStore, Store, TripFeed};
    pub use crate::reservation::{Reservation, ReservationStatus, SeatList};
    pub use crate::seat::{Layout, SeatMap, SeatState};
    pub use crate::shared::{Collation, Duration, Time};
    pub use crate::trip::{Trip, TripForm, TripKind, ValidationError};
}
