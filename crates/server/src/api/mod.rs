mod error;
mod reservations;
mod seats;
mod session;
mod trips;

pub use error::*;
pub use reservations::*;
pub use seats::*;
pub use session::*;
pub use trips::*;
