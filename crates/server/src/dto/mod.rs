mod seat_map;
mod trip;

pub use seat_map::*;
pub use trip::*;
