pub mod collation;
pub mod time;

pub use collation::*;
pub use time::*;
