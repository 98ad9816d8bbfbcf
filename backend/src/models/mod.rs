pub mod availability;
pub mod date;
pub mod time;

pub use availability::*;
pub use date::*;
pub use time::*;
