//! Service layer: grid derivation, validation rules, the availability store,
//! and the controller that ties them together.

pub mod availability;
pub mod controller;
pub mod grid;
pub mod validation;


pub use availability::AvailabilityStore;
pub use controller::CalendarController;
pub use grid::{month_year_label, CalendarGridBuilder, DAY_HEADERS};
pub use validation::ValidationOutcome;
