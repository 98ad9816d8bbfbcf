//! # Availability Calendar
//!
//! Single-month availability calendar core.
//!
//! This crate renders a padded week grid for a month, stores a start/end
//! time-of-day per date, validates those entries, and supports month
//! navigation and bulk reset. Everything is synchronous and in-memory; the
//! drawing layer, the user-notification mechanism, and the wall clock are
//! external collaborators behind the traits in [`ports`].
//!
//! ## Architecture
//!
//! - [`models`]: `CalendarDate`, `CalendarMonth`, `TimeOfDay`, availability entries
//! - [`api`]: grid DTOs consumed by the rendering layer
//! - [`services`]: grid builder, validation rules, availability store, controller
//! - [`ports`]: clock and notifier collaborators
//! - [`config`]: `calendar.toml` and `CALENDAR_*` environment settings
//! - [`error`]: error types for malformed input and configuration
//!
//! ## Example
//!
//! ```
//! use availability_calendar::models::{CalendarDate, Direction};
//! use availability_calendar::ports::{FixedClock, RecordingNotifier};
//! use availability_calendar::services::{AvailabilityStore, CalendarController};
//!
//! let today: CalendarDate = "2026-10-16".parse().unwrap();
//! let store = AvailabilityStore::new(FixedClock(today));
//! let mut calendar = CalendarController::new(store, RecordingNotifier::new());
//!
//! calendar.edit_field("2026-10-20", "start", "09:00").unwrap();
//! calendar.edit_field("2026-10-20", "end", "09:05").unwrap();
//! assert_eq!(calendar.notifier().notifications.len(), 1);
//!
//! calendar.navigate(Direction::Next);
//! assert_eq!(calendar.current(), (2026, 10));
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{CalendarError, CalendarResult};
