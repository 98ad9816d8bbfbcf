//! Walk through one month of availability editing.
//!
//! Loads `calendar.toml` (if present) and `CALENDAR_*` overrides, then
//! edits a few dates, navigates, resets, and prints the resulting view as
//! JSON. Notifications go to the log.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p availability-calendar --example month_walkthrough
//! ```

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use availability_calendar::config::CalendarConfig;
use availability_calendar::models::Direction;
use availability_calendar::services::CalendarController;

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config = CalendarConfig::load()?;
    info!(?config, "Starting availability calendar walkthrough");

    let mut calendar = CalendarController::from_config(&config)?;
    let today = calendar.store().today();
    let tomorrow = today.naive().succ_opt().map(|d| d.format("%Y-%m-%d").to_string());
    let yesterday = today.naive().pred_opt().map(|d| d.format("%Y-%m-%d").to_string());

    if let Some(tomorrow) = tomorrow.as_deref() {
        calendar.edit_field(tomorrow, "start", "09:00")?;
        calendar.edit_field(tomorrow, "end", "09:10")?; // too short
        calendar.edit_field(tomorrow, "end", "17:00")?;
    }
    if let Some(yesterday) = yesterday.as_deref() {
        calendar.edit_field(yesterday, "start", "09:00")?; // in the past
    }

    println!("{}", calendar.view().to_json()?);

    calendar.navigate(Direction::Next);
    info!(label = %calendar.view().month_year_label, "Moved forward");
    calendar.navigate(Direction::Prev);

    let cleared = calendar.reset_month();
    info!(cleared, "Month reset");

    Ok(())
}
