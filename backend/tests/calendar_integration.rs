//! End-to-end tests of the calendar through its public controller API.

use availability_calendar::models::{CalendarDate, CalendarMonth, Direction, Field};
use availability_calendar::ports::{FixedClock, Notifier, RecordingNotifier, Severity};
use availability_calendar::services::{
    AvailabilityStore, CalendarController, CalendarGridBuilder, ValidationOutcome,
};

fn d(raw: &str) -> CalendarDate {
    raw.parse().unwrap()
}

fn calendar(today: &str) -> CalendarController<FixedClock, RecordingNotifier> {
    CalendarController::new(
        AvailabilityStore::new(FixedClock(d(today))),
        RecordingNotifier::new(),
    )
}

#[test]
fn test_month_session() {
    let mut cal = calendar("2026-10-16");
    assert_eq!(cal.view().month_year_label, "October 2026");

    // Plan the rest of the week.
    for day in ["2026-10-16", "2026-10-17", "2026-10-18"] {
        assert!(cal.edit_field(day, "start", "08:30").unwrap().is_accepted());
        assert!(cal.edit_field(day, "end", "12:00").unwrap().is_accepted());
    }
    // Yesterday is locked.
    let outcome = cal.edit_field("2026-10-15", "start", "08:30").unwrap();
    assert!(matches!(outcome, ValidationOutcome::PastDateRejected { .. }));

    let filled = cal
        .grid()
        .day_cells()
        .filter(|cell| cell.start.is_some() && cell.end.is_some())
        .count();
    assert_eq!(filled, 3);
    assert_eq!(cal.notifier().notifications.len(), 1);

    // Look ahead, come back, data is still there.
    cal.navigate(Direction::Next);
    assert_eq!(cal.view().month_year_label, "November 2026");
    assert!(cal.grid().day_cells().all(|cell| cell.start.is_none()));
    cal.navigate(Direction::Prev);
    assert_eq!(cal.grid().cell(&d("2026-10-17")).unwrap().end.unwrap().to_string(), "12:00");

    // Wipe the month.
    assert_eq!(cal.reset_month(), 4);
    assert!(cal.store().is_empty());
    assert_eq!(cal.notifier().last().unwrap().severity, Severity::Success);
}

#[test]
fn test_store_invariant_holds_after_any_edit_sequence() {
    let mut cal = calendar("2026-10-16");
    let date = d("2026-10-20");
    let edits = [
        (Field::Start, "10:00"),
        (Field::End, "09:00"),
        (Field::End, "10:05"),
        (Field::End, "11:00"),
        (Field::Start, "10:50"),
        (Field::Start, "11:30"),
        (Field::End, "11:44"),
        (Field::End, "11:45"),
    ];

    for (field, value) in edits {
        cal.apply_edit(date, field, Some(value.parse().unwrap()));
        if let Some((start, end)) = cal.store().get(&date).and_then(|e| e.window()) {
            assert!(start.minutes_until(end) >= 15, "{start}..{end} stored");
        }
    }

    let entry = cal.store().get(&date).unwrap();
    assert_eq!(entry.start.unwrap().to_string(), "11:30");
    assert_eq!(entry.end.unwrap().to_string(), "11:45");
}

#[test]
fn test_year_rollover_both_directions() {
    let store = AvailabilityStore::new(FixedClock(d("2026-10-16")));
    let mut cal = CalendarController::starting_at(
        store,
        RecordingNotifier::new(),
        CalendarMonth::new(2026, 11).unwrap(),
    );

    cal.navigate("next".parse().unwrap());
    assert_eq!(cal.current(), (2027, 0));
    cal.navigate("prev".parse().unwrap());
    cal.navigate("prev".parse().unwrap());
    assert_eq!(cal.current(), (2026, 10));
}

#[test]
fn test_grid_matches_standalone_builder() {
    let mut cal = calendar("2026-10-16");
    cal.edit_field("2026-10-30", "start", "13:00").unwrap();

    let rebuilt = CalendarGridBuilder::build(cal.month(), cal.store().entries());
    assert_eq!(cal.grid(), &rebuilt);
}

#[test]
fn test_view_json_shape() {
    let mut cal = calendar("2026-10-16");
    cal.edit_field("2026-10-20", "start", "09:00").unwrap();

    let json: serde_json::Value = serde_json::from_str(&cal.view().to_json().unwrap()).unwrap();
    assert_eq!(json["monthYearLabel"], "October 2026");
    assert_eq!(json["dayHeaders"].as_array().unwrap().len(), 7);

    let weeks = json["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 5);
    // 2026-10-01 is a Thursday: four leading padding cells.
    assert!(weeks[0]["days"][0]["day"].is_null());
    assert_eq!(weeks[0]["days"][4]["date"], "2026-10-01");
    // 2026-10-20 is the Tuesday of the fourth row.
    assert_eq!(weeks[3]["days"][2]["start"], "09:00");
}

#[test]
fn test_custom_notifier_receives_messages() {
    #[derive(Default)]
    struct Counting {
        errors: usize,
        successes: usize,
    }

    impl Notifier for Counting {
        fn notify(&mut self, notification: availability_calendar::ports::Notification) {
            match notification.severity {
                Severity::Error => self.errors += 1,
                Severity::Success => self.successes += 1,
            }
        }
    }

    let mut cal = CalendarController::new(
        AvailabilityStore::new(FixedClock(d("2026-10-16"))),
        Counting::default(),
    );
    cal.edit_field("2026-10-01", "end", "10:00").unwrap();
    cal.edit_field("2026-10-20", "start", "10:00").unwrap();
    cal.edit_field("2026-10-20", "end", "10:00").unwrap();
    cal.reset_month();

    assert_eq!(cal.notifier().errors, 2);
    assert_eq!(cal.notifier().successes, 1);
}
