//! Scenario tests for the cron builder
//!
//! Covers end-to-end schedule construction, the advisory warning contract
//! in both builder modes, and conjunction evaluation on real calendar
//! dates.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use cron_builder::{CronBuilder, Weekday};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata};

/// Subscriber that counts WARN events, nothing else.
struct WarnCounter(Arc<AtomicUsize>);

impl tracing::Subscriber for WarnCounter {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        *metadata.level() == Level::WARN
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

/// Run `f` with a warning counter installed and return its WARN count.
fn warns_during<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let counter = Arc::new(AtomicUsize::new(0));
    let out = tracing::subscriber::with_default(WarnCounter(Arc::clone(&counter)), f);
    let count = counter.load(Ordering::SeqCst);
    (out, count)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_daily_backup_schedule() {
    let cron = CronBuilder::new().daily(2, 0).unwrap();
    assert_eq!(cron.render(), "0 2 * * *");
}

#[test]
fn test_business_hours_schedule() {
    let cron = CronBuilder::new()
        .at_minutes([0, 30])
        .unwrap()
        .hour_range(9, 17)
        .unwrap()
        .on_weekdays()
        .unwrap();
    assert_eq!(cron.render(), "0,30 9-17 * * 1-5");
}

#[test]
fn test_first_monday_of_month() {
    let ((), warns) = warns_during(|| {
        let cron = CronBuilder::new()
            .at(9, 0)
            .unwrap()
            .dom_range(1, 7)
            .unwrap()
            .and_dow(Weekday::Monday)
            .unwrap();

        // Conjunction is invisible in the rendered expression
        assert_eq!(cron.render(), "0 9 1-7 * *");

        // Jan 1, 2024: the first Monday of that month
        assert!(cron.should_run(&date(2024, 1, 1)));
        // Jan 13, 2025: a Monday, but outside days 1-7
        assert!(!cron.should_run(&date(2025, 1, 13)));
    });
    // One advisory warning for the conjunction itself
    assert_eq!(warns, 1);
}

#[test]
fn test_mutable_overwrite_warns_once() {
    let (cron, warns) = warns_during(|| {
        CronBuilder::new()
            .at_hour(9)
            .unwrap()
            .at_hour(14)
            .unwrap()
    });
    assert_eq!(warns, 1);
    assert_eq!(cron.render(), "* 14 * * *");
}

#[test]
fn test_first_setter_does_not_warn() {
    let ((), warns) = warns_during(|| {
        CronBuilder::new().at(9, 30).unwrap();
    });
    assert_eq!(warns, 0);
}

#[test]
fn test_immutable_mode_never_warns_on_replacement() {
    let (cron, warns) = warns_during(|| {
        CronBuilder::immutable()
            .at_hour(9)
            .unwrap()
            .at_hour(14)
            .unwrap()
    });
    assert_eq!(warns, 0);
    assert_eq!(cron.render(), "* 14 * * *");
}

#[test]
fn test_immutable_branches_are_isolated() {
    let base = CronBuilder::immutable().at(9, 0).unwrap();
    let weekday = base.branch().on_weekdays().unwrap();
    let weekend = base.branch().on_weekends().unwrap();

    assert_eq!(base.render(), "0 9 * * *");
    assert_eq!(weekday.render(), "0 9 * * 1-5");
    assert_eq!(weekend.render(), "0 9 * * 0,6");
}

#[test]
fn test_failed_setter_leaves_builder_unchanged() {
    let cron = CronBuilder::new().at(9, 0).unwrap();
    let cron = match cron.branch().at_minute(60) {
        Err(_) => cron,
        Ok(_) => panic!("minute 60 should be rejected"),
    };
    assert_eq!(cron.render(), "0 9 * * *");
}

#[test]
fn test_exact_day_conjunction() {
    let ((), _) = warns_during(|| {
        let cron = CronBuilder::new()
            .on_dom(1)
            .unwrap()
            .and_dow(Weekday::Monday)
            .unwrap();

        // Jan 1, 2024 was a Monday; Jan 1, 2025 a Wednesday
        assert!(cron.should_run(&date(2024, 1, 1)));
        assert!(!cron.should_run(&date(2025, 1, 1)));
        // A Monday that is not the 1st
        assert!(!cron.should_run(&date(2024, 1, 8)));
    });
}

#[test]
fn test_dom_anchored_conjunction() {
    let ((), _) = warns_during(|| {
        let cron = CronBuilder::new()
            .on_dow(Weekday::Monday)
            .unwrap()
            .and_dom(15)
            .unwrap();

        // Monday Jan 15, 2024
        assert!(cron.should_run(&date(2024, 1, 15)));
        // Tuesday Jan 16, 2024: the day-of-week field no longer matches
        assert!(!cron.should_run(&date(2024, 1, 16)));
    });
}

#[test]
fn test_plain_schedule_always_should_run() {
    let cron = CronBuilder::new().every_minutes(5).unwrap();
    assert!(cron.should_run(&date(2024, 6, 15)));
}

#[test]
fn test_weekday_works_with_zoned_timestamps() {
    use chrono::{TimeZone, Utc};

    let ((), _) = warns_during(|| {
        let cron = CronBuilder::new()
            .dom_range(1, 7)
            .unwrap()
            .and_dow(Weekday::Monday)
            .unwrap();

        let monday = Utc.with_ymd_and_hms(2024, 1, 1, 14, 30, 0).unwrap();
        assert!(cron.should_run(&monday));
    });
}
