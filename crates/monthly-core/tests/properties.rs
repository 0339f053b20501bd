//! Property tests for the month engine.

use chrono::{Datelike, NaiveDate};
use monthly_core::frame::days_in_month;
use monthly_core::{
    ActivityKind, Classification, EngineOptions, MonthEngine, RawActivity, WeekendConfig,
    WeekendSet,
};
use proptest::prelude::*;

fn reference_date() -> impl Strategy<Value = NaiveDate> {
    (1971i32..2100, 1u32..=12)
        .prop_flat_map(|(year, month)| {
            (Just(year), Just(month), 1..=days_in_month(year, month).unwrap())
        })
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

fn activities_in(reference: NaiveDate) -> impl Strategy<Value = Vec<RawActivity>> {
    let end = days_in_month(reference.year(), reference.month()).unwrap();
    prop::collection::vec((1..=end, 0usize..4, any::<bool>()), 0..12).prop_map(move |items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (day, kind, holiday))| {
                let date = NaiveDate::from_ymd_opt(reference.year(), reference.month(), day)
                    .unwrap()
                    .format("%Y-%m-%d")
                    .to_string();
                RawActivity::new(
                    date,
                    format!("Item {i}"),
                    "generated",
                    holiday,
                    ActivityKind::ALL[kind],
                )
            })
            .collect()
    })
}

fn scenario() -> impl Strategy<Value = (NaiveDate, String, Vec<RawActivity>)> {
    (reference_date(), "[01]{7}").prop_flat_map(|(reference, pattern)| {
        (Just(reference), Just(pattern), activities_in(reference))
    })
}

fn build(reference: NaiveDate, pattern: &str, datebook: Vec<RawActivity>) -> MonthEngine {
    MonthEngine::new(EngineOptions {
        reference: Some(reference),
        weekend: WeekendConfig::from(pattern),
        datebook,
    })
    .unwrap()
}

proptest! {
    #[test]
    fn weekend_pattern_is_positional(pattern in "[01]{7}") {
        let set = WeekendSet::from_pattern(&pattern).unwrap();
        let monday_first = [1u8, 2, 3, 4, 5, 6, 0];
        for (flag, ordinal) in pattern.chars().zip(monday_first) {
            prop_assert_eq!(flag == '1', set.contains_ordinal(ordinal));
        }
        prop_assert_eq!(set.pattern(), pattern);
    }

    #[test]
    fn day_array_matches_month_length(reference in reference_date()) {
        let engine = build(reference, "0000011", Vec::new());
        let (start, current, end) = engine.frame_triple();
        let next_month_first = if reference.month() == 12 {
            NaiveDate::from_ymd_opt(reference.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(reference.year(), reference.month() + 1, 1)
        }
        .unwrap();

        prop_assert_eq!(start, 1);
        prop_assert_eq!(current, reference.day());
        prop_assert_eq!(end, next_month_first.pred_opt().unwrap().day());
        prop_assert_eq!(engine.days().len() as u32, end);
        for (i, record) in engine.days().iter().enumerate() {
            prop_assert_eq!(record.day, i as u32 + 1);
        }
    }

    #[test]
    fn exactly_one_current_day((reference, pattern, datebook) in scenario()) {
        let engine = build(reference, &pattern, datebook);
        let current: Vec<_> = engine
            .days()
            .iter()
            .filter(|d| d.classification == Classification::Current)
            .collect();
        prop_assert_eq!(current.len(), 1);
        prop_assert_eq!(current[0].day, reference.day());
    }

    #[test]
    fn scheduled_totals_cover_the_planner((reference, pattern, datebook) in scenario()) {
        let count = datebook.len();
        let engine = build(reference, &pattern, datebook);
        let total: u32 = engine.days().iter().map(|d| d.scheduled.total).sum();
        prop_assert_eq!(total as usize, engine.planner().len());
        prop_assert_eq!(engine.planner().len(), count);
    }

    #[test]
    fn workday_counters_agree_with_summary((reference, pattern, datebook) in scenario()) {
        let engine = build(reference, &pattern, datebook);
        let summary = engine.summary();
        let workdays = engine.days().iter().filter(|d| d.is_workday).count() as u32;
        prop_assert_eq!(summary.workdays.total, workdays);
        prop_assert_eq!(engine.days().last().unwrap().workday_number, workdays);
        prop_assert_eq!(
            engine.days()[reference.day() as usize - 1].workday_number,
            summary.workdays.current
        );
        prop_assert_eq!(engine.days().last().unwrap().week_number, summary.weeks.total);
        prop_assert!(summary.days.percentage <= 1.0);
    }

    #[test]
    fn extending_once_matches_building_at_once((reference, pattern, datebook) in scenario()) {
        let at_once = build(reference, &pattern, datebook.clone());
        let mut extended = build(reference, &pattern, Vec::new());
        extended.extend_datebook(&datebook).unwrap();

        prop_assert_eq!(extended.days(), at_once.days());
        prop_assert_eq!(extended.summary(), at_once.summary());
        prop_assert_eq!(extended.nonworkdays(), at_once.nonworkdays());
    }

    #[test]
    fn empty_extension_is_idempotent((reference, pattern, datebook) in scenario()) {
        let mut engine = build(reference, &pattern, datebook);
        let before = engine.snapshot();
        engine.extend_datebook(&[]).unwrap();
        prop_assert_eq!(&*engine.snapshot(), &*before);
    }
}
