//! Weekend, holiday and non-workday day sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::frame::MonthFrame;
use crate::planner::Planner;
use crate::weekend::WeekendSet;

/// Days of the month whose weekday is in `weekend`, ascending.
pub fn weekend_days(frame: &MonthFrame, weekend: &WeekendSet) -> Vec<u32> {
    frame
        .days()
        .filter(|(_, weekday)| weekend.contains(*weekday))
        .map(|(day, _)| day)
        .collect()
}

/// Days carrying at least one holiday-flagged activity, ascending.
pub fn holiday_days(planner: &Planner) -> Vec<u32> {
    planner
        .iter()
        .filter(|a| a.holiday)
        .map(|a| a.day())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, de-duplicated union of weekend and holiday days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NonWorkdaySet(BTreeSet<u32>);

impl NonWorkdaySet {
    pub fn new(weekend_days: &[u32], holiday_days: &[u32]) -> Self {
        Self(weekend_days.iter().chain(holiday_days).copied().collect())
    }

    pub fn contains(&self, day: u32) -> bool {
        self.0.contains(&day)
    }

    pub fn is_workday(&self, day: u32) -> bool {
        !self.contains(day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ActivityKind, RawActivity};
    use crate::weekend::WeekendConfig;

    fn frame(y: i32, m: u32, d: u32) -> MonthFrame {
        MonthFrame::from_ymd(y, m, d).unwrap()
    }

    fn weekend(pattern: &str) -> WeekendSet {
        WeekendSet::resolve(&WeekendConfig::from(pattern)).unwrap()
    }

    #[test]
    fn weekend_days_follow_actual_weekdays() {
        assert_eq!(
            weekend_days(&frame(2021, 1, 15), &weekend("0000001")),
            [3, 10, 17, 24, 31]
        );
        assert_eq!(
            weekend_days(&frame(2021, 1, 15), &weekend("0000011")),
            [2, 3, 9, 10, 16, 17, 23, 24, 30, 31]
        );
        assert_eq!(
            weekend_days(&frame(2021, 2, 10), &weekend("0000001")),
            [7, 14, 21, 28]
        );
        assert!(weekend_days(&frame(2021, 2, 10), &weekend("0000000")).is_empty());
    }

    #[test]
    fn holiday_days_are_sorted_and_unique() {
        let f = frame(2021, 1, 15);
        let activities: Vec<_> = [
            ("2021-01-25", ActivityKind::Event, true),
            ("2021-01-04", ActivityKind::Task, true),
            ("2021-01-25", ActivityKind::Meeting, true),
            ("2021-01-11", ActivityKind::Task, false),
        ]
        .into_iter()
        .map(|(date, kind, holiday)| {
            RawActivity::new(date, "t", "d", holiday, kind)
                .validate()
                .unwrap()
        })
        .collect();
        let planner = Planner::build(&activities, &f);
        assert_eq!(holiday_days(&planner), [4, 25]);
    }

    #[test]
    fn nonworkdays_merge_both_sources() {
        let set = NonWorkdaySet::new(&[3, 10, 17, 24, 31], &[4, 25, 8, 15, 3]);
        assert_eq!(set.to_vec(), [3, 4, 8, 10, 15, 17, 24, 25, 31]);
        assert!(set.contains(15));
        assert!(set.is_workday(5));
    }
}
