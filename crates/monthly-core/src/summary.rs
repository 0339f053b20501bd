//! Month-level progress statistics.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::frame::MonthFrame;
use crate::nonworkdays::NonWorkdaySet;

/// Progress of one unit (days, weeks or workdays) through the month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressStat {
    pub current: u32,
    pub total: u32,
    /// `current - 1`, -1 when nothing has been reached yet
    pub elapsed: i64,
    pub remaining: i64,
    /// `current / total` rounded to 2 decimals, 0.0 when `total` is 0
    pub percentage: f64,
}

impl ProgressStat {
    pub fn new(current: u32, total: u32) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            round2(current as f64 / total as f64)
        };
        Self {
            current,
            total,
            elapsed: i64::from(current) - 1,
            remaining: i64::from(total) - i64::from(current),
            percentage,
        }
    }

    /// Unrounded `current / total`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

/// Half-up rounding to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// First, reference and last date of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDates {
    pub start: NaiveDate,
    pub current: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub dates: SummaryDates,
    pub days: ProgressStat,
    pub weeks: ProgressStat,
    pub workdays: ProgressStat,
}

impl Summary {
    pub fn compute(frame: &MonthFrame, nonworkdays: &NonWorkdaySet) -> Self {
        let seed = frame.week_seed();
        let mut current_week = seed;
        let mut total_weeks = seed;
        let mut current_workday = 0;
        let mut total_workdays = 0;

        for (day, weekday) in frame.days() {
            let reached = day <= frame.current_day();
            if weekday == Weekday::Sun {
                total_weeks += 1;
                if reached {
                    current_week += 1;
                }
            }
            if nonworkdays.is_workday(day) {
                total_workdays += 1;
                if reached {
                    current_workday += 1;
                }
            }
        }

        Self {
            dates: SummaryDates {
                start: frame.first_date(),
                current: frame.current_date(),
                end: frame.last_date(),
            },
            days: ProgressStat::new(frame.current_day(), frame.end_day()),
            weeks: ProgressStat::new(current_week, total_weeks),
            workdays: ProgressStat::new(current_workday, total_workdays),
        }
    }
}
