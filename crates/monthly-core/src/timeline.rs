//! Day-by-day timeline of the active month.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::activity::ActivityKind;
use crate::frame::MonthFrame;
use crate::nonworkdays::NonWorkdaySet;
use crate::planner::Planner;
use crate::weekend::WeekendSet;

/// Position of a day relative to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Elapsed,
    Current,
    Remaining,
}

impl Classification {
    pub fn of(day: u32, current_day: u32) -> Self {
        use std::cmp::Ordering::*;
        match day.cmp(&current_day) {
            Less => Classification::Elapsed,
            Equal => Classification::Current,
            Greater => Classification::Remaining,
        }
    }
}

/// Per-day activity counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled {
    pub tasks: u32,
    pub events: u32,
    pub appointments: u32,
    pub meetings: u32,
    pub total: u32,
}

impl Scheduled {
    pub fn count(planner: &Planner, day: u32) -> Self {
        let tasks = planner.count_on(ActivityKind::Task, day);
        let events = planner.count_on(ActivityKind::Event, day);
        let appointments = planner.count_on(ActivityKind::Appointment, day);
        let meetings = planner.count_on(ActivityKind::Meeting, day);
        Self {
            tasks,
            events,
            appointments,
            meetings,
            total: tasks + events + appointments + meetings,
        }
    }
}

/// One calendar day of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub day: u32,
    pub year: i32,
    pub month_index: u32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday_ordinal: u8,
    pub classification: Classification,
    pub week_number: u32,
    pub workday_number: u32,
    pub is_workday: bool,
    pub is_weekend: bool,
    pub scheduled: Scheduled,
}

/// Build one record per day of `frame`, ascending.
///
/// The week counter starts at 1 (0 when the 1st is a Sunday) and steps on
/// every Sunday, so Sunday closes a Monday-first week. The workday counter
/// steps on every workday and holds its value across non-workdays.
pub fn build_days(
    frame: &MonthFrame,
    weekend: &WeekendSet,
    nonworkdays: &NonWorkdaySet,
    planner: &Planner,
) -> Vec<DayRecord> {
    let mut week = frame.week_seed();
    let mut workday = 0;

    frame
        .days()
        .map(|(day, weekday)| {
            let is_workday = nonworkdays.is_workday(day);
            if weekday == Weekday::Sun {
                week += 1;
            }
            if is_workday {
                workday += 1;
            }
            DayRecord {
                day,
                year: frame.year(),
                month_index: frame.month_index(),
                weekday_ordinal: weekday.num_days_from_sunday() as u8,
                classification: Classification::of(day, frame.current_day()),
                week_number: week,
                workday_number: workday,
                is_workday,
                is_weekend: weekend.contains(weekday),
                scheduled: Scheduled::count(planner, day),
            }
        })
        .collect()
}
