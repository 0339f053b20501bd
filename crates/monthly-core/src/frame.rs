//! Month frame derived from a reference date.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::ConfigError;

/// Structural numbers of the active month.
///
/// Only constructible from a real calendar date, so the reference day
/// always lies within `1..=end_day` of an existing month. `month_index`
/// is 0-based (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFrame {
    reference: NaiveDate,
    last: NaiveDate,
}

impl MonthFrame {
    /// Derive the frame of the month containing `reference`.
    pub fn from_date(reference: NaiveDate) -> Self {
        let mut last = reference;
        while let Some(next) = last.succ_opt().filter(|d| d.month() == reference.month()) {
            last = next;
        }
        Self { reference, last }
    }

    /// Derive the frame from date parts, `month` being 1-based.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ConfigError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_date)
            .ok_or(ConfigError::InvalidReferenceDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    pub fn month_index(&self) -> u32 {
        self.reference.month0()
    }

    pub fn start_day(&self) -> u32 {
        1
    }

    pub fn current_day(&self) -> u32 {
        self.reference.day()
    }

    pub fn end_day(&self) -> u32 {
        self.last.day()
    }

    /// `(year, month_index, current_day)` of the reference date.
    pub fn reference_triple(&self) -> (i32, u32, u32) {
        (self.year(), self.month_index(), self.current_day())
    }

    /// `(start_day, current_day, end_day)`.
    pub fn frame_triple(&self) -> (u32, u32, u32) {
        (self.start_day(), self.current_day(), self.end_day())
    }

    /// Calendar date of day `day` of this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        self.reference.with_day(day)
    }

    pub fn first_date(&self) -> NaiveDate {
        self.last.with_day0(0).unwrap_or(self.reference)
    }

    pub fn current_date(&self) -> NaiveDate {
        self.reference
    }

    pub fn last_date(&self) -> NaiveDate {
        self.last
    }

    /// Every day of the month paired with its weekday, ascending.
    pub fn days(&self) -> impl Iterator<Item = (u32, Weekday)> + '_ {
        std::iter::successors(Some(self.first_date()), |date| date.succ_opt())
            .take(self.end_day() as usize)
            .map(|date| (date.day(), date.weekday()))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month_index()
    }

    /// Week counter seed: 0 when the month opens on a Sunday, else 1.
    pub fn week_seed(&self) -> u32 {
        if self.first_date().weekday() == Weekday::Sun {
            0
        } else {
            1
        }
    }
}

impl Serialize for MonthFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MonthFrame", 5)?;
        state.serialize_field("year", &self.year())?;
        state.serialize_field("monthIndex", &self.month_index())?;
        state.serialize_field("startDay", &self.start_day())?;
        state.serialize_field("currentDay", &self.current_day())?;
        state.serialize_field("endDay", &self.end_day())?;
        state.end()
    }
}

/// Last calendar day of `month` (1-based) in `year`, `None` when the month
/// does not exist.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| MonthFrame::from_date(first).end_day())
}
