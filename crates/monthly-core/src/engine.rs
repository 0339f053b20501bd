//! Month engine: owns the frame and the derived month state.
//!
//! Construction validates every input before anything is derived, then
//! computes weekend set -> frame -> planner -> non-workdays -> days ->
//! summary. Derived state lives in an immutable [`MonthSnapshot`]; extending
//! the datebook builds a new snapshot and swaps it in, so a failed extension
//! leaves the engine exactly as it was.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::activity::{raw_datebook, validate_datebook, Activity, RawActivity};
use crate::error::{ConfigError, Result, ValidationError};
use crate::frame::MonthFrame;
use crate::nonworkdays::{holiday_days, weekend_days, NonWorkdaySet};
use crate::planner::Planner;
use crate::summary::Summary;
use crate::timeline::{build_days, DayRecord};
use crate::weekend::{WeekendConfig, WeekendSet};

/// Construction options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Reference date; today's local date when `None`
    #[serde(default)]
    pub reference: Option<NaiveDate>,
    #[serde(default)]
    pub weekend: WeekendConfig,
    #[serde(default)]
    pub datebook: Vec<RawActivity>,
}

/// Derived state of the month, replaced wholesale on every recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSnapshot {
    pub planner: Planner,
    pub weekend_days: Vec<u32>,
    pub holiday_days: Vec<u32>,
    pub nonworkdays: Vec<u32>,
    pub days: Vec<DayRecord>,
    pub summary: Summary,
}

impl MonthSnapshot {
    fn derive(frame: &MonthFrame, weekend: &WeekendSet, planner: Planner) -> Self {
        let weekend_days = weekend_days(frame, weekend);
        let holiday_days = holiday_days(&planner);
        let nonworkdays = NonWorkdaySet::new(&weekend_days, &holiday_days);
        let days = build_days(frame, weekend, &nonworkdays, &planner);
        let summary = Summary::compute(frame, &nonworkdays);

        debug!(
            year = frame.year(),
            month = frame.month_index() + 1,
            activities = planner.len(),
            nonworkdays = nonworkdays.len(),
            "derived month snapshot"
        );

        Self {
            planner,
            weekend_days,
            holiday_days,
            nonworkdays: nonworkdays.to_vec(),
            days,
            summary,
        }
    }

    /// Record of day `day` (1-based).
    pub fn day(&self, day: u32) -> Option<&DayRecord> {
        let idx = usize::try_from(day).ok()?.checked_sub(1)?;
        self.days.get(idx)
    }

    /// Activities scheduled on `day`, tasks first and meetings last.
    pub fn activities_on(&self, day: u32) -> Vec<&Activity> {
        self.planner.iter().filter(|a| a.day() == day).collect()
    }
}

/// Read-only view of the engine for serialization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineView<'a> {
    pub reference_triple: (i32, u32, u32),
    pub weekend_ordinals: &'a [u8],
    pub frame_triple: (u32, u32, u32),
    #[serde(flatten)]
    pub snapshot: &'a MonthSnapshot,
}

/// The month-derivation engine.
#[derive(Debug, Clone)]
pub struct MonthEngine {
    reference: NaiveDate,
    weekend: WeekendSet,
    frame: MonthFrame,
    snapshot: Arc<MonthSnapshot>,
}

impl MonthEngine {
    /// Validate `options` and derive the month.
    pub fn new(options: EngineOptions) -> Result<Self> {
        let reference = options
            .reference
            .unwrap_or_else(|| Local::now().date_naive());
        let weekend = WeekendSet::resolve(&options.weekend)?;
        let activities = validate_datebook(&options.datebook)?;

        let frame = MonthFrame::from_date(reference);
        let planner = Planner::build(&activities, &frame);
        let snapshot = MonthSnapshot::derive(&frame, &weekend, planner);

        Ok(Self {
            reference,
            weekend,
            frame,
            snapshot: Arc::new(snapshot),
        })
    }

    pub fn builder() -> MonthEngineBuilder {
        MonthEngineBuilder::default()
    }

    /// Append `items` to the datebook and recompute the derived state.
    ///
    /// New activities land after the existing ones of the same kind. On a
    /// validation error nothing changes.
    pub fn extend_datebook(&mut self, items: &[RawActivity]) -> Result<&mut Self> {
        let activities = validate_datebook(items)?;
        self.extend_with(&activities);
        Ok(self)
    }

    /// Same as [`Self::extend_datebook`] for an untyped JSON array.
    pub fn extend_datebook_json(&mut self, value: &Value) -> Result<&mut Self> {
        let raw = raw_datebook(value)?;
        self.extend_datebook(&raw)
    }

    fn extend_with(&mut self, activities: &[Activity]) {
        let added = Planner::build(activities, &self.frame);
        let planner = self.snapshot.planner.concat(&added);
        self.snapshot = Arc::new(MonthSnapshot::derive(&self.frame, &self.weekend, planner));
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference
    }

    /// `(year, month_index, day)` of the reference date.
    pub fn reference_triple(&self) -> (i32, u32, u32) {
        self.frame.reference_triple()
    }

    pub fn weekend(&self) -> &WeekendSet {
        &self.weekend
    }

    pub fn weekend_ordinals(&self) -> &[u8] {
        self.weekend.ordinals()
    }

    pub fn frame(&self) -> &MonthFrame {
        &self.frame
    }

    /// `(start_day, current_day, end_day)`.
    pub fn frame_triple(&self) -> (u32, u32, u32) {
        self.frame.frame_triple()
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<MonthSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn planner(&self) -> &Planner {
        &self.snapshot.planner
    }

    pub fn weekend_days(&self) -> &[u32] {
        &self.snapshot.weekend_days
    }

    pub fn holiday_days(&self) -> &[u32] {
        &self.snapshot.holiday_days
    }

    pub fn nonworkdays(&self) -> &[u32] {
        &self.snapshot.nonworkdays
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.snapshot.days
    }

    pub fn summary(&self) -> &Summary {
        &self.snapshot.summary
    }

    pub fn view(&self) -> EngineView<'_> {
        EngineView {
            reference_triple: self.reference_triple(),
            weekend_ordinals: self.weekend_ordinals(),
            frame_triple: self.frame_triple(),
            snapshot: &self.snapshot,
        }
    }
}

/// Builder for [`MonthEngine`].
///
/// Input errors are held back until [`MonthEngineBuilder::build`] and
/// reported in option order: reference date, weekend, datebook.
#[derive(Debug, Default)]
pub struct MonthEngineBuilder {
    reference: Option<std::result::Result<NaiveDate, ConfigError>>,
    weekend: WeekendConfig,
    datebook: Option<std::result::Result<Vec<RawActivity>, ValidationError>>,
}

impl MonthEngineBuilder {
    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.reference = Some(Ok(date));
        self
    }

    /// Reference date from parts, `month` being 1-based.
    pub fn reference_ymd(mut self, year: i32, month: u32, day: u32) -> Self {
        self.reference = Some(
            NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(ConfigError::InvalidReferenceDate { year, month, day }),
        );
        self
    }

    /// Reference date from a `YYYY-MM-DD` string.
    pub fn reference_str(mut self, date: &str) -> Self {
        self.reference = Some(
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| ConfigError::MalformedReferenceDate(date.to_string())),
        );
        self
    }

    pub fn weekend(mut self, weekend: impl Into<WeekendConfig>) -> Self {
        self.weekend = weekend.into();
        self
    }

    pub fn datebook(mut self, items: Vec<RawActivity>) -> Self {
        self.datebook = Some(Ok(items));
        self
    }

    pub fn datebook_json(mut self, value: &Value) -> Self {
        self.datebook = Some(raw_datebook(value));
        self
    }

    pub fn build(self) -> Result<MonthEngine> {
        let reference = self.reference.transpose()?;
        WeekendSet::resolve(&self.weekend)?;
        let datebook = self.datebook.transpose()?.unwrap_or_default();
        MonthEngine::new(EngineOptions {
            reference,
            weekend: self.weekend,
            datebook,
        })
    }
}
