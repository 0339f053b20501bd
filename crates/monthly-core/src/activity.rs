//! Datebook activities and their validation.
//!
//! Callers hand the engine a datebook: an ordered list of activity-shaped
//! records. Untyped JSON goes through [`parse_datebook`], typed input through
//! [`validate_datebook`]. Either way the whole batch is rejected on the first
//! faulty item.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ItemFault, ValidationError};

/// Kind of scheduled activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Task,
    Event,
    Appointment,
    Meeting,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::Task,
        ActivityKind::Event,
        ActivityKind::Appointment,
        ActivityKind::Meeting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Task => "task",
            ActivityKind::Event => "event",
            ActivityKind::Appointment => "appointment",
            ActivityKind::Meeting => "meeting",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = ItemFault;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(ActivityKind::Task),
            "event" => Ok(ActivityKind::Event),
            "appointment" => Ok(ActivityKind::Appointment),
            "meeting" => Ok(ActivityKind::Meeting),
            other => Err(ItemFault::UnknownType(other.to_string())),
        }
    }
}

/// Unvalidated datebook entry.
///
/// Every field is optional so that missing data surfaces as a
/// [`ValidationError`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawActivity {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub holiday: Option<bool>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl RawActivity {
    pub fn new(
        date: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        holiday: bool,
        kind: ActivityKind,
    ) -> Self {
        Self {
            date: Some(date.into()),
            title: Some(title.into()),
            description: Some(description.into()),
            holiday: Some(holiday),
            kind: Some(kind.as_str().to_string()),
        }
    }

    /// Check the entry and decompose its date.
    pub fn validate(&self) -> Result<Activity, ItemFault> {
        let date = self.date.as_deref().ok_or(ItemFault::MissingField("date"))?;
        let title = self.title.as_deref().ok_or(ItemFault::MissingField("title"))?;
        let description = self
            .description
            .as_deref()
            .ok_or(ItemFault::MissingField("description"))?;
        let holiday = self.holiday.ok_or(ItemFault::MissingField("holiday"))?;
        let kind = self.kind.as_deref().ok_or(ItemFault::MissingField("type"))?;

        let calendar_date = parse_calendar_date(date)?;
        if calendar_date <= NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN) {
            return Err(ItemFault::DateBeforeEpoch);
        }
        let kind: ActivityKind = kind.parse()?;
        if title.is_empty() {
            return Err(ItemFault::EmptyTitle);
        }
        if description.is_empty() {
            return Err(ItemFault::EmptyDescription);
        }

        Ok(Activity {
            date: date.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            holiday,
            kind,
            ymd: (
                calendar_date.year(),
                calendar_date.month0(),
                calendar_date.day(),
            ),
        })
    }
}

/// A validated activity.
///
/// `ymd` holds `(year, month_index, day)` with a 0-based month index,
/// matching [`crate::MonthFrame`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub date: String,
    pub title: String,
    pub description: String,
    pub holiday: bool,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub ymd: (i32, u32, u32),
}

impl Activity {
    pub fn year(&self) -> i32 {
        self.ymd.0
    }

    pub fn month_index(&self) -> u32 {
        self.ymd.1
    }

    pub fn day(&self) -> u32 {
        self.ymd.2
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part.
fn parse_calendar_date(input: &str) -> Result<NaiveDate, ItemFault> {
    let prefix = input.get(..10).ok_or(ItemFault::MalformedDate)?;
    let shape_ok = prefix.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return Err(ItemFault::MalformedDate);
    }
    let date =
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| ItemFault::MalformedDate)?;

    if input.len() == 10 {
        return Ok(date);
    }
    let time_ok = DateTime::parse_from_rfc3339(input).is_ok()
        || ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(input, fmt).is_ok());
    if time_ok {
        Ok(date)
    } else {
        Err(ItemFault::MalformedDate)
    }
}

/// Validate a typed datebook.
pub fn validate_datebook(items: &[RawActivity]) -> Result<Vec<Activity>, ValidationError> {
    items
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            raw.validate()
                .map_err(|fault| ValidationError::InvalidItem { index, fault })
        })
        .collect()
}

/// Validate an untyped JSON datebook.
pub fn parse_datebook(value: &Value) -> Result<Vec<Activity>, ValidationError> {
    let items = value.as_array().ok_or(ValidationError::NotASequence)?;
    let raw = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            raw_from_json(item).map_err(|fault| ValidationError::InvalidItem { index, fault })
        })
        .collect::<Result<Vec<_>, _>>()?;
    validate_datebook(&raw)
}

/// Read raw items from a JSON array without validating them.
pub fn raw_datebook(value: &Value) -> Result<Vec<RawActivity>, ValidationError> {
    let items = value.as_array().ok_or(ValidationError::NotASequence)?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            raw_from_json(item).map_err(|fault| ValidationError::InvalidItem { index, fault })
        })
        .collect()
}

fn raw_from_json(item: &Value) -> Result<RawActivity, ItemFault> {
    let obj = item.as_object().ok_or(ItemFault::NotAnObject)?;
    Ok(RawActivity {
        date: Some(string_field(obj, "date")?),
        title: Some(string_field(obj, "title")?),
        description: Some(string_field(obj, "description")?),
        holiday: Some(
            obj.get("holiday")
                .ok_or(ItemFault::MissingField("holiday"))?
                .as_bool()
                .ok_or(ItemFault::WrongType("holiday"))?,
        ),
        kind: Some(string_field(obj, "type")?),
    })
}

fn string_field(obj: &Map<String, Value>, name: &'static str) -> Result<String, ItemFault> {
    obj.get(name)
        .ok_or(ItemFault::MissingField(name))?
        .as_str()
        .map(str::to_string)
        .ok_or(ItemFault::WrongType(name))
}
