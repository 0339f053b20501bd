//! # Monthly Core Library
//!
//! This library derives a structured, day-by-day model of a calendar month
//! from a reference date, a weekend pattern and a datebook of scheduled
//! activities. The CLI binary is a thin rendering layer over the same
//! library.
//!
//! ## Architecture
//!
//! - **Weekend**: decodes weekend codes and binary patterns into weekdays
//! - **Frame**: year, month and (start, current, end) day of the month
//! - **Planner**: validated activities of the month grouped by kind
//! - **Non-workdays**: weekend days merged with holiday-flagged days
//! - **Timeline**: one record per day with week and workday counters
//! - **Summary**: days, weeks and workdays progress
//!
//! ## Key Components
//!
//! - [`MonthEngine`]: owns the frame and the derived [`MonthSnapshot`]
//! - [`MonthlyConfig`]: TOML configuration for CLI defaults
//! - [`CoreError`]: configuration and validation failures

pub mod activity;
pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod labels;
pub mod nonworkdays;
pub mod planner;
pub mod summary;
pub mod timeline;
pub mod weekend;

pub use activity::{parse_datebook, validate_datebook, Activity, ActivityKind, RawActivity};
pub use config::MonthlyConfig;
pub use engine::{EngineOptions, EngineView, MonthEngine, MonthEngineBuilder, MonthSnapshot};
pub use error::{ConfigError, CoreError, ItemFault, Result, ValidationError};
pub use frame::MonthFrame;
pub use labels::Locale;
pub use nonworkdays::NonWorkdaySet;
pub use planner::Planner;
pub use summary::{ProgressStat, Summary, SummaryDates};
pub use timeline::{Classification, DayRecord, Scheduled};
pub use weekend::{WeekendConfig, WeekendSet};
