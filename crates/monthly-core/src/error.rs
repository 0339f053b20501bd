//! Core error types for monthly-core.
//!
//! Every failure the engine can report is synchronous and deterministic:
//! retrying with the same input yields the same error, so callers are
//! expected to fix the input and call again.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for monthly-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
///
/// Covers the engine options (reference date, weekend pattern) as well as
/// the on-disk configuration file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Reference date parts do not form a calendar date
    #[error("current option must be a valid date (got {year}-{month:02}-{day:02})")]
    InvalidReferenceDate { year: i32, month: u32, day: u32 },

    /// Reference date string is not `YYYY-MM-DD`
    #[error("current option must be a date formatted as YYYY-MM-DD (got '{0}')")]
    MalformedReferenceDate(String),

    /// Weekend option is neither an integer code 0-14 nor a binary string
    #[error(
        "weekend option must be an integer between 0 and 14 or a 7-character binary string (got {0})"
    )]
    InvalidWeekend(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors raised while reading a datebook.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The datebook argument is not an array
    #[error("datebook option must be an array")]
    NotASequence,

    /// One of the datebook items is malformed
    #[error("datebook item {index} has wrong format: {fault}")]
    InvalidItem { index: usize, fault: ItemFault },
}

/// The reason a single datebook item was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemFault {
    #[error("item is not an object")]
    NotAnObject,

    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("field '{0}' has the wrong type")]
    WrongType(&'static str),

    #[error("date is not an ISO 8601 calendar date (YYYY-MM-DD)")]
    MalformedDate,

    /// The cutoff is by calendar day, so any time on 1970-01-01 is rejected.
    #[error("date must be after calendar day 1970-01-01")]
    DateBeforeEpoch,

    #[error("title is empty")]
    EmptyTitle,

    #[error("description is empty")]
    EmptyDescription,

    #[error("unknown activity type '{0}' (expected task, event, appointment or meeting)")]
    UnknownType(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_fault_message_names_the_index() {
        let err = ValidationError::InvalidItem {
            index: 3,
            fault: ItemFault::MissingField("title"),
        };
        assert_eq!(
            err.to_string(),
            "datebook item 3 has wrong format: missing field 'title'"
        );
    }

    #[test]
    fn nested_errors_convert_into_core_error() {
        let core: CoreError = ConfigError::InvalidWeekend("20".into()).into();
        assert!(matches!(core, CoreError::Config(ConfigError::InvalidWeekend(_))));

        let core: CoreError = ValidationError::NotASequence.into();
        assert_eq!(
            core.to_string(),
            "Validation error: datebook option must be an array"
        );
    }
}
