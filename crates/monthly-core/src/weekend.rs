//! Weekend pattern decoding.
//!
//! A weekend is configured either with a small integer code (0-14) that
//! selects one of the canonical patterns, or with a 7-character string of
//! `0`/`1` where position 0 is Monday and position 6 is Sunday.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Canonical weekend patterns selectable by integer code.
///
/// The index is the code. Code 15 ("no weekend") is not part of the integer
/// domain; use the string `"0000000"` instead.
pub const WEEKEND_CODES: [&str; 15] = [
    "0000011", // 00 Saturday, Sunday
    "1000001", // 01 Sunday, Monday
    "1100000", // 02 Monday, Tuesday
    "0110000", // 03 Tuesday, Wednesday
    "0011000", // 04 Wednesday, Thursday
    "0001100", // 05 Thursday, Friday
    "0000110", // 06 Friday, Saturday
    "0000001", // 07 Sunday
    "1000000", // 08 Monday
    "0100000", // 09 Tuesday
    "0010000", // 10 Wednesday
    "0001000", // 11 Thursday
    "0000100", // 12 Friday
    "0000010", // 13 Saturday
    "0000001", // 14 Sunday
];

/// Weekday ordinals (0 = Sunday) in pattern position order, Monday first.
pub const PATTERN_ORDINALS: [u8; 7] = [1, 2, 3, 4, 5, 6, 0];

/// Weekend option as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekendConfig {
    /// Canonical pattern code, valid range 0-14
    Code(i64),
    /// Positional `0`/`1` string, Monday first
    Pattern(String),
}

impl Default for WeekendConfig {
    fn default() -> Self {
        WeekendConfig::Code(0)
    }
}

impl From<u8> for WeekendConfig {
    fn from(code: u8) -> Self {
        WeekendConfig::Code(code as i64)
    }
}

impl From<&str> for WeekendConfig {
    fn from(pattern: &str) -> Self {
        WeekendConfig::Pattern(pattern.to_string())
    }
}

impl FromStr for WeekendConfig {
    type Err = std::convert::Infallible;

    /// Only plain decimals without sign or leading zeros become codes.
    /// Anything else, `"0000001"` and `"0001"` included, is kept as a
    /// pattern and validated as one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let plain_decimal = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        Ok(match s.parse::<i64>() {
            Ok(code) if plain_decimal => WeekendConfig::Code(code),
            _ => WeekendConfig::Pattern(s.to_string()),
        })
    }
}

impl fmt::Display for WeekendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekendConfig::Code(code) => write!(f, "{code}"),
            WeekendConfig::Pattern(pattern) => write!(f, "\"{pattern}\""),
        }
    }
}

fn is_binary_pattern(s: &str) -> bool {
    s.len() == 7 && s.bytes().all(|b| b == b'0' || b == b'1')
}

/// Resolved set of non-working weekdays.
///
/// Ordinals follow `0 = Sunday .. 6 = Saturday` and are kept in pattern
/// order (Monday first, Sunday last).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekendSet {
    ordinals: Vec<u8>,
}

impl WeekendSet {
    /// Decode a weekend option.
    pub fn resolve(config: &WeekendConfig) -> Result<Self, ConfigError> {
        match config {
            WeekendConfig::Code(code) => {
                let pattern = usize::try_from(*code)
                    .ok()
                    .and_then(|idx| WEEKEND_CODES.get(idx))
                    .ok_or_else(|| ConfigError::InvalidWeekend(config.to_string()))?;
                Self::from_pattern(pattern)
            }
            WeekendConfig::Pattern(pattern) => Self::from_pattern(pattern),
        }
    }

    /// Decode a positional `0`/`1` string (Monday first).
    pub fn from_pattern(pattern: &str) -> Result<Self, ConfigError> {
        if !is_binary_pattern(pattern) {
            return Err(ConfigError::InvalidWeekend(format!("\"{pattern}\"")));
        }
        let ordinals = pattern
            .bytes()
            .zip(PATTERN_ORDINALS)
            .filter(|(flag, _)| *flag == b'1')
            .map(|(_, ordinal)| ordinal)
            .collect();
        Ok(Self { ordinals })
    }

    /// Weekday ordinals in pattern order.
    pub fn ordinals(&self) -> &[u8] {
        &self.ordinals
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.contains_ordinal(weekday.num_days_from_sunday() as u8)
    }

    pub fn contains_ordinal(&self, ordinal: u8) -> bool {
        self.ordinals.contains(&ordinal)
    }

    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    /// Encode back into the positional string form.
    pub fn pattern(&self) -> String {
        PATTERN_ORDINALS
            .iter()
            .map(|ord| if self.contains_ordinal(*ord) { '1' } else { '0' })
            .collect()
    }
}

impl Default for WeekendSet {
    fn default() -> Self {
        Self { ordinals: vec![6, 0] }
    }
}
