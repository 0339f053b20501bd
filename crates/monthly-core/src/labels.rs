//! Display labels for presentation layers.
//!
//! Pure lookups from ordinals and codes to names; the engine itself never
//! uses them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::timeline::Classification;

/// Label language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(format!("unsupported locale '{other}' (expected en or es)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::En => "en",
            Locale::Es => "es",
        })
    }
}

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAYS_ES: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Weekday name for an ordinal (0 = Sunday).
pub fn weekday_name(ordinal: u8, locale: Locale) -> Option<&'static str> {
    let table = match locale {
        Locale::En => &WEEKDAYS_EN,
        Locale::Es => &WEEKDAYS_ES,
    };
    table.get(ordinal as usize).copied()
}

/// Month name for a 0-based month index.
pub fn month_name(month_index: u32, locale: Locale) -> Option<&'static str> {
    let table = match locale {
        Locale::En => &MONTHS_EN,
        Locale::Es => &MONTHS_ES,
    };
    table.get(month_index as usize).copied()
}

pub fn classification_name(classification: Classification, locale: Locale) -> &'static str {
    match (classification, locale) {
        (Classification::Elapsed, Locale::En) => "Elapsed",
        (Classification::Current, Locale::En) => "Current",
        (Classification::Remaining, Locale::En) => "Remaining",
        (Classification::Elapsed, Locale::Es) => "Transcurrido",
        (Classification::Current, Locale::Es) => "Actual",
        (Classification::Remaining, Locale::Es) => "Restante",
    }
}

/// Human description of a weekend integer code, e.g. `"Saturday, Sunday"`.
pub fn weekend_code_name(code: u8) -> Option<&'static str> {
    const NAMES: [&str; 15] = [
        "Saturday, Sunday",
        "Sunday, Monday",
        "Monday, Tuesday",
        "Tuesday, Wednesday",
        "Wednesday, Thursday",
        "Thursday, Friday",
        "Friday, Saturday",
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    NAMES.get(code as usize).copied()
}
