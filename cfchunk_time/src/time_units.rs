//! CF time coordinate units, e.g. `hours since 1970-01-01 00:00:00`.

use std::{str::FromStr, sync::LazyLock};

use derive_more::Display;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Calendar, TimeUnit, UnknownTimeUnitError};

static TIME_UNITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*([a-z_]+)\s+since\s+(\S.*?)\s*$").unwrap());

/// The units of a CF time coordinate.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[serde(try_from = "String", into = "String")]
#[display("{unit} since {reference}")]
pub struct TimeUnits {
    unit: TimeUnit,
    reference: String,
}

/// A [`TimeUnits`] parse error.
#[derive(Clone, Debug, Error)]
pub enum TimeUnitsParseError {
    /// The units are not of the form `<unit> since <reference>`.
    #[error("time units {0:?} are not of the form \"<unit> since <reference>\"")]
    Malformed(String),
    /// The unit is not a known time unit.
    #[error(transparent)]
    UnknownTimeUnit(#[from] UnknownTimeUnitError),
}

impl TimeUnits {
    /// Create new time units.
    #[must_use]
    pub fn new(unit: TimeUnit, reference: impl Into<String>) -> Self {
        Self {
            unit,
            reference: reference.into(),
        }
    }

    /// Return the time unit.
    #[must_use]
    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Return the reference date/time, e.g. `1970-01-01 00:00:00`.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Convert a duration of `value` units to days for a given `calendar`.
    #[must_use]
    pub fn to_days(&self, value: f64, calendar: Calendar) -> f64 {
        value * self.unit.days(calendar)
    }
}

impl FromStr for TimeUnits {
    type Err = TimeUnitsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = TIME_UNITS_REGEX
            .captures(s)
            .ok_or_else(|| TimeUnitsParseError::Malformed(s.to_string()))?;
        let unit = captures[1].parse::<TimeUnit>()?;
        Ok(Self::new(unit, &captures[2]))
    }
}

impl TryFrom<String> for TimeUnits {
    type Error = TimeUnitsParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeUnits> for String {
    fn from(value: TimeUnits) -> Self {
        value.to_string()
    }
}
