//! Time units of a CF time coordinate.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Calendar, HOURS_PER_DAY};

/// A time unit.
///
/// The unit names follow `UDUNITS`, which CF time coordinates use.
/// Months and years are calendar dependent, see [`Calendar`].
#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash, Debug, Display)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Seconds.
    #[display("seconds")]
    Second,
    /// Minutes.
    #[display("minutes")]
    Minute,
    /// Hours.
    #[display("hours")]
    Hour,
    /// Days.
    #[display("days")]
    Day,
    /// Weeks.
    #[display("weeks")]
    Week,
    /// Calendar months.
    #[display("months")]
    Month,
    /// Calendar years.
    #[display("years")]
    Year,
}

/// An unknown time unit error.
#[derive(Clone, Debug, Error)]
#[error("unknown time unit {0:?}")]
pub struct UnknownTimeUnitError(String);

impl UnknownTimeUnitError {
    /// Create a new unknown time unit error.
    #[must_use]
    pub fn new(unit: impl Into<String>) -> Self {
        Self(unit.into())
    }
}

impl TimeUnit {
    /// Return the length of the unit in days for a given `calendar`.
    #[must_use]
    pub fn days(self, calendar: Calendar) -> f64 {
        match self {
            Self::Second => 1.0 / (HOURS_PER_DAY * 3600.0),
            Self::Minute => 1.0 / (HOURS_PER_DAY * 60.0),
            Self::Hour => 1.0 / HOURS_PER_DAY,
            Self::Day => 1.0,
            Self::Week => 7.0,
            Self::Month => calendar.days_per_month(),
            Self::Year => calendar.days_per_year(),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = UnknownTimeUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(Self::Second),
            "min" | "mins" | "minute" | "minutes" => Ok(Self::Minute),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(Self::Hour),
            "d" | "day" | "days" => Ok(Self::Day),
            "week" | "weeks" => Ok(Self::Week),
            "month" | "months" => Ok(Self::Month),
            "yr" | "year" | "years" => Ok(Self::Year),
            _ => Err(UnknownTimeUnitError::new(s)),
        }
    }
}
