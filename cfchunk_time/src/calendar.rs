//! CF calendars.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The length of the mean tropical year in days, as defined by `UDUNITS`.
const UDUNITS_YEAR_DAYS: f64 = 365.242_198_781;

/// A CF calendar.
///
/// The calendar determines the length of a calendar month and year when time coordinates are
/// expressed in `months since` or `years since` units.
///
/// Calendars are serialised by name and deserialised with [`FromStr`], so names are case-insensitive and include
/// the `gregorian`, `no_leap`, `365_day`, and `366_day` aliases.
#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash, Debug, Default, Display)]
#[serde(try_from = "String", into = "String")]
pub enum Calendar {
    /// The mixed Gregorian/Julian calendar.
    #[default]
    #[display("standard")]
    Standard,
    /// The Gregorian calendar extended to dates before 1582-10-15.
    #[display("proleptic_gregorian")]
    ProlepticGregorian,
    /// The Julian calendar.
    #[display("julian")]
    Julian,
    /// A calendar without leap years.
    #[display("noleap")]
    NoLeap,
    /// A calendar where every year is a leap year.
    #[display("all_leap")]
    AllLeap,
    /// A calendar of twelve 30 day months.
    #[display("360_day")]
    Day360,
}

/// An unknown calendar error.
#[derive(Clone, Debug, Error)]
#[error("unknown calendar {0:?}")]
pub struct UnknownCalendarError(String);

impl UnknownCalendarError {
    /// Create a new unknown calendar error.
    #[must_use]
    pub fn new(calendar: impl Into<String>) -> Self {
        Self(calendar.into())
    }
}

impl Calendar {
    /// Return the length of a year in days.
    #[must_use]
    pub const fn days_per_year(self) -> f64 {
        match self {
            Self::Standard | Self::ProlepticGregorian => UDUNITS_YEAR_DAYS,
            Self::Julian => 365.25,
            Self::NoLeap => 365.0,
            Self::AllLeap => 366.0,
            Self::Day360 => 360.0,
        }
    }

    /// Return the length of a month in days.
    ///
    /// This is a twelfth of [`days_per_year`](Calendar::days_per_year).
    #[must_use]
    pub fn days_per_month(self) -> f64 {
        self.days_per_year() / 12.0
    }
}

impl FromStr for Calendar {
    type Err = UnknownCalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "gregorian" => Ok(Self::Standard),
            "proleptic_gregorian" => Ok(Self::ProlepticGregorian),
            "julian" => Ok(Self::Julian),
            "noleap" | "no_leap" | "365_day" => Ok(Self::NoLeap),
            "all_leap" | "366_day" => Ok(Self::AllLeap),
            "360_day" => Ok(Self::Day360),
            _ => Err(UnknownCalendarError::new(s)),
        }
    }
}

impl TryFrom<String> for Calendar {
    type Error = UnknownCalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Calendar> for String {
    fn from(value: Calendar) -> Self {
        value.to_string()
    }
}
