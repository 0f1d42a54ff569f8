//! Data frequency labels, e.g. `1h`, `1d`, `1m`, `fx`.

use derive_more::Display;

use crate::{Calendar, TimeSpacing, HOURS_PER_DAY};

/// The data frequency of a field, as used in data reference syntax file names.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Display)]
pub enum Frequency {
    /// Every `n` minutes.
    #[display("{_0}min")]
    Minutes(u32),
    /// Every `n` hours.
    #[display("{_0}h")]
    Hours(u32),
    /// Every `n` days.
    #[display("{_0}d")]
    Days(u32),
    /// Every `n` months.
    #[display("{_0}m")]
    Months(u32),
    /// Every `n` years.
    #[display("{_0}y")]
    Years(u32),
    /// Fixed (time invariant) data.
    #[display("fx")]
    Fixed,
}

impl Frequency {
    /// Infer the frequency from the spacing of a time coordinate.
    ///
    /// - shorter than an hour: whole minutes
    /// - shorter than a day: whole hours
    /// - shorter than 28 days: whole days
    /// - 28 to 31 days: one month
    /// - 89 to 93 days: three months (seasonal)
    /// - 359 to 367 days: one year
    /// - otherwise whole years of 360 days (`360_day` calendar) or 365.25 days, or whole days if that is less
    ///   than a year
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_spacing(spacing: TimeSpacing, calendar: Calendar) -> Self {
        let days = spacing.days();
        let minutes = days * HOURS_PER_DAY * 60.0;
        let whole = |value: f64| value.round().clamp(0.0, f64::from(u32::MAX)) as u32;
        if minutes.round() < 60.0 {
            Self::Minutes(whole(minutes))
        } else if minutes.round() < HOURS_PER_DAY * 60.0 {
            Self::Hours(whole(minutes / 60.0))
        } else if days < 28.0 {
            Self::Days(whole(days))
        } else if days <= 31.0 {
            Self::Months(1)
        } else if days > 89.0 && days < 93.0 {
            Self::Months(3)
        } else if days > 359.0 && days < 367.0 {
            Self::Years(1)
        } else {
            let days_per_year = if calendar == Calendar::Day360 {
                360.0
            } else {
                365.25
            };
            match whole(days / days_per_year) {
                0 => Self::Days(whole(days)),
                years => Self::Years(years),
            }
        }
    }
}
