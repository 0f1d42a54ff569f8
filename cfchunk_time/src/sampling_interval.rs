//! Sampling interval classification of a time coordinate.

use std::num::NonZeroU64;

use derive_more::Display;

use crate::{TimeSpacing, HOURS_PER_DAY};

/// The tolerance in hours when comparing a spacing to exactly one hour or one day.
const SPACING_TOLERANCE_HOURS: f64 = 1.0 / 60.0;

/// The shortest monthly spacing in days.
const MONTH_MIN_DAYS: f64 = 28.0;

/// The longest monthly spacing in days.
const MONTH_MAX_DAYS: f64 = 31.0;

/// The sampling interval category of a time coordinate.
///
/// Each category other than [`Other`](SamplingInterval::Other) has a natural chunk length step along the
/// time axis, see [`step`](SamplingInterval::step).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Display)]
pub enum SamplingInterval {
    /// Hourly data, chunked in half days.
    #[display("hourly")]
    Hourly,
    /// Data sampled at intervals longer than an hour but shorter than a day, chunked in whole days.
    #[display("sub-daily ({samples_per_day} per day)")]
    SubDaily {
        /// The number of samples per day.
        samples_per_day: u64,
    },
    /// Daily data, chunked in multiples of ten days.
    #[display("daily")]
    Daily,
    /// Monthly data, chunked in whole years.
    #[display("monthly")]
    Monthly,
    /// Any other sampling interval.
    #[display("other")]
    Other,
}

impl SamplingInterval {
    /// Classify a time coordinate spacing.
    ///
    /// Spacings within a minute of one hour or one day are hourly or daily.
    /// Spacings strictly between those are sub-daily, spacings of 28 to 31 days are monthly.
    /// Everything else, including zero and non-finite spacings, is [`Other`](SamplingInterval::Other).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_spacing(spacing: TimeSpacing) -> Self {
        let hours = spacing.hours();
        if !hours.is_finite() || hours <= 0.0 {
            Self::Other
        } else if (hours - 1.0).abs() <= SPACING_TOLERANCE_HOURS {
            Self::Hourly
        } else if (hours - HOURS_PER_DAY).abs() <= SPACING_TOLERANCE_HOURS {
            Self::Daily
        } else if hours > 1.0 && hours < HOURS_PER_DAY {
            let samples_per_day = (HOURS_PER_DAY / hours).round().max(1.0) as u64;
            Self::SubDaily { samples_per_day }
        } else if (MONTH_MIN_DAYS..=MONTH_MAX_DAYS).contains(&spacing.days()) {
            Self::Monthly
        } else {
            Self::Other
        }
    }

    /// Return the chunk length step along the time axis, or [`None`] if the time axis chunk length should not be
    /// adjusted.
    ///
    /// - hourly: 12 (half a day)
    /// - sub-daily: the number of samples per day
    /// - daily: 10
    /// - monthly: 12 (a year)
    #[must_use]
    pub fn step(&self) -> Option<NonZeroU64> {
        match self {
            Self::Hourly | Self::Monthly => NonZeroU64::new(12),
            Self::SubDaily { samples_per_day } => NonZeroU64::new(*samples_per_day),
            Self::Daily => NonZeroU64::new(10),
            Self::Other => None,
        }
    }
}
