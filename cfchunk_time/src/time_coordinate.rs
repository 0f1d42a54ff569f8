//! CF time coordinates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Calendar, Frequency, SamplingInterval, TimeUnits, HOURS_PER_DAY};

/// The spacing between consecutive values of a time coordinate.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct TimeSpacing {
    days: f64,
}

impl TimeSpacing {
    /// Create a time spacing from a number of days.
    #[must_use]
    pub const fn from_days(days: f64) -> Self {
        Self { days }
    }

    /// Create a time spacing from a number of hours.
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_days(hours / HOURS_PER_DAY)
    }

    /// Return the spacing in days.
    #[must_use]
    pub const fn days(&self) -> f64 {
        self.days
    }

    /// Return the spacing in hours.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.days * HOURS_PER_DAY
    }
}

/// The time coordinate has too few values to determine its spacing.
#[derive(Clone, Copy, Debug, Error)]
#[error("time coordinate has {0} value(s), at least 2 are needed to determine its spacing")]
pub struct InsufficientTimeSamplesError(usize);

impl InsufficientTimeSamplesError {
    /// Create a new insufficient time samples error.
    #[must_use]
    pub const fn new(num_values: usize) -> Self {
        Self(num_values)
    }

    /// Return the number of values in the time coordinate.
    #[must_use]
    pub const fn num_values(&self) -> usize {
        self.0
    }
}

/// A CF time coordinate: values, units, and calendar.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub struct TimeCoordinate {
    values: Vec<f64>,
    units: TimeUnits,
    #[serde(default)]
    calendar: Calendar,
}

impl TimeCoordinate {
    /// Create a new time coordinate.
    #[must_use]
    pub fn new(values: Vec<f64>, units: TimeUnits, calendar: Calendar) -> Self {
        Self {
            values,
            units,
            calendar,
        }
    }

    /// Return the coordinate values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Return the coordinate units.
    #[must_use]
    pub const fn units(&self) -> &TimeUnits {
        &self.units
    }

    /// Return the calendar.
    #[must_use]
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Return the number of coordinate values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the coordinate has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return the spacing between the first two coordinate values.
    ///
    /// The spacing is absolute, so descending coordinates have the same spacing as ascending ones.
    ///
    /// # Errors
    /// Returns an [`InsufficientTimeSamplesError`] if the coordinate has fewer than two values.
    pub fn spacing(&self) -> Result<TimeSpacing, InsufficientTimeSamplesError> {
        match self.values.as_slice() {
            [first, second, ..] => Ok(TimeSpacing::from_days(
                self.units.to_days((second - first).abs(), self.calendar),
            )),
            _ => Err(InsufficientTimeSamplesError::new(self.values.len())),
        }
    }

    /// Classify the sampling interval of the coordinate.
    ///
    /// # Errors
    /// Returns an [`InsufficientTimeSamplesError`] if the coordinate has fewer than two values.
    pub fn sampling_interval(&self) -> Result<SamplingInterval, InsufficientTimeSamplesError> {
        Ok(SamplingInterval::from_spacing(self.spacing()?))
    }

    /// Infer the data frequency of the coordinate.
    ///
    /// # Errors
    /// Returns an [`InsufficientTimeSamplesError`] if the coordinate has fewer than two values.
    pub fn frequency(&self) -> Result<Frequency, InsufficientTimeSamplesError> {
        Ok(Frequency::from_spacing(self.spacing()?, self.calendar))
    }
}

#[cfg(test)]
mod tests {
    use crate::TimeUnit;

    use super::*;

    #[test]
    fn time_coordinate_spacing() {
        let coordinate = TimeCoordinate::new(
            vec![0.0, 6.0, 12.0],
            TimeUnits::new(TimeUnit::Hour, "2000-01-01"),
            Calendar::Standard,
        );
        assert_eq!(coordinate.len(), 3);
        assert!((coordinate.spacing().unwrap().hours() - 6.0).abs() < 1e-9);
        assert_eq!(
            coordinate.sampling_interval().unwrap(),
            SamplingInterval::SubDaily { samples_per_day: 4 }
        );
    }

    #[test]
    fn time_coordinate_spacing_descending() {
        let coordinate = TimeCoordinate::new(
            vec![10.0, 9.0],
            TimeUnits::new(TimeUnit::Day, "2000-01-01"),
            Calendar::NoLeap,
        );
        assert_eq!(coordinate.spacing().unwrap().days(), 1.0);
    }

    #[test]
    fn time_coordinate_insufficient_samples() {
        let coordinate = TimeCoordinate::new(
            vec![0.0],
            TimeUnits::new(TimeUnit::Day, "2000-01-01"),
            Calendar::Standard,
        );
        assert_eq!(coordinate.spacing().unwrap_err().num_values(), 1);
        assert!(coordinate.frequency().is_err());
    }

    #[test]
    fn time_coordinate_deserialize() {
        let coordinate: TimeCoordinate = serde_json::from_str(
            r#"{"values": [15.0, 45.0], "units": "days since 1850-01-01", "calendar": "360_day"}"#,
        )
        .unwrap();
        assert_eq!(coordinate.calendar(), Calendar::Day360);
        assert_eq!(coordinate.units().unit(), TimeUnit::Day);
        assert_eq!(
            coordinate.sampling_interval().unwrap(),
            SamplingInterval::Monthly
        );

        let coordinate: TimeCoordinate = serde_json::from_str(
            r#"{"values": [0.0, 1.0], "units": "days since 1850-01-01"}"#,
        )
        .unwrap();
        assert_eq!(coordinate.calendar(), Calendar::Standard);

        let coordinate: TimeCoordinate = serde_json::from_str(
            r#"{"values": [0.0, 1.0], "units": "days since 1850-01-01", "calendar": "NoLeap"}"#,
        )
        .unwrap();
        assert_eq!(coordinate.calendar(), Calendar::NoLeap);
    }

    #[test]
    fn time_coordinate_deserialize_unknown_field() {
        assert!(
            serde_json::from_str::<TimeCoordinate>(
                r#"{"values": [0.0, 1.0], "units": "days since 1850-01-01", "calender": "noleap"}"#,
            )
            .is_err()
        );
    }
}
