//! Fields: arrays with an optional time axis.

use cfchunk_time::{Frequency, SamplingInterval, TimeCoordinate};
use serde::{Deserialize, Serialize};

use crate::{ArrayShape, ChunkShapeError, InvalidArgumentError};

/// The array and time axis properties of a field needed to choose a chunk shape.
pub trait FieldTraits {
    /// The shape of the field data.
    fn shape(&self) -> &[u64];

    /// The index of the time axis in [`shape`](FieldTraits::shape), if the field has one.
    fn time_axis(&self) -> Option<usize>;

    /// The time coordinate along the [`time_axis`](FieldTraits::time_axis), if the field has one.
    fn time_coordinate(&self) -> Option<&TimeCoordinate>;

    /// A name identifying the field in diagnostics.
    fn identity(&self) -> Option<&str> {
        None
    }
}

/// The time axis of a [`Field`].
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub struct FieldTimeAxis {
    /// The index of the time axis in the field shape.
    pub axis: usize,
    /// The time coordinate.
    pub coordinate: TimeCoordinate,
}

/// A field described by its shape, name, and time axis.
///
/// ```
/// # use cfchunk::{Field, FieldTraits};
/// let field: Field = serde_json::from_str(r#"{
///     "name": "air_temperature",
///     "shape": [48, 180, 360],
///     "time": {
///         "axis": 0,
///         "coordinate": {"values": [0.0, 1.0], "units": "hours since 2000-01-01", "calendar": "gregorian"}
///     }
/// }"#)?;
/// assert_eq!(field.shape(), &[48, 180, 360]);
/// assert_eq!(field.time_axis(), Some(0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    shape: ArrayShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<FieldTimeAxis>,
}

impl Field {
    /// Create a new field without a time axis.
    #[must_use]
    pub fn new(shape: ArrayShape) -> Self {
        Self {
            name: None,
            shape,
            time: None,
        }
    }

    /// Set the field name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the time axis and its coordinate.
    #[must_use]
    pub fn with_time_axis(mut self, axis: usize, coordinate: TimeCoordinate) -> Self {
        self.time = Some(FieldTimeAxis { axis, coordinate });
        self
    }

    /// Return the field name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Infer the data frequency of the field.
    ///
    /// Fields without a time axis are [`Frequency::Fixed`].
    ///
    /// # Errors
    /// Returns [`ChunkShapeError::InsufficientTimeSamples`] if the time coordinate has fewer than two values.
    pub fn frequency(&self) -> Result<Frequency, ChunkShapeError> {
        match &self.time {
            Some(time) => Ok(time.coordinate.frequency()?),
            None => Ok(Frequency::Fixed),
        }
    }
}

impl FieldTraits for Field {
    fn shape(&self) -> &[u64] {
        &self.shape
    }

    fn time_axis(&self) -> Option<usize> {
        self.time.as_ref().map(|time| time.axis)
    }

    fn time_coordinate(&self) -> Option<&TimeCoordinate> {
        self.time.as_ref().map(|time| &time.coordinate)
    }

    fn identity(&self) -> Option<&str> {
        self.name()
    }
}

/// The time axis of a field and its sampling interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeAxisDescriptor {
    axis: usize,
    interval: SamplingInterval,
}

impl TimeAxisDescriptor {
    /// Derive the time axis descriptor of a field.
    ///
    /// # Errors
    /// - [`ChunkShapeError::MissingTimeAxis`] if the field has no time axis or no time coordinate.
    /// - [`ChunkShapeError::InsufficientTimeSamples`] if the time coordinate has fewer than two values.
    /// - [`ChunkShapeError::InvalidArgument`] if the time axis is out of bounds or the number of time coordinate
    ///   values does not match the time axis extent.
    pub fn from_field<F: FieldTraits + ?Sized>(field: &F) -> Result<Self, ChunkShapeError> {
        let axis = field.time_axis().ok_or(ChunkShapeError::MissingTimeAxis)?;
        let coordinate = field
            .time_coordinate()
            .ok_or(ChunkShapeError::MissingTimeAxis)?;
        let shape = field.shape();
        let extent = *shape.get(axis).ok_or(
            InvalidArgumentError::TimeAxisOutOfBounds(axis, shape.len()),
        )?;
        let interval = coordinate.sampling_interval()?;
        if coordinate.len() as u64 != extent {
            return Err(
                InvalidArgumentError::TimeCoordinateLengthMismatch(coordinate.len(), extent).into(),
            );
        }
        Ok(Self { axis, interval })
    }

    /// Return the index of the time axis.
    #[must_use]
    pub const fn axis(&self) -> usize {
        self.axis
    }

    /// Return the sampling interval of the time axis.
    #[must_use]
    pub const fn interval(&self) -> SamplingInterval {
        self.interval
    }
}
