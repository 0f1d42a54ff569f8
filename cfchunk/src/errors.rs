use thiserror::Error;

pub use cfchunk_time::InsufficientTimeSamplesError;

/// A chunk shape computation error.
#[derive(Clone, Debug, Error)]
pub enum ChunkShapeError {
    /// An invalid argument.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
    /// The field has no identifiable time axis or time coordinate.
    #[error("missing time coordinate: the field has no identifiable time axis")]
    MissingTimeAxis,
    /// The time coordinate has too few values to determine its sampling interval.
    #[error(transparent)]
    InsufficientTimeSamples(#[from] InsufficientTimeSamplesError),
}

/// An invalid argument to a chunk shape computation.
#[derive(Clone, Debug, Error)]
pub enum InvalidArgumentError {
    /// The array shape has no dimensions.
    #[error("array shape must have at least one dimension")]
    EmptyShape,
    /// An array extent is zero.
    #[error("array extent of axis {0} is zero")]
    ZeroExtent(usize),
    /// The chunk volume is not a positive finite number.
    #[error("chunk volume {0} must be positive and finite")]
    InvalidVolume(f64),
    /// The word size is zero.
    #[error("word size must be non-zero")]
    ZeroWordSize,
    /// The scale tolerance is not in the interval (0, 1].
    #[error("scale tolerance {0} must be in the interval (0, 1]")]
    InvalidScaleTolerance(f64),
    /// The time axis index is outside of the array dimensionality.
    #[error("time axis {0} is out of bounds for an array of dimensionality {1}")]
    TimeAxisOutOfBounds(usize, usize),
    /// The number of time coordinate values does not match the time axis extent.
    #[error("time coordinate has {0} values but the time axis extent is {1}")]
    TimeCoordinateLengthMismatch(usize, u64),
}
