use std::sync::Arc;

use crate::{
    ChunkShape, ChunkShapeDiagnostics, ChunkShapeError, ChunkShapeOptions, FieldTraits,
    NoDiagnostics, config::global_config, generic::generic_chunk_shape,
    temporal::optimal_chunk_shape,
};

/// A chunk shape calculator.
///
/// A calculator holds [`ChunkShapeOptions`], a default chunk volume, and the [`ChunkShapeDiagnostics`] that receive
/// a description of every chunk shape decision.
/// It is [`Send`] and [`Sync`] and can be shared between threads.
///
/// ```
/// # use std::sync::Arc;
/// # use cfchunk::{ChunkShapeCalculator, ChunkShapeOptions, Field, diagnostics::LogDiagnostics};
/// let calculator = ChunkShapeCalculator::default()
///     .with_options(ChunkShapeOptions::default().with_word_size(8))
///     .with_diagnostics(Arc::new(LogDiagnostics::default()));
/// let chunk_shape = calculator.chunk_shape(&Field::new(vec![512, 512, 256]), 2_097_152.0)?;
/// assert_eq!(chunk_shape.iter().map(|i| i.get()).collect::<Vec<_>>(), vec![64, 64, 64]);
/// # Ok::<(), cfchunk::ChunkShapeError>(())
/// ```
#[derive(Clone)]
pub struct ChunkShapeCalculator {
    options: ChunkShapeOptions,
    chunk_volume: f64,
    diagnostics: Arc<dyn ChunkShapeDiagnostics>,
}

impl std::fmt::Debug for ChunkShapeCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkShapeCalculator")
            .field("options", &self.options)
            .field("chunk_volume", &self.chunk_volume)
            .finish_non_exhaustive()
    }
}

impl Default for ChunkShapeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkShapeCalculator {
    /// Create a new chunk shape calculator with options and chunk volume from the [global configuration](crate::config)
    /// and no diagnostics.
    #[must_use]
    pub fn new() -> Self {
        let config = global_config();
        Self {
            options: config.chunk_shape_options(),
            chunk_volume: config.chunk_volume(),
            diagnostics: Arc::new(NoDiagnostics),
        }
    }

    /// Set the chunk shape options.
    #[must_use]
    pub fn with_options(mut self, options: ChunkShapeOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the default chunk volume in bytes.
    #[must_use]
    pub fn with_chunk_volume(mut self, chunk_volume: f64) -> Self {
        self.chunk_volume = chunk_volume;
        self
    }

    /// Set the diagnostics.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn ChunkShapeDiagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Return the chunk shape options.
    #[must_use]
    pub fn options(&self) -> &ChunkShapeOptions {
        &self.options
    }

    /// Return the default chunk volume in bytes.
    #[must_use]
    pub fn chunk_volume(&self) -> f64 {
        self.chunk_volume
    }

    /// Compute a chunk shape for an array of `shape` with chunks of approximately `volume` bytes.
    ///
    /// See [`compute_generic_chunk`](crate::compute_generic_chunk).
    ///
    /// # Errors
    /// Returns [`ChunkShapeError::InvalidArgument`] if `shape`, `volume`, or the options are invalid.
    pub fn generic_chunk_shape(
        &self,
        shape: &[u64],
        volume: f64,
    ) -> Result<ChunkShape, ChunkShapeError> {
        generic_chunk_shape(shape, volume, &self.options, self.diagnostics.as_ref())
    }

    /// Compute a chunk shape for a field with a time axis, aligning the time axis chunk length to its sampling
    /// interval.
    ///
    /// See [`compute_optimal_chunk`](crate::compute_optimal_chunk).
    ///
    /// # Errors
    /// - [`ChunkShapeError::InvalidArgument`] if the field shape, `volume`, or the options are invalid, the time axis
    ///   is out of bounds, or the time coordinate length does not match the time axis extent.
    /// - [`ChunkShapeError::MissingTimeAxis`] if the field has no time axis.
    /// - [`ChunkShapeError::InsufficientTimeSamples`] if the time coordinate has fewer than two values.
    pub fn optimal_chunk_shape<F: FieldTraits + ?Sized>(
        &self,
        field: &F,
        volume: f64,
    ) -> Result<ChunkShape, ChunkShapeError> {
        optimal_chunk_shape(field, volume, &self.options, self.diagnostics.as_ref())
    }

    /// Compute a chunk shape for any field.
    ///
    /// Fields with a time axis and at least two time coordinate values get the
    /// [`optimal_chunk_shape`](Self::optimal_chunk_shape), others the [`generic_chunk_shape`](Self::generic_chunk_shape).
    ///
    /// # Errors
    /// Returns a [`ChunkShapeError`] under the conditions of [`optimal_chunk_shape`](Self::optimal_chunk_shape),
    /// except that a field without a time axis, without a time coordinate, or with fewer than two time coordinate
    /// values is not an error.
    pub fn chunk_shape<F: FieldTraits + ?Sized>(
        &self,
        field: &F,
        volume: f64,
    ) -> Result<ChunkShape, ChunkShapeError> {
        let identity = field.identity().unwrap_or("field");
        let chunk_shape = match (field.time_axis(), field.time_coordinate()) {
            (Some(_), Some(coordinate)) if coordinate.len() > 1 => {
                self.optimal_chunk_shape(field, volume)?
            }
            (Some(axis), Some(coordinate)) => {
                self.diagnostics.record(format_args!(
                    "{identity} has {} time coordinate values on axis {axis}, using the generic chunk shape",
                    coordinate.len()
                ));
                self.generic_chunk_shape(field.shape(), volume)?
            }
            (Some(axis), None) => {
                self.diagnostics.record(format_args!(
                    "{identity} has no time coordinate on axis {axis}, using the generic chunk shape"
                ));
                self.generic_chunk_shape(field.shape(), volume)?
            }
            (None, _) => {
                self.diagnostics.record(format_args!(
                    "{identity} has no time axis, using the generic chunk shape"
                ));
                self.generic_chunk_shape(field.shape(), volume)?
            }
        };
        self.diagnostics.record(format_args!(
            "{identity} of shape {:?} has chunk shape {:?}",
            field.shape(),
            chunk_shape
        ));
        Ok(chunk_shape)
    }

    /// Compute a chunk shape for any field with the default [chunk volume](Self::chunk_volume).
    ///
    /// # Errors
    /// See [`chunk_shape`](Self::chunk_shape).
    pub fn chunk_shape_default_volume<F: FieldTraits + ?Sized>(
        &self,
        field: &F,
    ) -> Result<ChunkShape, ChunkShapeError> {
        self.chunk_shape(field, self.chunk_volume)
    }
}
