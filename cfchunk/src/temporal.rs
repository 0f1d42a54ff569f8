//! The temporal chunk refiner.

use std::num::NonZeroU64;

use cfchunk_time::SamplingInterval;

use crate::{
    ChunkShape, ChunkShapeDiagnostics, ChunkShapeError, ChunkShapeOptions, FieldTraits,
    NoDiagnostics, TimeAxisDescriptor, generic::generic_chunk_shape,
};

/// Refine a time axis chunk length to a multiple of the natural step of a sampling interval.
///
/// The refined length is the smallest multiple of the step that is at least `baseline` and divides `extent`.
/// If there is no such multiple, the refined length is `extent`.
/// Intervals without a step ([`SamplingInterval::Other`]) keep `baseline`.
///
/// ```
/// # use std::num::NonZeroU64;
/// # use cfchunk::{refine_time_chunk, time::SamplingInterval};
/// let extent = NonZeroU64::new(100).unwrap();
/// let baseline = NonZeroU64::new(7).unwrap();
/// assert_eq!(refine_time_chunk(extent, baseline, SamplingInterval::Daily).get(), 10);
/// ```
#[must_use]
pub fn refine_time_chunk(
    extent: NonZeroU64,
    baseline: NonZeroU64,
    interval: SamplingInterval,
) -> NonZeroU64 {
    let Some(step) = interval.step() else {
        return baseline;
    };
    let first = baseline.get().div_ceil(step.get()).max(1);
    (first..)
        .map_while(|multiple| {
            multiple
                .checked_mul(step.get())
                .filter(|&length| length <= extent.get())
        })
        .find(|length| extent.get() % length == 0)
        .and_then(NonZeroU64::new)
        .unwrap_or(extent)
}

/// Compute a chunk shape for a field with a time axis.
///
/// The chunk shape of [`compute_generic_chunk`](crate::compute_generic_chunk) is computed with the default scale
/// tolerance, then its time axis chunk length is refined with [`refine_time_chunk`].
/// Other chunk lengths are not rebalanced, so the chunk volume can depart from `volume`.
///
/// # Errors
/// - [`ChunkShapeError::InvalidArgument`] if the field shape, `volume`, or `word_size` are invalid, the time axis is
///   out of bounds, or the time coordinate length does not match the time axis extent.
/// - [`ChunkShapeError::MissingTimeAxis`] if the field has no time axis.
/// - [`ChunkShapeError::InsufficientTimeSamples`] if the time coordinate has fewer than two values.
pub fn compute_optimal_chunk<F: FieldTraits + ?Sized>(
    field: &F,
    volume: f64,
    word_size: usize,
) -> Result<ChunkShape, ChunkShapeError> {
    let options = ChunkShapeOptions::default().with_word_size(word_size);
    optimal_chunk_shape(field, volume, &options, &NoDiagnostics)
}

pub(crate) fn optimal_chunk_shape<F: FieldTraits + ?Sized>(
    field: &F,
    volume: f64,
    options: &ChunkShapeOptions,
    diagnostics: &dyn ChunkShapeDiagnostics,
) -> Result<ChunkShape, ChunkShapeError> {
    let mut chunk_shape = generic_chunk_shape(field.shape(), volume, options, diagnostics)?;
    let time_axis = TimeAxisDescriptor::from_field(field)?;
    let axis = time_axis.axis();
    let interval = time_axis.interval();

    // The extent is non-zero, it was validated by the generic chunk sizer
    let extent = NonZeroU64::new(field.shape()[axis]).unwrap_or(NonZeroU64::MIN);
    let baseline = chunk_shape[axis];
    let refined = refine_time_chunk(extent, baseline, interval);
    if refined == baseline {
        diagnostics.record(format_args!(
            "time axis {axis} ({interval}): chunk length {baseline} kept"
        ));
    } else {
        diagnostics.record(format_args!(
            "time axis {axis} ({interval}): chunk length {baseline} replaced with {refined}"
        ));
    }
    chunk_shape[axis] = refined;
    Ok(chunk_shape)
}
