//! The generic chunk sizer.

use std::num::NonZeroU64;

use crate::{
    ChunkShape, ChunkShapeDiagnostics, ChunkShapeError, ChunkShapeOptions, ChunkShapeTraits,
    InvalidArgumentError, NoDiagnostics,
    divisor::{next_divisor_above, snap_to_divisor},
};

/// Compute a chunk shape for an array of `shape` with chunks of approximately `volume` bytes.
///
/// Every chunk length divides the corresponding array extent.
/// If the chunk volume falls below `scale_tol * volume`, trailing chunk lengths are enlarged to their next divisor
/// until it does not, or until the chunk shape is the full array shape.
///
/// ```
/// # use std::num::NonZeroU64;
/// let chunk_shape = cfchunk::compute_generic_chunk(&[512, 512, 256], 1_048_576.0, 4, 0.8)?;
/// assert_eq!(chunk_shape, [64, 64, 64].map(|i| NonZeroU64::new(i).unwrap()));
/// # Ok::<(), cfchunk::ChunkShapeError>(())
/// ```
///
/// # Errors
/// Returns [`ChunkShapeError::InvalidArgument`] if `shape` is empty or has a zero extent, `volume` is not positive
/// and finite, `word_size` is zero, or `scale_tol` is not in (0, 1].
pub fn compute_generic_chunk(
    shape: &[u64],
    volume: f64,
    word_size: usize,
    scale_tol: f64,
) -> Result<ChunkShape, ChunkShapeError> {
    let options = ChunkShapeOptions::default()
        .with_word_size(word_size)
        .with_scale_tolerance(scale_tol);
    generic_chunk_shape(shape, volume, &options, &NoDiagnostics)
}

/// Validate an array shape and convert it to non-zero extents.
pub(crate) fn validate_shape(shape: &[u64]) -> Result<Vec<NonZeroU64>, InvalidArgumentError> {
    if shape.is_empty() {
        return Err(InvalidArgumentError::EmptyShape);
    }
    shape
        .iter()
        .enumerate()
        .map(|(axis, &extent)| NonZeroU64::new(extent).ok_or(InvalidArgumentError::ZeroExtent(axis)))
        .collect()
}

/// Validate a chunk volume.
pub(crate) fn validate_volume(volume: f64) -> Result<(), InvalidArgumentError> {
    if volume.is_finite() && volume > 0.0 {
        Ok(())
    } else {
        Err(InvalidArgumentError::InvalidVolume(volume))
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn generic_chunk_shape(
    shape: &[u64],
    volume: f64,
    options: &ChunkShapeOptions,
    diagnostics: &dyn ChunkShapeDiagnostics,
) -> Result<ChunkShape, ChunkShapeError> {
    let extents = validate_shape(shape)?;
    validate_volume(volume)?;
    options.validate()?;

    let dimensionality = extents.len();
    let target_elements = volume / options.word_size() as f64;
    let num_elements: f64 = extents.iter().map(|extent| extent.get() as f64).product();
    let scale = (target_elements / num_elements).powf(1.0 / dimensionality as f64);
    diagnostics.record(format_args!(
        "target of {target_elements} elements for shape {shape:?} gives an initial scale of {scale:.6}"
    ));

    // Snap each axis in turn, spreading the correction over the remaining axes
    let (chunk_shape, _) = extents.iter().enumerate().fold(
        (ChunkShape::with_capacity(dimensionality), scale),
        |(mut chunk_shape, scale), (axis, &extent)| {
            let candidate = extent.get() as f64 * scale;
            let snapped = snap_to_divisor(extent, candidate);
            diagnostics.record(format_args!(
                "axis {axis}: candidate {candidate:.3} of extent {extent} snapped to {}, correction {:.6}",
                snapped.length(),
                snapped.correction()
            ));
            chunk_shape.push(snapped.length());
            let remaining = dimensionality - axis - 1;
            let scale = if remaining > 0 {
                scale * snapped.correction().powf(1.0 / remaining as f64)
            } else {
                scale
            };
            (chunk_shape, scale)
        },
    );

    Ok(enlarge_to_tolerance(
        &extents,
        chunk_shape,
        volume,
        options,
        diagnostics,
    ))
}

/// Enlarge chunk lengths, last axis first, one divisor at a time until the chunk volume reaches the scale tolerance.
fn enlarge_to_tolerance(
    extents: &[NonZeroU64],
    mut chunk_shape: ChunkShape,
    volume: f64,
    options: &ChunkShapeOptions,
    diagnostics: &dyn ChunkShapeDiagnostics,
) -> ChunkShape {
    let min_volume = options.scale_tolerance() * volume;
    for axis in (0..extents.len()).rev() {
        while chunk_shape.num_bytes(options.word_size()) < min_volume {
            let Some(enlarged) = next_divisor_above(extents[axis], chunk_shape[axis]) else {
                break;
            };
            diagnostics.record(format_args!(
                "axis {axis}: chunk volume {} bytes is below {min_volume} bytes, enlarging chunk length from {} to {enlarged}",
                chunk_shape.num_bytes(options.word_size()),
                chunk_shape[axis]
            ));
            chunk_shape[axis] = enlarged;
        }
    }
    chunk_shape
}
