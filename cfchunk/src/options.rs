//! Chunk shape options.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::InvalidArgumentError;

/// The default word size in bytes.
pub const DEFAULT_WORD_SIZE: usize = 4;

/// The default scale tolerance.
pub const DEFAULT_SCALE_TOLERANCE: f64 = 0.8;

/// Chunk shape options.
///
/// The default values are:
/// - `word_size`: `4`
/// - `scale_tolerance`: `0.8`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Display)]
#[serde(default, deny_unknown_fields)]
#[display("{}", serde_json::to_string(self).unwrap_or_default())]
pub struct ChunkShapeOptions {
    word_size: usize,
    scale_tolerance: f64,
}

impl Default for ChunkShapeOptions {
    fn default() -> Self {
        Self {
            word_size: DEFAULT_WORD_SIZE,
            scale_tolerance: DEFAULT_SCALE_TOLERANCE,
        }
    }
}

impl ChunkShapeOptions {
    /// Return the word size (bytes per element).
    #[must_use]
    pub fn word_size(&self) -> usize {
        self.word_size
    }

    /// Set the word size (bytes per element).
    pub fn set_word_size(&mut self, word_size: usize) -> &mut Self {
        self.word_size = word_size;
        self
    }

    /// Set the word size (bytes per element).
    #[must_use]
    pub fn with_word_size(mut self, word_size: usize) -> Self {
        self.word_size = word_size;
        self
    }

    /// Return the scale tolerance.
    ///
    /// If the volume of a chunk is less than this fraction of the target volume, the chunk is enlarged.
    #[must_use]
    pub fn scale_tolerance(&self) -> f64 {
        self.scale_tolerance
    }

    /// Set the scale tolerance.
    pub fn set_scale_tolerance(&mut self, scale_tolerance: f64) -> &mut Self {
        self.scale_tolerance = scale_tolerance;
        self
    }

    /// Set the scale tolerance.
    #[must_use]
    pub fn with_scale_tolerance(mut self, scale_tolerance: f64) -> Self {
        self.scale_tolerance = scale_tolerance;
        self
    }

    /// Validate the options.
    ///
    /// # Errors
    /// Returns an [`InvalidArgumentError`] if the word size is zero or the scale tolerance is not in (0, 1].
    pub fn validate(&self) -> Result<(), InvalidArgumentError> {
        if self.word_size == 0 {
            Err(InvalidArgumentError::ZeroWordSize)
        } else if !(self.scale_tolerance > 0.0 && self.scale_tolerance <= 1.0) {
            Err(InvalidArgumentError::InvalidScaleTolerance(
                self.scale_tolerance,
            ))
        } else {
            Ok(())
        }
    }
}
