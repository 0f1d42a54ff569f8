use std::num::NonZeroU64;

/// An array shape.
pub type ArrayShape = Vec<u64>;

/// A chunk shape. Dimensions must be non-zero.
pub type ChunkShape = Vec<NonZeroU64>;

/// A trait for chunk shapes.
pub trait ChunkShapeTraits: AsRef<[NonZeroU64]> {
    /// Convert a chunk shape to an array shape.
    #[must_use]
    fn to_array_shape(&self) -> ArrayShape {
        self.as_ref().iter().map(|i| i.get()).collect()
    }

    /// Return the number of elements as a u64.
    ///
    /// Equal to the product of the components of its shape.
    /// Saturates at [`u64::MAX`].
    #[must_use]
    fn num_elements_u64(&self) -> u64 {
        self.as_ref()
            .iter()
            .copied()
            .map(NonZeroU64::get)
            .fold(1u64, u64::saturating_mul)
    }

    /// Return the number of bytes of a chunk with elements of `word_size` bytes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    fn num_bytes(&self, word_size: usize) -> f64 {
        self.num_elements_u64() as f64 * word_size as f64
    }

    /// Returns true if the chunk shape has the dimensionality of `array_shape` and every chunk length divides the
    /// corresponding array extent.
    #[must_use]
    fn divides(&self, array_shape: &[u64]) -> bool {
        self.as_ref().len() == array_shape.len()
            && std::iter::zip(self.as_ref(), array_shape).all(|(c, a)| a % c.get() == 0)
    }
}

impl<T> ChunkShapeTraits for T where T: AsRef<[NonZeroU64]> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_shape(shape: &[u64]) -> ChunkShape {
        shape.iter().map(|&i| NonZeroU64::new(i).unwrap()).collect()
    }

    #[test]
    fn chunk_shape_elements_bytes() {
        let chunk_shape = chunk_shape(&[64, 64, 64]);
        assert_eq!(chunk_shape.to_array_shape(), vec![64, 64, 64]);
        assert_eq!(chunk_shape.num_elements_u64(), 262_144);
        assert_eq!(chunk_shape.num_bytes(4), 1_048_576.0);
    }

    #[test]
    fn chunk_shape_divides() {
        let chunk_shape = chunk_shape(&[64, 32]);
        assert!(chunk_shape.divides(&[512, 96]));
        assert!(!chunk_shape.divides(&[512, 100]));
        assert!(!chunk_shape.divides(&[512]));
    }
}
