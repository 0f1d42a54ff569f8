//! `cfchunk` global configuration options.
//!
//! The global configuration supplies the defaults of a [`ChunkShapeCalculator`](crate::ChunkShapeCalculator)
//! created with [`ChunkShapeCalculator::new`](crate::ChunkShapeCalculator::new).
//! It can be modified with [`global_config_mut`]:
//! ```
//! cfchunk::config::global_config_mut().set_chunk_volume(8e6);
//! # cfchunk::config::global_config_mut().set_chunk_volume(cfchunk::config::DEFAULT_CHUNK_VOLUME);
//! ```

use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::ChunkShapeOptions;

/// The default target chunk volume in bytes (4 MB of uncompressed data).
pub const DEFAULT_CHUNK_VOLUME: f64 = 4e6;

/// Global configuration options for the `cfchunk` crate.
///
/// Retrieve the global [`Config`] with [`global_config`] and modify it with [`global_config_mut`].
///
/// ## Chunk Shape Options
/// > default: [`ChunkShapeOptions::default()`] (word size `4`, scale tolerance `0.8`)
///
/// ## Chunk Volume
/// > default: [`DEFAULT_CHUNK_VOLUME`] (`4e6` bytes)
///
/// The target chunk volume used by
/// [`ChunkShapeCalculator::chunk_shape_default_volume`](crate::ChunkShapeCalculator::chunk_shape_default_volume).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    chunk_shape_options: ChunkShapeOptions,
    chunk_volume: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_shape_options: ChunkShapeOptions::default(),
            chunk_volume: DEFAULT_CHUNK_VOLUME,
        }
    }
}

impl Config {
    /// Get the [chunk shape options](#chunk-shape-options) configuration.
    #[must_use]
    pub fn chunk_shape_options(&self) -> ChunkShapeOptions {
        self.chunk_shape_options
    }

    /// Set the [chunk shape options](#chunk-shape-options) configuration.
    pub fn set_chunk_shape_options(&mut self, chunk_shape_options: ChunkShapeOptions) -> &mut Self {
        self.chunk_shape_options = chunk_shape_options;
        self
    }

    /// Get a mutable reference to the [chunk shape options](#chunk-shape-options) configuration.
    pub fn chunk_shape_options_mut(&mut self) -> &mut ChunkShapeOptions {
        &mut self.chunk_shape_options
    }

    /// Get the [chunk volume](#chunk-volume) configuration.
    #[must_use]
    pub fn chunk_volume(&self) -> f64 {
        self.chunk_volume
    }

    /// Set the [chunk volume](#chunk-volume) configuration.
    pub fn set_chunk_volume(&mut self, chunk_volume: f64) -> &mut Self {
        self.chunk_volume = chunk_volume;
        self
    }
}

static CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::default()));

/// Returns a reference to the global `cfchunk` configuration.
#[must_use]
pub fn global_config() -> RwLockReadGuard<'static, Config> {
    CONFIG.read().unwrap_or_else(PoisonError::into_inner)
}

/// Returns a mutable reference to the global `cfchunk` configuration.
#[must_use]
pub fn global_config_mut() -> RwLockWriteGuard<'static, Config> {
    CONFIG.write().unwrap_or_else(PoisonError::into_inner)
}
