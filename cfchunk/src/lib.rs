//! `cfchunk` chooses chunk shapes for chunked storage of multidimensional arrays of CF fields.
//!
//! A chunk shape is computed in two steps:
//! - The *generic chunk sizer* ([`compute_generic_chunk`]) scales every dimension of the array shape towards a
//!   target chunk volume in bytes, snapping each chunk length to a divisor of the array extent so that there are no
//!   partial chunks.
//! - The *temporal chunk refiner* ([`compute_optimal_chunk`]) aligns the chunk length along the time axis of a field
//!   to the sampling interval of its time coordinate: half days of hourly data, whole days of sub-daily data, multiples
//!   of ten days of daily data, and whole years of monthly data.
//!
//! A [`ChunkShapeCalculator`] combines both steps with [`ChunkShapeOptions`] from the [global configuration](config)
//! and optional [`diagnostics`].
//!
//! ## Getting Started
//! ```
//! # use std::num::NonZeroU64;
//! use cfchunk::{ChunkShapeCalculator, Field};
//! use cfchunk::time::{Calendar, TimeCoordinate, TimeUnit, TimeUnits};
//!
//! // Two days of hourly data on a 100 point grid
//! let time = TimeCoordinate::new(
//!     (0..48).map(f64::from).collect(),
//!     TimeUnits::new(TimeUnit::Hour, "2000-01-01 00:00:00"),
//!     Calendar::Standard,
//! );
//! let field = Field::new(vec![48, 100]).with_time_axis(0, time);
//!
//! // The generic chunk shape is [8, 25], the time axis is aligned to half days
//! let chunk_shape = cfchunk::compute_optimal_chunk(&field, 800.0, 4)?;
//! assert_eq!(chunk_shape, [12, 25].map(|i| NonZeroU64::new(i).unwrap()));
//!
//! // The same with the calculator, which also handles fields without a time axis
//! let calculator = ChunkShapeCalculator::default();
//! assert_eq!(calculator.chunk_shape(&field, 800.0)?, chunk_shape);
//! # Ok::<(), cfchunk::ChunkShapeError>(())
//! ```
//!
//! ## Logging
//! `cfchunk` reports chunk shape decisions to a [`ChunkShapeDiagnostics`](diagnostics::ChunkShapeDiagnostics)
//! implementation.
//! [`LogDiagnostics`](diagnostics::LogDiagnostics) forwards them to the [`log`] crate.
//! A logging implementation must be enabled to capture logs.
//! See the [`log`] crate documentation for more details.
//!
//! ## Licence
//! `cfchunk` is licensed under either of
//!  - the Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.
#![warn(clippy::wildcard_enum_match_arm)]

mod calculator;
mod chunk_shape;
pub mod config;
pub mod diagnostics;
pub mod divisor;
mod errors;
mod field;
mod generic;
mod options;
mod temporal;

pub use cfchunk_time as time;

pub use calculator::ChunkShapeCalculator;
pub use chunk_shape::{ArrayShape, ChunkShape, ChunkShapeTraits};
pub use errors::{ChunkShapeError, InsufficientTimeSamplesError, InvalidArgumentError};
pub use field::{Field, FieldTimeAxis, FieldTraits, TimeAxisDescriptor};
pub use generic::compute_generic_chunk;
pub use options::{ChunkShapeOptions, DEFAULT_SCALE_TOLERANCE, DEFAULT_WORD_SIZE};
pub use temporal::{compute_optimal_chunk, refine_time_chunk};

use diagnostics::{ChunkShapeDiagnostics, NoDiagnostics};
