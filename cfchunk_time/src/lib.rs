//! CF time coordinate metadata for the `cfchunk` crate.
//!
//! This crate interprets the time coordinate of a CF field: its units (`"<unit> since <reference>"`),
//! its calendar, and the spacing between its values.
//! The spacing is classified into a [`SamplingInterval`], which drives time-aligned chunking, and into a
//! [`Frequency`] label such as `1h`, `1d` or `1m`.
//!
//! ## Licence
//! `cfchunk_time` is licensed under either of
//!  - the Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

#![warn(missing_docs)]

mod calendar;
mod frequency;
mod sampling_interval;
mod time_coordinate;
mod time_unit;
mod time_units;

pub use calendar::{Calendar, UnknownCalendarError};
pub use frequency::Frequency;
pub use sampling_interval::SamplingInterval;
pub use time_coordinate::{InsufficientTimeSamplesError, TimeCoordinate, TimeSpacing};
pub use time_unit::{TimeUnit, UnknownTimeUnitError};
pub use time_units::{TimeUnits, TimeUnitsParseError};

/// The number of hours in a day.
pub const HOURS_PER_DAY: f64 = 24.0;
