//! Divisor search for chunk lengths that evenly divide an array extent.
//!
//! Divisors are found by trial division up to the integer square root of the extent, so each search is
//! `O(√extent)`.

use std::num::NonZeroU64;

use num::integer::Roots;

/// Relative slack applied to a candidate chunk length before it is floored.
///
/// Candidates are products of floating point scale factors, so a candidate that is mathematically an integer may
/// fall just below it.
const CANDIDATE_SLACK: f64 = 1e-9;

/// Iterate over the divisors of `number` in pairs `(i, number / i)` for `i` up to `√number`.
fn divisor_pairs(number: u64) -> impl Iterator<Item = u64> {
    (1..=Roots::sqrt(&number))
        .filter(move |i| number % i == 0)
        .flat_map(move |i| [i, number / i])
}

/// Return the divisors of `number` in ascending order.
#[must_use]
pub fn divisors(number: NonZeroU64) -> Vec<NonZeroU64> {
    let mut divisors: Vec<NonZeroU64> = divisor_pairs(number.get())
        .filter_map(NonZeroU64::new)
        .collect();
    divisors.sort_unstable();
    divisors.dedup();
    divisors
}

/// Return the largest divisor of `number` that does not exceed `constraint`.
///
/// The result is always at least 1, and is `number` itself if `constraint >= number`.
#[must_use]
pub fn largest_divisor_at_most(number: NonZeroU64, constraint: u64) -> NonZeroU64 {
    if constraint >= number.get() {
        return number;
    }
    divisor_pairs(number.get())
        .filter(|&divisor| divisor <= constraint)
        .max()
        .and_then(NonZeroU64::new)
        .unwrap_or(NonZeroU64::MIN)
}

/// Return the smallest divisor of `number` strictly greater than `current`, or [`None`] if `current >= number`.
#[must_use]
pub fn next_divisor_above(number: NonZeroU64, current: NonZeroU64) -> Option<NonZeroU64> {
    divisor_pairs(number.get())
        .filter(|&divisor| divisor > current.get())
        .min()
        .and_then(NonZeroU64::new)
}

/// A chunk length snapped to a divisor of an array extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnappedLength {
    length: NonZeroU64,
    correction: f64,
}

impl SnappedLength {
    /// Return the snapped chunk length.
    #[must_use]
    pub const fn length(&self) -> NonZeroU64 {
        self.length
    }

    /// Return the ratio of the candidate length to the snapped length.
    ///
    /// A correction above 1 means volume was lost by snapping down, below 1 means the candidate was raised to the
    /// minimum length of 1.
    #[must_use]
    pub const fn correction(&self) -> f64 {
        self.correction
    }
}

/// Snap a `candidate` chunk length to the largest divisor of `extent` not exceeding it.
///
/// Candidates below 1 snap to 1 and candidates at or above `extent` snap to `extent`.
/// The returned [`SnappedLength`] carries the correction factor `candidate / length`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn snap_to_divisor(extent: NonZeroU64, candidate: f64) -> SnappedLength {
    let constraint = if candidate >= extent.get() as f64 {
        extent.get()
    } else if candidate.is_nan() || candidate < 1.0 {
        1
    } else {
        (candidate * (1.0 + CANDIDATE_SLACK)).floor() as u64
    };
    let length = largest_divisor_at_most(extent, constraint);
    SnappedLength {
        length,
        correction: candidate / length.get() as f64,
    }
}
