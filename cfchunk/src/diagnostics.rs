//! Diagnostics of chunk shape decisions.
//!
//! A [`ChunkShapeCalculator`](crate::ChunkShapeCalculator) reports how it arrived at a chunk shape (initial scale,
//! divisor snapping, enlargement, time axis overrides) to a [`ChunkShapeDiagnostics`] implementation.
//! Diagnostics never influence the computed chunk shape.

use std::fmt;

/// A receiver of human-readable chunk shape diagnostics.
pub trait ChunkShapeDiagnostics: Send + Sync {
    /// Record a diagnostic message.
    fn record(&self, message: fmt::Arguments<'_>);
}

/// Diagnostics that discard every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl ChunkShapeDiagnostics for NoDiagnostics {
    fn record(&self, _message: fmt::Arguments<'_>) {}
}

/// Diagnostics that forward records to the [`log`] facade.
#[derive(Debug, Clone, Copy)]
pub struct LogDiagnostics {
    level: log::Level,
}

impl Default for LogDiagnostics {
    fn default() -> Self {
        Self::new(log::Level::Debug)
    }
}

impl LogDiagnostics {
    /// Create log diagnostics that log at `level`.
    #[must_use]
    pub const fn new(level: log::Level) -> Self {
        Self { level }
    }

    /// Return the log level.
    #[must_use]
    pub const fn level(&self) -> log::Level {
        self.level
    }
}

impl ChunkShapeDiagnostics for LogDiagnostics {
    fn record(&self, message: fmt::Arguments<'_>) {
        log::log!(self.level, "{message}");
    }
}
