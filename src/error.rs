//! Error Types
//!
//! Errors surfaced to callers. Degenerate geometry (circumpolar hour angles)
//! is deliberately *not* represented here: it is resolved by saturating
//! clamps in the hour-angle engine, and out-of-order event sequences are an
//! advisory warning channel, not an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Coordinate falls outside the operational bounding box the calculation
    /// parameters were tuned for. Fatal to the call, never retried.
    #[error(
        "coordinates ({latitude:.4}, {longitude:.4}) are outside the supported region \
         (latitude 20.738 to 26.638, longitude 88.084 to 92.673)"
    )]
    OutOfRegion { latitude: f64, longitude: f64 },

    /// An option was outside its validated range. Rejected before any solar
    /// math runs.
    #[error("{parameter} must be between {min} and {max}, got {value}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Timezone string did not match the ±HH:MM syntax.
    #[error("timezone must be in ±HH:MM format (e.g. +06:00), got '{0}'")]
    InvalidTimezone(String),
}
