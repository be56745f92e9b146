//! Error types for fallible construction of simulation inputs.
//!
//! The numeric core never returns errors; these only guard the constructors
//! that take values from outside (bounds, slider parameters, buffer sizes).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("bounds are inverted or not finite: min={min}, max={max}")]
    InvalidBounds { min: f32, max: f32 },

    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f32),

    #[error("{name} must be within [{min}, {max}], got {value}")]
    ParameterOutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("telemetry capacity must be at least 1")]
    ZeroCapacity,
}

pub type SimResult<T> = Result<T, SimError>;
