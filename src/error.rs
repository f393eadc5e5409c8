//! Error types for spring configuration and stepping.

use alloc::string::String;
use thiserror::Error;

/// Errors that can occur while building a spring config or stepping a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpringError {
    /// Tension must be finite and non-negative.
    #[error("tension must be finite and non-negative")]
    InvalidTension,
    /// Friction must be finite and non-negative.
    #[error("friction must be finite and non-negative")]
    InvalidFriction,
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Bounce must be in [0, 1].
    #[error("bounce must be in [0, 1]")]
    InvalidBounce,
    /// Precision must be finite and non-negative.
    #[error("precision must be finite and non-negative")]
    InvalidPrecision,
    /// Initial velocity must be finite.
    #[error("initial velocity must be finite")]
    InvalidVelocity,
    /// Max velocity must be positive and finite.
    #[error("max velocity must be positive and finite")]
    InvalidMaxVelocity,
    /// The name does not match any preset.
    #[error("unknown spring preset `{name}`")]
    UnknownPreset { name: String },
    /// Elapsed time was negative, NaN or infinite.
    #[error("timestep must be finite and non-negative, got {dt_secs}")]
    InvalidTimestep { dt_secs: f64 },
    /// Elapsed time would need more sub-steps than a single call allows.
    #[error("timestep {dt_secs}s exceeds the {max_secs}s limit")]
    TimestepTooLarge { dt_secs: f64, max_secs: f64 },
    /// The animated value already held a non-finite position or velocity.
    #[error("animated value holds a non-finite position or velocity")]
    NonFiniteState,
    /// Integration produced a non-finite position or velocity.
    #[error("spring integration diverged to a non-finite value")]
    NumericalBlowUp,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SpringError>;
