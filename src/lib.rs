//! Deterministic spring animation for values chasing moving targets.
//!
//! `tickspring` advances a scalar toward a target by simulating a damped
//! spring in fixed one-millisecond sub-steps. Callers own the state, feed in
//! elapsed wall time once per frame, and read the position back. Designed for
//! camera follow, pan/tilt smoothing and UI motion.
//!
//! # Features
//!
//! - **Fixed sub-steps**: Identical trajectories regardless of frame pacing
//! - **Moving targets**: Change `to_pos` between calls, momentum is kept
//! - **Presets**: `default`, `gentle`, `wobbly`, `stiff`, `slow`, `molasses`
//! - **Opt-in bounce**: Reflect off the target with a configurable elasticity
//! - **Validated**: Bad configs and timesteps are errors, never NaN positions
//! - **Observable**: Monitor sub-steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use tickspring::{AnimatedValue, SpringConfig};
//!
//! let config: SpringConfig = SpringConfig::gentle();
//! let mut pan = AnimatedValue::new(200.0, 640.0);
//! let mut frames = 0;
//! while !pan.step(0.016, &config).unwrap() {
//!     frames += 1;
//! }
//! assert!((pan.cur_pos - 640.0).abs() <= 0.44);
//! assert!(frames > 10);
//! ```

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod float;
pub mod observer;
pub mod stepper;
pub mod value;

// Re-export primary API
pub use config::{Preset, SpringConfig, SpringConfigBuilder};
pub use error::{Result, SpringError};
pub use float::Float;
pub use observer::{NoOpStepObserver, StepObserver};
pub use stepper::{advance, step, step_observed, Advance, MAX_DT_SECS, STEP_MS};
pub use value::{AnimatedPoint, AnimatedValue};
