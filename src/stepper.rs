//! Fixed-substep damped spring integration.
//!
//! Elapsed time is covered by `ceil(dt_secs * 1000)` sub-steps of exactly one
//! millisecond each, so the trajectory depends only on the total simulated
//! time and not on how the caller's frames happened to slice it.

use tracing::{debug, trace, warn};

use crate::config::SpringConfig;
use crate::error::{Result, SpringError};
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::value::AnimatedValue;

/// Length of one integration sub-step, in milliseconds.
pub const STEP_MS: f64 = 1.0;
/// Longest `dt_secs` accepted by a single call.
pub const MAX_DT_SECS: f64 = 60.0;

const MS_PER_SEC: f64 = 1000.0;
const TENSION_SCALE: f64 = 1e-6;
const FRICTION_SCALE: f64 = 1e-3;
/// Settle threshold when the trip has zero length.
const COINCIDENT_PRECISION: f64 = 0.005;
const DISTANCE_PRECISION_SCALE: f64 = 1e-3;
const MAX_DERIVED_PRECISION: f64 = 1.0;
const REST_VELOCITY_DIVISOR: f64 = 10.0;

/// Result of a pure [`advance`]: the next state and whether it has settled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Advance<F: Float = f64> {
    pub value: AnimatedValue<F>,
    pub settled: bool,
}

/// Advance `value` in place by `dt_secs` and report whether it has settled.
///
/// On error `value` is left exactly as it was.
pub fn step<F: Float>(
    dt_secs: F,
    value: &mut AnimatedValue<F>,
    config: &SpringConfig<F>,
) -> Result<bool> {
    step_observed(dt_secs, value, config, &mut NoOpStepObserver)
}

/// Like [`step`], reporting sub-steps, bounces and settling to `observer`.
pub fn step_observed<F: Float, O: StepObserver>(
    dt_secs: F,
    value: &mut AnimatedValue<F>,
    config: &SpringConfig<F>,
    observer: &mut O,
) -> Result<bool> {
    let next = integrate(dt_secs, *value, config, observer)?;
    *value = next.value;
    Ok(next.settled)
}

/// Pure state transition: `(state, config, dt) -> (next state, settled)`.
pub fn advance<F: Float>(
    dt_secs: F,
    value: AnimatedValue<F>,
    config: &SpringConfig<F>,
) -> Result<Advance<F>> {
    integrate(dt_secs, value, config, &mut NoOpStepObserver)
}

fn integrate<F: Float, O: StepObserver>(
    dt_secs: F,
    mut value: AnimatedValue<F>,
    config: &SpringConfig<F>,
    observer: &mut O,
) -> Result<Advance<F>> {
    let num_steps = sub_step_count(dt_secs)?;
    if !value.is_finite() {
        return Err(SpringError::NonFiniteState);
    }

    let v0 = config.initial_velocity();
    let precision = resolve_precision(&value, config);
    let rest_velocity = precision / F::from_f64(REST_VELOCITY_DIVISOR);
    let bounce_factor = config.bounce_factor();
    let can_bounce = bounce_factor != F::zero();
    let is_growing = is_growing(&value, v0);

    trace!(
        ?precision,
        ?rest_velocity,
        ?bounce_factor,
        is_growing,
        num_steps,
        "stepping spring"
    );

    let step_ms = F::from_f64(STEP_MS);
    let tension_scale = F::from_f64(TENSION_SCALE);
    let friction_scale = F::from_f64(FRICTION_SCALE);
    let to_pos = value.to_pos;
    let mut cur_pos = value.cur_pos;
    let mut velocity = value.last_vel.unwrap_or(v0);
    let mut finished = false;

    for index in 0..num_steps {
        let is_moving = velocity.abs() > rest_velocity;
        if !is_moving {
            finished = (to_pos - cur_pos).abs() <= precision;
            if finished {
                debug!(sub_step = index, ?cur_pos, "spring settled");
                observer.on_settled(index);
                break;
            }
        }

        // Bouncing is opt-in and distinct from overshoot.
        if can_bounce && (cur_pos == to_pos || (cur_pos > to_pos) == is_growing) {
            velocity = -velocity * bounce_factor;
            cur_pos = to_pos;
            observer.on_bounce(index);
        }

        let spring_force = -config.tension() * tension_scale * (cur_pos - to_pos);
        let damping_force = -config.friction() * friction_scale * velocity;
        // position units / ms^2
        let acceleration = (spring_force + damping_force) / config.mass();

        velocity += acceleration * step_ms;
        if let Some(max_velocity) = config.max_velocity() {
            velocity = velocity.clamp(-max_velocity, max_velocity);
        }
        cur_pos += velocity * step_ms;
        observer.on_sub_step(index);
    }

    if !(cur_pos.is_finite() && velocity.is_finite()) {
        warn!(?cur_pos, ?velocity, "spring integration diverged");
        return Err(SpringError::NumericalBlowUp);
    }

    value.cur_pos = cur_pos;
    value.last_vel = Some(velocity);
    observer.on_step_complete();

    Ok(Advance {
        value,
        settled: finished,
    })
}

fn sub_step_count<F: Float>(dt_secs: F) -> Result<u64> {
    if !(dt_secs.is_finite() && dt_secs >= F::zero()) {
        return Err(SpringError::InvalidTimestep {
            dt_secs: dt_secs.to_f64(),
        });
    }
    if dt_secs > F::from_f64(MAX_DT_SECS) {
        return Err(SpringError::TimestepTooLarge {
            dt_secs: dt_secs.to_f64(),
            max_secs: MAX_DT_SECS,
        });
    }
    Ok((dt_secs * F::from_f64(MS_PER_SEC / STEP_MS)).ceil().to_u64())
}

/// Settle threshold: explicit, or proportional to the trip length within
/// `[0.005, 1]`.
fn resolve_precision<F: Float>(value: &AnimatedValue<F>, config: &SpringConfig<F>) -> F {
    match config.precision() {
        Some(precision) => precision,
        None if value.from_pos == value.to_pos => F::from_f64(COINCIDENT_PRECISION),
        None => F::from_f64(MAX_DERIVED_PRECISION)
            .min((value.to_pos - value.from_pos).abs() * F::from_f64(DISTANCE_PRECISION_SCALE)),
    }
}

/// Reference direction for overshoot detection.
fn is_growing<F: Float>(value: &AnimatedValue<F>, v0: F) -> bool {
    if value.from_pos == value.to_pos {
        v0 > F::zero()
    } else {
        value.from_pos < value.to_pos
    }
}
