//! Caller-owned animation state.

use crate::config::SpringConfig;
use crate::error::Result;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::stepper::{self, Advance};

/// The state of one animated scalar.
///
/// The caller owns one `AnimatedValue` per animated quantity, reads
/// `cur_pos` for rendering and may move `to_pos` between calls to follow a
/// moving target. The stepper only borrows it for the duration of a call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimatedValue<F: Float = f64> {
    /// Current simulated position.
    pub cur_pos: F,
    /// Origin of the current trip. Picks the default precision and the
    /// growth direction used for bounce detection.
    pub from_pos: F,
    /// Live target.
    pub to_pos: F,
    /// Velocity carried between calls, in position units per millisecond.
    pub last_vel: Option<F>,
}

impl<F: Float> AnimatedValue<F> {
    /// A value resting at `from_pos` that will travel to `to_pos`.
    pub fn new(from_pos: F, to_pos: F) -> Self {
        AnimatedValue {
            cur_pos: from_pos,
            from_pos,
            to_pos,
            last_vel: None,
        }
    }

    /// A value at rest on `position` with nowhere to go.
    pub fn at_rest(position: F) -> Self {
        Self::new(position, position)
    }

    /// Start the simulation somewhere other than `from_pos`.
    pub fn with_current(mut self, cur_pos: F) -> Self {
        self.cur_pos = cur_pos;
        self
    }

    /// Move only the target. Origin and velocity are kept.
    pub fn set_target(&mut self, to_pos: F) {
        self.to_pos = to_pos;
    }

    /// Begin a new trip from the current position, keeping momentum.
    pub fn retarget(&mut self, to_pos: F) {
        self.from_pos = self.cur_pos;
        self.to_pos = to_pos;
    }

    pub fn reset(&mut self, position: F) {
        *self = Self::at_rest(position);
    }

    pub fn snap_to_target(&mut self) {
        self.cur_pos = self.to_pos;
        self.last_vel = Some(F::zero());
    }

    pub fn distance_to_target(&self) -> F {
        (self.to_pos - self.cur_pos).abs()
    }

    /// Last known velocity, zero before the first step.
    pub fn velocity(&self) -> F {
        self.last_vel.unwrap_or_else(F::zero)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.cur_pos.is_finite()
            && self.from_pos.is_finite()
            && self.to_pos.is_finite()
            && self.last_vel.map_or(true, Float::is_finite)
    }

    /// Advance in place by `dt_secs`. Returns `true` once settled.
    pub fn step(&mut self, dt_secs: F, config: &SpringConfig<F>) -> Result<bool> {
        stepper::step(dt_secs, self, config)
    }

    /// Advance in place, reporting progress to `observer`.
    pub fn step_observed<O: StepObserver>(
        &mut self,
        dt_secs: F,
        config: &SpringConfig<F>,
        observer: &mut O,
    ) -> Result<bool> {
        stepper::step_observed(dt_secs, self, config, observer)
    }

    /// The state this value would have after `dt_secs`, leaving `self` alone.
    pub fn advanced(&self, dt_secs: F, config: &SpringConfig<F>) -> Result<Advance<F>> {
        stepper::advance(dt_secs, *self, config)
    }
}

/// A 2-D point animated as two independent axes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimatedPoint<F: Float = f64> {
    pub x: AnimatedValue<F>,
    pub y: AnimatedValue<F>,
}

impl<F: Float> AnimatedPoint<F> {
    pub fn new(from: (F, F), to: (F, F)) -> Self {
        AnimatedPoint {
            x: AnimatedValue::new(from.0, to.0),
            y: AnimatedValue::new(from.1, to.1),
        }
    }

    pub fn at_rest(position: (F, F)) -> Self {
        Self::new(position, position)
    }

    pub fn position(&self) -> (F, F) {
        (self.x.cur_pos, self.y.cur_pos)
    }

    pub fn target(&self) -> (F, F) {
        (self.x.to_pos, self.y.to_pos)
    }

    pub fn set_target(&mut self, to: (F, F)) {
        self.x.set_target(to.0);
        self.y.set_target(to.1);
    }

    pub fn retarget(&mut self, to: (F, F)) {
        self.x.retarget(to.0);
        self.y.retarget(to.1);
    }

    /// Step both axes. Settled only when both axes are.
    ///
    /// Both axes are integrated before either is written back, so an error
    /// on one axis leaves the whole point unchanged.
    pub fn step(&mut self, dt_secs: F, config: &SpringConfig<F>) -> Result<bool> {
        let x = stepper::advance(dt_secs, self.x, config)?;
        let y = stepper::advance(dt_secs, self.y, config)?;
        self.x = x.value;
        self.y = y.value;
        Ok(x.settled && y.settled)
    }
}
