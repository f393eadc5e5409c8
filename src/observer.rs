//! Step observer trait for monitoring spring integration.

/// Trait for observing a single stepper call.
///
/// Implement this to count sub-steps, log bounces or profile. All methods
/// have default no-op implementations.
///
/// Sub-step, bounce and settle events are reported as integration runs. If
/// the call then fails with [`SpringError::NumericalBlowUp`] those events
/// describe a state that was discarded, and `on_step_complete` is not
/// called. Treat `on_step_complete` as the commit point.
///
/// [`SpringError::NumericalBlowUp`]: crate::SpringError::NumericalBlowUp
pub trait StepObserver {
    /// Called after each 1 ms sub-step has been integrated.
    fn on_sub_step(&mut self, _index: u64) {}

    /// Called when the value hit or crossed its target and was reflected.
    fn on_bounce(&mut self, _index: u64) {}

    /// Called when the settle check passes, before any remaining sub-steps
    /// are skipped.
    fn on_settled(&mut self, _index: u64) {}

    /// Called once per call when integration finished without error.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
