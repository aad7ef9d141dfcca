//! Step observer trait for monitoring simulation progress.

/// Trait for observing the phases of `World::advance_observed`.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over every composite.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called after particles are clamped to the world bounds, with the
    /// number of particles that hit a boundary.
    fn on_bounds(&mut self, _clamped: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
