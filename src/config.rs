//! Global simulation parameters.

use crate::float::Float;
use crate::vec::Vec2;

/// World-wide parameters, read at the start of every `advance`.
///
/// # Builder Pattern
/// ```
/// use verlet2d::config::WorldConfig;
/// use verlet2d::vec::Vec2;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_gravity(Vec2::new(0.0, 0.5))
///     .with_friction(0.98)
///     .with_solver_iterations(16);
/// assert_eq!(config.solver_iterations, 16);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldConfig<F: Float> {
    /// Added to every particle's position once per frame. Default: (0, 0.2).
    pub gravity: Vec2<F>,
    /// Velocity retained per frame [0, 1]. Default: 0.99.
    pub friction: F,
    /// Extra velocity factor for particles resting on the floor. Default: 0.8.
    pub ground_friction: F,
    /// Relaxation passes used by `World::step`. Default: 8.
    pub solver_iterations: usize,
    /// Fraction of velocity kept when bouncing off a boundary. Default: 0.2.
    pub restitution: F,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            gravity: Vec2::new(F::zero(), F::from_f64(0.2)),
            friction: F::from_f64(0.99),
            ground_friction: F::from_f64(0.8),
            solver_iterations: 8,
            restitution: F::from_f64(0.2),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_ground_friction(mut self, ground_friction: F) -> Self {
        self.ground_friction = ground_friction;
        self
    }

    /// Set the solver iteration count (at least 1).
    pub fn with_solver_iterations(mut self, iterations: usize) -> Self {
        self.solver_iterations = iterations.max(1);
        self
    }

    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
