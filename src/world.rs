//! The simulation world and its per-frame advance.

use crate::composite::Composite;
use crate::config::WorldConfig;
use crate::constraint::Constraint;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Locates a particle inside a world.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParticleHandle {
    pub composite: usize,
    pub particle: usize,
    /// Constraint index of a pin holding this particle, if any.
    pub pin: Option<usize>,
}

/// Owns every composite and the global parameters.
///
/// Particles live in `[0, width - 1]` horizontally with `y <= height - 1`
/// (the floor). There is no ceiling.
#[derive(Clone, Debug)]
pub struct World<F: Float> {
    pub width: F,
    pub height: F,
    pub config: WorldConfig<F>,
    pub composites: AllocVec<Composite<F>>,
}

impl<F: Float> World<F> {
    pub fn new(width: F, height: F, config: WorldConfig<F>) -> Self {
        log::debug!(
            "world created: {:?}x{:?}, {} solver iterations",
            width,
            height,
            config.solver_iterations
        );
        World { width, height, config, composites: AllocVec::new() }
    }

    pub fn with_defaults(width: F, height: F) -> Self {
        Self::new(width, height, WorldConfig::default())
    }

    /// Take ownership of a composite. Returns its index.
    pub fn add_composite(&mut self, composite: Composite<F>) -> usize {
        let idx = self.composites.len();
        log::debug!(
            "composite {} added: {} particles, {} constraints",
            idx,
            composite.particle_count(),
            composite.constraint_count()
        );
        self.composites.push(composite);
        idx
    }

    /// Remove a composite and its particles. Later composites shift down by one.
    pub fn remove_composite(&mut self, index: usize) -> Option<Composite<F>> {
        if index >= self.composites.len() {
            return None;
        }
        log::debug!("composite {} removed", index);
        Some(self.composites.remove(index))
    }

    /// `advance` with the configured iteration count.
    pub fn step(&mut self) {
        self.advance(self.config.solver_iterations);
    }

    /// Advance one frame with `steps` relaxation passes.
    pub fn advance(&mut self, steps: usize) {
        self.advance_observed(steps, &mut NoOpStepObserver);
    }

    /// Advance one frame: integrate every particle, relax every constraint
    /// `steps` times (at least once), then clamp to the world bounds.
    pub fn advance_observed<O: StepObserver>(&mut self, steps: usize, observer: &mut O) {
        let steps = steps.max(1);
        let config = self.config;
        let floor = self.height - F::one();
        log::trace!("advance: {} composites, {} steps", self.composites.len(), steps);

        for c in self.composites.iter_mut() {
            for p in c.particles.iter_mut() {
                p.integrate(config.gravity, config.friction, config.ground_friction, floor);
            }
        }
        observer.on_integrate();

        // Gauss-Seidel: each constraint sees positions already moved earlier in the pass.
        let step_coef = F::one() / F::from_f64(steps as f64);
        for i in 0..steps {
            for c in self.composites.iter_mut() {
                c.relax(step_coef);
            }
            observer.on_relax_iteration(i);
        }

        let max = Vec2::new(self.width - F::one(), floor);
        let mut clamped = 0;
        for c in self.composites.iter_mut() {
            for p in c.particles.iter_mut() {
                if p.clamp_to_bounds(max, config.restitution) {
                    clamped += 1;
                }
            }
        }
        observer.on_bounds(clamped);

        observer.on_step_complete();
    }

    /// Closest particle to `point` within `radius`. Ties keep the first
    /// particle found in composite order.
    pub fn nearest_particle(&self, point: Vec2<F>, radius: F) -> Option<ParticleHandle> {
        let mut nearest: Option<(usize, usize, F)> = None;
        let max_sq = radius * radius;

        for (ci, c) in self.composites.iter().enumerate() {
            for (pi, p) in c.particles.iter().enumerate() {
                let d = p.pos.distance_sq(point);
                if d > max_sq {
                    continue;
                }
                match nearest {
                    Some((_, _, best)) if d >= best => {}
                    _ => nearest = Some((ci, pi, d)),
                }
            }
        }

        nearest.map(|(composite, particle, _)| ParticleHandle {
            composite,
            particle,
            pin: self.composites[composite].pin_for(particle),
        })
    }

    pub fn particle(&self, handle: ParticleHandle) -> Option<&Particle<F>> {
        self.composites.get(handle.composite)?.particle(handle.particle)
    }

    pub fn particle_mut(&mut self, handle: ParticleHandle) -> Option<&mut Particle<F>> {
        self.composites.get_mut(handle.composite)?.particle_mut(handle.particle)
    }

    /// Move a dragged particle. A pinned particle has its pin target moved
    /// instead, so it stays where it is dropped.
    pub fn drag_to(&mut self, handle: ParticleHandle, pos: Vec2<F>) -> bool {
        let Some(composite) = self.composites.get_mut(handle.composite) else {
            return false;
        };
        if let Some(pin) = handle.pin {
            if let Some(Constraint::Pin(p)) = composite.constraint_mut(pin) {
                if p.particle == handle.particle {
                    p.pos = pos;
                    return true;
                }
            }
        }
        match composite.particle_mut(handle.particle) {
            Some(p) => {
                p.pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.composites.iter().map(|c| c.particle_count()).sum()
    }
}
