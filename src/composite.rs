//! A body made of particles and the constraints that bind them.

use crate::constraint::{Constraint, PinConstraint};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Particles and constraints forming one logical body.
///
/// Constraints hold indices into `particles`. Constraint order is the
/// relaxation order within one solver pass.
///
/// Indices are local to this composite, so a constraint cannot link
/// particles of two different composites. Build such bodies as one
/// composite instead. Hosts may edit `particles` and `constraints`
/// directly; a constraint left pointing past the end of `particles` is
/// skipped by [`relax`](Self::relax) until it is fixed or removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Composite<F: Float> {
    pub particles: AllocVec<Particle<F>>,
    pub constraints: AllocVec<Constraint<F>>,
}

impl<F: Float> Composite<F> {
    pub fn new() -> Self {
        Composite {
            particles: AllocVec::new(),
            constraints: AllocVec::new(),
        }
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Append a constraint after checking that every particle it references
    /// exists. Returns the constraint's index.
    pub fn add_constraint(&mut self, constraint: impl Into<Constraint<F>>) -> Result<usize, PhysicsError> {
        let constraint = constraint.into();
        let count = self.particles.len();
        if let Some(&index) = constraint.particles().as_slice().iter().find(|&&i| i >= count) {
            return Err(PhysicsError::ParticleOutOfBounds { index, count });
        }

        if let Some(stiffness) = constraint.stiffness() {
            if stiffness < F::zero() || stiffness > F::one() {
                log::warn!("constraint stiffness {:?} outside [0, 1]; relaxation may overshoot or stall", stiffness);
            }
        }

        let idx = self.constraints.len();
        self.constraints.push(constraint);
        Ok(idx)
    }

    /// Pin `particles[index]` at `pos`, or at its current position. Returns
    /// the new pin's constraint index.
    pub fn pin(&mut self, index: usize, pos: Option<Vec2<F>>) -> Result<usize, PhysicsError> {
        let particle = self.particles.get(index).ok_or(PhysicsError::ParticleOutOfBounds {
            index,
            count: self.particles.len(),
        })?;
        let pos = pos.unwrap_or(particle.pos);
        let idx = self.constraints.len();
        self.constraints.push(Constraint::Pin(PinConstraint::new(index, pos)));
        Ok(idx)
    }

    /// Index of the first pin holding `particles[index]`.
    pub fn pin_for(&self, index: usize) -> Option<usize> {
        self.constraints
            .iter()
            .position(|c| matches!(c, Constraint::Pin(p) if p.particle == index))
    }

    /// Remove a constraint, keeping the order of the rest.
    pub fn remove_constraint(&mut self, index: usize) -> Option<Constraint<F>> {
        (index < self.constraints.len()).then(|| self.constraints.remove(index))
    }

    /// One relaxation pass over every constraint, in list order.
    pub fn relax(&mut self, step_coef: F) {
        for constraint in self.constraints.iter() {
            constraint.relax(&mut self.particles, step_coef);
        }
    }

    /// Rotate the whole body about `center`.
    pub fn rotate(&mut self, center: Vec2<F>, angle: F) {
        for p in self.particles.iter_mut() {
            p.rotate_around(center, angle);
        }
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn particle(&self, index: usize) -> Option<&Particle<F>> { self.particles.get(index) }
    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle<F>> { self.particles.get_mut(index) }
    pub fn constraint(&self, index: usize) -> Option<&Constraint<F>> { self.constraints.get(index) }
    pub fn constraint_mut(&mut self, index: usize) -> Option<&mut Constraint<F>> { self.constraints.get_mut(index) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::DistanceConstraint;

    fn two_points() -> Composite<f32> {
        let mut c = Composite::new();
        c.add_particle(Particle::new(Vec2::new(1.0, 2.0)));
        c.add_particle(Particle::new(Vec2::new(4.0, 6.0)));
        c
    }

    #[test]
    fn pin_uses_current_position_by_default() {
        let mut c = two_points();
        let idx = c.pin(1, None).unwrap();
        match c.constraint(idx) {
            Some(Constraint::Pin(p)) => assert_eq!(p.pos, Vec2::new(4.0, 6.0)),
            other => panic!("expected a pin, got {:?}", other),
        }
        assert_eq!(c.pin_for(1), Some(idx));
        assert_eq!(c.pin_for(0), None);
    }

    #[test]
    fn pin_out_of_range() {
        let mut c = two_points();
        assert_eq!(
            c.pin(2, None),
            Err(PhysicsError::ParticleOutOfBounds { index: 2, count: 2 })
        );
        assert_eq!(c.constraint_count(), 0);
    }

    #[test]
    fn add_constraint_validates_indices() {
        let mut c = two_points();
        assert_eq!(c.add_constraint(DistanceConstraint::new(0, 1, 5.0, 1.0)), Ok(0));
        assert_eq!(
            c.add_constraint(DistanceConstraint::new(0, 7, 5.0, 1.0)),
            Err(PhysicsError::ParticleOutOfBounds { index: 7, count: 2 })
        );
        assert_eq!(c.constraint_count(), 1);
    }

    #[test]
    fn remove_constraint_preserves_order() {
        let mut c = two_points();
        c.add_constraint(DistanceConstraint::new(0, 1, 1.0, 1.0)).unwrap();
        c.pin(0, None).unwrap();
        c.pin(1, None).unwrap();
        assert!(c.remove_constraint(0).is_some());
        assert_eq!(c.pin_for(0), Some(0));
        assert_eq!(c.pin_for(1), Some(1));
        assert!(c.remove_constraint(5).is_none());
    }
}
