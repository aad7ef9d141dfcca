//! Builders for common bodies: a free point, a chain of line segments, a
//! pinned cloth and a spoked tire.
//!
//! Builders only wire particles and constraints together; hand the result
//! to [`World::add_composite`](crate::world::World::add_composite).

use crate::composite::Composite;
use crate::constraint::{Constraint, DistanceConstraint, PinConstraint};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Ring positions ahead that each tire rim particle is braced to.
pub const TIRE_BRACE_OFFSET: usize = 5;

/// Fewest rim particles a tire can have.
pub const TIRE_MIN_SEGMENTS: usize = 3;

/// Distance link at the particles' current separation. Indices come from
/// the builder's own loops.
fn link<F: Float>(particles: &[Particle<F>], a: usize, b: usize, stiffness: F) -> Constraint<F> {
    let distance = particles[a].pos.distance(particles[b].pos);
    Constraint::Distance(DistanceConstraint::new(a, b, distance, stiffness))
}

/// A single free particle.
pub fn point<F: Float>(pos: Vec2<F>) -> Composite<F> {
    let mut composite = Composite::new();
    composite.add_particle(Particle::new(pos));
    composite
}

/// One particle per vertex, each linked to the previous one at its
/// current distance.
pub fn line_segments<F: Float>(vertices: &[Vec2<F>], stiffness: F) -> Composite<F> {
    let particles: AllocVec<_> = vertices.iter().map(|&v| Particle::new(v)).collect();
    let constraints = (1..particles.len())
        .map(|i| link(&particles, i, i - 1, stiffness))
        .collect();
    Composite { particles, constraints }
}

/// A `segments_x` by `segments_y` grid centred on `origin`, spanning
/// `width` by `height`. Each particle links to its left and upper
/// neighbours; first-row particles whose column is a multiple of `pin_mod`
/// are pinned in place. A `pin_mod` of zero pins nothing.
///
/// Particle at (col, row) has index `row * segments_x + col`.
pub fn cloth<F: Float>(
    origin: Vec2<F>,
    width: F,
    height: F,
    segments_x: usize,
    segments_y: usize,
    pin_mod: usize,
    stiffness: F,
) -> Composite<F> {
    let mut particles = AllocVec::with_capacity(segments_x * segments_y);
    let mut constraints = AllocVec::new();

    let x_stride = width / F::from_f64(segments_x.max(1) as f64);
    let y_stride = height / F::from_f64(segments_y.max(1) as f64);
    let left = origin.x - width * F::half() + x_stride * F::half();
    let top = origin.y - height * F::half() + y_stride * F::half();

    for row in 0..segments_y {
        for col in 0..segments_x {
            let x = left + F::from_f64(col as f64) * x_stride;
            let y = top + F::from_f64(row as f64) * y_stride;
            particles.push(Particle::new(Vec2::new(x, y)));

            let idx = row * segments_x + col;
            if col > 0 {
                constraints.push(link(&particles, idx, idx - 1, stiffness));
            }
            if row > 0 {
                constraints.push(link(&particles, idx, idx - segments_x, stiffness));
            }
        }
    }

    if pin_mod > 0 && segments_y > 0 {
        for col in (0..segments_x).step_by(pin_mod) {
            constraints.push(Constraint::Pin(PinConstraint::new(col, particles[col].pos)));
        }
    }

    Composite { particles, constraints }
}

/// `segments` rim particles on a circle around `origin` plus a centre
/// particle (the last index). Each rim particle gets, in order, a tread link
/// to its neighbour, a spoke to the centre and a cross-brace tread link
/// [`TIRE_BRACE_OFFSET`] positions ahead.
pub fn tire<F: Float>(
    origin: Vec2<F>,
    radius: F,
    segments: usize,
    spoke_stiffness: F,
    tread_stiffness: F,
) -> Result<Composite<F>, PhysicsError> {
    if segments < TIRE_MIN_SEGMENTS {
        return Err(PhysicsError::InsufficientSegments { segments, min: TIRE_MIN_SEGMENTS });
    }

    let stride = F::two() * F::pi() / F::from_f64(segments as f64);
    let mut particles = AllocVec::with_capacity(segments + 1);
    for i in 0..segments {
        let theta = F::from_f64(i as f64) * stride;
        let x = origin.x + theta.cos() * radius;
        let y = origin.y + theta.sin() * radius;
        particles.push(Particle::new(Vec2::new(x, y)));
    }
    let center = particles.len();
    particles.push(Particle::new(origin));

    let mut constraints = AllocVec::with_capacity(segments * 3);
    for i in 0..segments {
        let next = (i + 1) % segments;
        let brace = (i + TIRE_BRACE_OFFSET) % segments;
        constraints.push(link(&particles, i, next, tread_stiffness));
        constraints.push(link(&particles, i, center, spoke_stiffness));
        constraints.push(link(&particles, i, brace, tread_stiffness));
    }

    Ok(Composite { particles, constraints })
}
