//! Relaxation constraints: distance, pin, angle, collision, min/max distance,
//! min/max angle and plane.
//!
//! Constraints refer to particles by index into their composite's particle
//! list. `relax` moves positions only and never touches `last_pos`. A
//! constraint whose indices no longer fit the particle list (after a host
//! edits `Composite::particles` directly) is skipped rather than relaxed.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::style::{ConstraintStyle, RenderHint, ANGLE_COLOR, LINK_COLOR, PIN_COLOR};
use crate::vec::Vec2;

/// How a two-particle constraint splits its correction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CorrectionMode {
    /// Split by inverse mass; particles with `mass <= 0` do not move.
    #[default]
    MassWeighted,
    /// Split evenly regardless of mass.
    Even,
}

/// A constraint that can be relaxed against a set of particles.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint<F: Float> {
    Distance(DistanceConstraint<F>),
    Pin(PinConstraint<F>),
    Angle(AngleConstraint<F>),
    Collision(CollisionConstraint<F>),
    MinMaxDistance(MinMaxDistanceConstraint<F>),
    MinMaxAngle(MinMaxAngleConstraint<F>),
    Plane(PlaneConstraint<F>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub distance: F,
    pub stiffness: F,
    pub mode: CorrectionMode,
    pub style: Option<ConstraintStyle<F>>,
}

/// Holds a particle at a fixed point, fully rigid.
#[derive(Clone, Debug, PartialEq)]
pub struct PinConstraint<F: Float> {
    pub particle: usize,
    pub pos: Vec2<F>,
    pub style: Option<ConstraintStyle<F>>,
}

/// Keeps the signed angle at `b` between rays to `a` and `c`.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub angle: F,
    pub stiffness: F,
    pub style: Option<ConstraintStyle<F>>,
}

/// Keeps two particles at least `radius(a) + radius(b)` apart.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub stiffness: F,
    pub mode: CorrectionMode,
    pub style: Option<ConstraintStyle<F>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MinMaxDistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub min_distance: F,
    pub max_distance: F,
    pub stiffness: F,
    pub mode: CorrectionMode,
    pub style: Option<ConstraintStyle<F>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MinMaxAngleConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub min_angle: F,
    pub max_angle: F,
    pub stiffness: F,
    pub style: Option<ConstraintStyle<F>>,
}

/// Half-space boundary: keeps a particle on the `normal` side of the line
/// through `origin`.
///
/// Correction is applied directly; `stiffness` is stored for hosts but does
/// not scale the push.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneConstraint<F: Float> {
    pub particle: usize,
    pub origin: Vec2<F>,
    normal: Vec2<F>,
    pub stiffness: F,
    pub style: Option<ConstraintStyle<F>>,
}

impl<F: Float> Constraint<F> {
    /// Move referenced particles toward satisfying the constraint.
    /// `step_coef` is `1 / solver_iterations`.
    pub fn relax(&self, particles: &mut [Particle<F>], step_coef: F) {
        match self {
            Constraint::Distance(c) => c.relax(particles, step_coef),
            Constraint::Pin(c) => c.relax(particles, step_coef),
            Constraint::Angle(c) => c.relax(particles, step_coef),
            Constraint::Collision(c) => c.relax(particles, step_coef),
            Constraint::MinMaxDistance(c) => c.relax(particles, step_coef),
            Constraint::MinMaxAngle(c) => c.relax(particles, step_coef),
            Constraint::Plane(c) => c.relax(particles, step_coef),
        }
    }

    /// Indices of the referenced particles, in constructor order.
    pub fn particles(&self) -> ParticleRefs {
        match self {
            Constraint::Distance(c) => ParticleRefs::two(c.a, c.b),
            Constraint::Pin(c) => ParticleRefs::one(c.particle),
            Constraint::Angle(c) => ParticleRefs::three(c.a, c.b, c.c),
            Constraint::Collision(c) => ParticleRefs::two(c.a, c.b),
            Constraint::MinMaxDistance(c) => ParticleRefs::two(c.a, c.b),
            Constraint::MinMaxAngle(c) => ParticleRefs::three(c.a, c.b, c.c),
            Constraint::Plane(c) => ParticleRefs::one(c.particle),
        }
    }

    /// Stiffness, or `None` for pins which are always rigid.
    pub fn stiffness(&self) -> Option<F> {
        match self {
            Constraint::Distance(c) => Some(c.stiffness),
            Constraint::Pin(_) => None,
            Constraint::Angle(c) => Some(c.stiffness),
            Constraint::Collision(c) => Some(c.stiffness),
            Constraint::MinMaxDistance(c) => Some(c.stiffness),
            Constraint::MinMaxAngle(c) => Some(c.stiffness),
            Constraint::Plane(c) => Some(c.stiffness),
        }
    }

    pub fn style(&self) -> Option<&ConstraintStyle<F>> {
        match self {
            Constraint::Distance(c) => c.style.as_ref(),
            Constraint::Pin(c) => c.style.as_ref(),
            Constraint::Angle(c) => c.style.as_ref(),
            Constraint::Collision(c) => c.style.as_ref(),
            Constraint::MinMaxDistance(c) => c.style.as_ref(),
            Constraint::MinMaxAngle(c) => c.style.as_ref(),
            Constraint::Plane(c) => c.style.as_ref(),
        }
    }

    pub fn set_style(&mut self, style: ConstraintStyle<F>) {
        let slot = match self {
            Constraint::Distance(c) => &mut c.style,
            Constraint::Pin(c) => &mut c.style,
            Constraint::Angle(c) => &mut c.style,
            Constraint::Collision(c) => &mut c.style,
            Constraint::MinMaxDistance(c) => &mut c.style,
            Constraint::MinMaxAngle(c) => &mut c.style,
            Constraint::Plane(c) => &mut c.style,
        };
        *slot = Some(style);
    }

    /// Drawing style with per-kind defaults. Collisions are not drawn.
    pub fn render_hint(&self) -> Option<RenderHint<F>> {
        let link = RenderHint { color: LINK_COLOR, line_width: F::one(), radius: F::zero() };
        let angle = RenderHint {
            color: ANGLE_COLOR,
            line_width: F::from_f64(5.0),
            radius: F::zero(),
        };
        let defaults = match self {
            Constraint::Distance(_) | Constraint::MinMaxDistance(_) | Constraint::Plane(_) => link,
            Constraint::Angle(_) | Constraint::MinMaxAngle(_) => angle,
            Constraint::Pin(_) => RenderHint {
                color: PIN_COLOR,
                line_width: F::zero(),
                radius: F::from_f64(6.0),
            },
            Constraint::Collision(_) => return None,
        };
        Some(RenderHint::resolve(self.style(), defaults))
    }
}

impl<F: Float> From<DistanceConstraint<F>> for Constraint<F> {
    fn from(c: DistanceConstraint<F>) -> Self { Constraint::Distance(c) }
}

impl<F: Float> From<PinConstraint<F>> for Constraint<F> {
    fn from(c: PinConstraint<F>) -> Self { Constraint::Pin(c) }
}

impl<F: Float> From<AngleConstraint<F>> for Constraint<F> {
    fn from(c: AngleConstraint<F>) -> Self { Constraint::Angle(c) }
}

impl<F: Float> From<CollisionConstraint<F>> for Constraint<F> {
    fn from(c: CollisionConstraint<F>) -> Self { Constraint::Collision(c) }
}

impl<F: Float> From<MinMaxDistanceConstraint<F>> for Constraint<F> {
    fn from(c: MinMaxDistanceConstraint<F>) -> Self { Constraint::MinMaxDistance(c) }
}

impl<F: Float> From<MinMaxAngleConstraint<F>> for Constraint<F> {
    fn from(c: MinMaxAngleConstraint<F>) -> Self { Constraint::MinMaxAngle(c) }
}

impl<F: Float> From<PlaneConstraint<F>> for Constraint<F> {
    fn from(c: PlaneConstraint<F>) -> Self { Constraint::Plane(c) }
}

/// Up to three particle indices referenced by a constraint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParticleRefs {
    indices: [usize; 3],
    len: usize,
}

impl ParticleRefs {
    fn one(a: usize) -> Self { ParticleRefs { indices: [a, 0, 0], len: 1 } }
    fn two(a: usize, b: usize) -> Self { ParticleRefs { indices: [a, b, 0], len: 2 } }
    fn three(a: usize, b: usize, c: usize) -> Self { ParticleRefs { indices: [a, b, c], len: 3 } }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len]
    }
}

fn in_range<F: Float>(particles: &[Particle<F>], indices: &[usize]) -> bool {
    indices.iter().all(|&i| i < particles.len())
}

fn out_of_bounds<F: Float>(particles: &[Particle<F>], indices: &[usize]) -> Result<(), PhysicsError> {
    match indices.iter().find(|&&i| i >= particles.len()) {
        Some(&index) => Err(PhysicsError::ParticleOutOfBounds { index, count: particles.len() }),
        None => Ok(()),
    }
}

/// Apply `correction` to the separation `a - b`: `a` moves along it and `b`
/// against it. With equal weights each side takes the full correction.
fn apply_pair_correction<F: Float>(
    particles: &mut [Particle<F>],
    a: usize,
    b: usize,
    correction: Vec2<F>,
    mode: CorrectionMode,
) {
    let (a_share, b_share) = match mode {
        CorrectionMode::Even => (F::one(), F::one()),
        CorrectionMode::MassWeighted => {
            let a_inv = particles[a].inv_mass();
            let b_inv = particles[b].inv_mass();
            let w_total = a_inv + b_inv;
            if w_total.is_near_zero(F::from_f64(1e-10)) {
                return; // both immovable
            }
            (F::two() * a_inv / w_total, F::two() * b_inv / w_total)
        }
    };
    particles[a].pos += correction.scale(a_share);
    particles[b].pos -= correction.scale(b_share);
}

fn triplet_angle<F: Float>(particles: &[Particle<F>], a: usize, b: usize, c: usize) -> Option<F> {
    let (a, b, c) = (particles.get(a)?, particles.get(b)?, particles.get(c)?);
    Some(b.pos.angle_between(a.pos, c.pos))
}

/// Rotate `a` and `c` about `b` by `diff`/`-diff`, then swing `b` about the
/// moved `a` and `c` the same way.
fn rotate_triplet<F: Float>(particles: &mut [Particle<F>], a: usize, b: usize, c: usize, diff: F) {
    let b_pos = particles[b].pos;
    particles[a].pos = particles[a].pos.rotated_around(b_pos, diff);
    particles[c].pos = particles[c].pos.rotated_around(b_pos, -diff);

    let a_pos = particles[a].pos;
    let c_pos = particles[c].pos;
    let mut b_pos = particles[b].pos.rotated_around(a_pos, diff);
    b_pos = b_pos.rotated_around(c_pos, -diff);
    particles[b].pos = b_pos;
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, distance: F, stiffness: F) -> Self {
        DistanceConstraint { a, b, distance, stiffness, mode: CorrectionMode::default(), style: None }
    }

    /// Rest distance taken from the particles' current separation.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>], stiffness: F) -> Result<Self, PhysicsError> {
        out_of_bounds(particles, &[a, b])?;
        let distance = particles[a].pos.distance(particles[b].pos);
        Ok(Self::new(a, b, distance, stiffness))
    }

    pub fn with_mode(mut self, mode: CorrectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn relax(&self, particles: &mut [Particle<F>], step_coef: F) {
        if !in_range(particles, &[self.a, self.b]) {
            return;
        }
        let delta = particles[self.a].pos - particles[self.b].pos;
        let dist_sq = delta.length_sq();
        if dist_sq == F::zero() {
            return; // no axis to push along
        }

        let diff = (self.distance * self.distance - dist_sq) / dist_sq;
        let correction = delta.scale(diff * self.stiffness * step_coef);
        apply_pair_correction(particles, self.a, self.b, correction, self.mode);
    }
}

impl<F: Float> PinConstraint<F> {
    pub fn new(particle: usize, pos: Vec2<F>) -> Self {
        PinConstraint { particle, pos, style: None }
    }

    pub fn relax(&self, particles: &mut [Particle<F>], _step_coef: F) {
        if let Some(p) = particles.get_mut(self.particle) {
            p.pos = self.pos;
        }
    }
}

impl<F: Float> AngleConstraint<F> {
    pub fn new(a: usize, b: usize, c: usize, angle: F, stiffness: F) -> Self {
        AngleConstraint { a, b, c, angle, stiffness, style: None }
    }

    /// Rest angle taken from the current configuration.
    pub fn from_particles(a: usize, b: usize, c: usize, particles: &[Particle<F>], stiffness: F) -> Result<Self, PhysicsError> {
        out_of_bounds(particles, &[a, b, c])?;
        let angle = particles[b].pos.angle_between(particles[a].pos, particles[c].pos);
        Ok(Self::new(a, b, c, angle, stiffness))
    }

    pub fn current_angle(&self, particles: &[Particle<F>]) -> Option<F> {
        triplet_angle(particles, self.a, self.b, self.c)
    }

    /// Wrapped angular error scaled for one relaxation call.
    pub fn correction(&self, particles: &[Particle<F>], step_coef: F) -> Option<F> {
        let diff = (self.current_angle(particles)? - self.angle).wrap_angle();
        Some(diff * step_coef * self.stiffness)
    }

    pub fn relax(&self, particles: &mut [Particle<F>], step_coef: F) {
        if let Some(diff) = self.correction(particles, step_coef) {
            rotate_triplet(particles, self.a, self.b, self.c, diff);
        }
    }
}

impl<F: Float> CollisionConstraint<F> {
    pub fn new(a: usize, b: usize, stiffness: F) -> Self {
        CollisionConstraint { a, b, stiffness, mode: CorrectionMode::default(), style: None }
    }

    pub fn with_mode(mut self, mode: CorrectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn relax(&self, particles: &mut [Particle<F>], step_coef: F) {
        if !in_range(particles, &[self.a, self.b]) {
            return;
        }
        let delta = particles[self.a].pos - particles[self.b].pos;
        let dist = delta.length();
        let min_distance = particles[self.a].radius() + particles[self.b].radius();
        if dist >= min_distance || dist == F::zero() {
            return;
        }

        let diff = (min_distance - dist) / dist;
        let correction = delta.scale(diff * self.stiffness * step_coef);
        apply_pair_correction(particles, self.a, self.b, correction, self.mode);
    }
}

impl<F: Float> MinMaxDistanceConstraint<F> {
    pub fn new(a: usize, b: usize, min_distance: F, max_distance: F, stiffness: F) -> Self {
        MinMaxDistanceConstraint {
            a,
            b,
            min_distance,
            max_distance,
            stiffness,
            mode: CorrectionMode::default(),
            style: None,
        }
    }

    pub fn with_mode(mut self, mode: CorrectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn relax(&self, particles: &mut [Particle<F>], step_coef: F) {
        if !in_range(particles, &[self.a, self.b]) {
            return;
        }
        let delta = particles[self.a].pos - particles[self.b].pos;
        let dist = delta.length();

        let target = if dist < self.min_distance {
            self.min_distance
        } else if dist > self.max_distance {
            self.max_distance
        } else {
            return;
        };
        if dist == F::zero() {
            return;
        }

        let diff = (target - dist) / dist;
        let correction = delta.scale(diff * self.stiffness * step_coef);
        apply_pair_correction(particles, self.a, self.b, correction, self.mode);
    }
}

impl<F: Float> MinMaxAngleConstraint<F> {
    pub fn new(a: usize, b: usize, c: usize, min_angle: F, max_angle: F, stiffness: F) -> Self {
        MinMaxAngleConstraint { a, b, c, min_angle, max_angle, stiffness, style: None }
    }

    pub fn current_angle(&self, particles: &[Particle<F>]) -> Option<F> {
        triplet_angle(particles, self.a, self.b, self.c)
    }

    /// Wrapped error to the nearer bound, or `None` inside the range.
    ///
    /// The range runs counter-clockwise from `min_angle` to `max_angle`, so
    /// it may straddle the `±pi` seam.
    pub fn violation(&self, angle: F) -> Option<F> {
        let mut offset = (angle - self.min_angle).wrap_angle();
        if offset < F::zero() {
            offset = offset + F::two() * F::pi();
        }
        if offset <= self.max_angle - self.min_angle {
            return None;
        }

        let to_min = (angle - self.min_angle).wrap_angle();
        let to_max = (angle - self.max_angle).wrap_angle();
        Some(if to_min.abs() < to_max.abs() { to_min } else { to_max })
    }

    pub fn relax(&self, particles: &mut [Particle<F>], step_coef: F) {
        let Some(angle) = self.current_angle(particles) else {
            return;
        };
        if let Some(error) = self.violation(angle) {
            let diff = error * step_coef * self.stiffness;
            rotate_triplet(particles, self.a, self.b, self.c, diff);
        }
    }
}

impl<F: Float> PlaneConstraint<F> {
    /// Fails with [`PhysicsError::DegenerateVector`] if `normal` has zero length.
    pub fn new(particle: usize, origin: Vec2<F>, normal: Vec2<F>, stiffness: F) -> Result<Self, PhysicsError> {
        Ok(PlaneConstraint {
            particle,
            origin,
            normal: normal.normalized()?,
            stiffness,
            style: None,
        })
    }

    /// Unit normal of the allowed side.
    pub fn normal(&self) -> Vec2<F> {
        self.normal
    }

    pub fn set_normal(&mut self, normal: Vec2<F>) -> Result<(), PhysicsError> {
        self.normal = normal.normalized()?;
        Ok(())
    }

    /// Distance of the particle centre above the plane along the normal.
    pub fn signed_distance(&self, particles: &[Particle<F>]) -> Option<F> {
        particles.get(self.particle).map(|p| (p.pos - self.origin).dot(self.normal))
    }

    pub fn relax(&self, particles: &mut [Particle<F>], step_coef: F) {
        let Some(p) = particles.get_mut(self.particle) else {
            return;
        };
        let radius = p.radius();
        let dist = (p.pos - self.origin).dot(self.normal);
        if dist < radius {
            p.pos += self.normal.scale((radius - dist) * step_coef);
        }
    }
}
