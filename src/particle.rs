//! Verlet particles with position-based dynamics.

use crate::float::Float;
use crate::style::{ParticleStyle, RenderHint, PARTICLE_COLOR};
use crate::vec::Vec2;

/// A Verlet particle: position-based dynamics with implicit velocity
/// `pos - last_pos`.
///
/// A particle with `mass <= 0` is immovable for mass-weighted constraints.
/// It is still integrated and still follows pins and angle constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub last_pos: Vec2<F>,
    pub mass: F,
    pub style: Option<ParticleStyle<F>>,
}

impl<F: Float> Particle<F> {
    /// A resting particle of unit mass.
    pub fn new(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            last_pos: pos,
            mass: F::one(),
            style: None,
        }
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_style(mut self, style: ParticleStyle<F>) -> Self {
        self.style = Some(style);
        self
    }

    /// `1 / mass`, or zero for non-positive mass.
    pub fn inv_mass(&self) -> F {
        if self.mass > F::zero() {
            F::one() / self.mass
        } else {
            F::zero()
        }
    }

    /// Displacement over the last frame.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.last_pos
    }

    /// Physical radius used for collision and plane contact. Defaults to 1.
    pub fn radius(&self) -> F {
        self.style.and_then(|s| s.radius).unwrap_or(F::one())
    }

    /// Drawing style with defaults applied.
    pub fn render_hint(&self) -> RenderHint<F> {
        let style = self.style.unwrap_or_default();
        RenderHint {
            color: style.color.unwrap_or(PARTICLE_COLOR),
            line_width: F::zero(),
            radius: style.radius.unwrap_or(F::two()),
        }
    }

    /// One Verlet step: damp the implicit velocity, apply ground friction
    /// when resting on `ground_y`, snapshot `last_pos`, then move by
    /// gravity plus velocity.
    pub fn integrate(&mut self, gravity: Vec2<F>, friction: F, ground_friction: F, ground_y: F) {
        let mut velocity = self.velocity().scale(friction);

        if self.pos.y >= ground_y && velocity.length_sq() > F::from_f64(1e-6) {
            // Same direction, magnitude |v| * ground_friction.
            velocity = velocity.scale(ground_friction);
        }

        self.last_pos = self.pos;
        self.pos += gravity;
        self.pos += velocity;
    }

    /// Clamp into `x in [0, max.x]`, `y <= max.y`. A clamped axis gets its
    /// `last_pos` reflected so the next step bounces with `restitution`.
    pub fn clamp_to_bounds(&mut self, max: Vec2<F>, restitution: F) -> bool {
        let mut clamped = false;

        if self.pos.x < F::zero() {
            self.pos.x = F::zero();
            let vel_x = self.pos.x - self.last_pos.x;
            self.last_pos.x = self.pos.x + vel_x * restitution;
            clamped = true;
        } else if self.pos.x > max.x {
            self.pos.x = max.x;
            let vel_x = self.pos.x - self.last_pos.x;
            self.last_pos.x = self.pos.x + vel_x * restitution;
            clamped = true;
        }

        if self.pos.y > max.y {
            self.pos.y = max.y;
            let vel_y = self.pos.y - self.last_pos.y;
            self.last_pos.y = self.pos.y + vel_y * restitution;
            clamped = true;
        }

        clamped
    }

    /// Rotate both `pos` and `last_pos` about `center`, turning the implicit
    /// velocity with the particle.
    pub fn rotate_around(&mut self, center: Vec2<F>, angle: F) {
        self.pos.rotate_in_place(center, angle);
        self.last_pos.rotate_in_place(center, angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_mass_is_immovable() {
        let p = Particle::new(Vec2::new(0.0f32, 0.0)).with_mass(0.0);
        assert_eq!(p.inv_mass(), 0.0);
        let p = Particle::new(Vec2::new(0.0f32, 0.0)).with_mass(-3.0);
        assert_eq!(p.inv_mass(), 0.0);
        let p = Particle::new(Vec2::new(0.0f32, 0.0)).with_mass(4.0);
        assert_eq!(p.inv_mass(), 0.25);
    }

    #[test]
    fn integrate_snapshots_before_moving() {
        let mut p = Particle::new(Vec2::new(10.0f64, 10.0));
        p.last_pos = Vec2::new(9.0, 10.0);
        p.integrate(Vec2::new(0.0, 0.5), 1.0, 0.8, 1000.0);
        assert_eq!(p.last_pos, Vec2::new(10.0, 10.0));
        assert_eq!(p.pos, Vec2::new(11.0, 10.5));
    }

    #[test]
    fn ground_friction_damps_sliding() {
        let mut p = Particle::new(Vec2::new(10.0f64, 99.0));
        p.last_pos = Vec2::new(8.0, 99.0);
        p.integrate(Vec2::zero(), 1.0, 0.5, 99.0);
        assert!((p.pos.x - 11.0).abs() < 1e-12, "x = {}", p.pos.x);
    }

    #[test]
    fn clamp_reflects_only_clamped_axis() {
        let mut p = Particle::new(Vec2::new(-2.0f64, 50.0));
        p.last_pos = Vec2::new(1.0, 49.0);
        assert!(p.clamp_to_bounds(Vec2::new(99.0, 99.0), 0.5));
        assert_eq!(p.pos, Vec2::new(0.0, 50.0));
        assert!((p.last_pos.x - (-0.5)).abs() < 1e-12);
        assert_eq!(p.last_pos.y, 49.0);
    }

    #[test]
    fn rotate_keeps_velocity_relative() {
        let mut p = Particle::new(Vec2::new(1.0f64, 0.0));
        p.last_pos = Vec2::new(0.0, 0.0);
        p.rotate_around(Vec2::zero(), core::f64::consts::FRAC_PI_2);
        assert!(p.velocity().epsilon_eq(Vec2::new(0.0, 1.0), 1e-12));
    }
}
