//! 2D vector type for the kernel.
//!
//! `+` and `-` are the pure add/sub; `+=` and `-=` (or the `*_in_place`
//! methods, which chain) mutate the receiver.

use crate::error::PhysicsError;
use crate::float::Float;
use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 2D vector with value semantics.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Component-wise multiplication.
    pub fn component_mul(self, other: Self) -> Self {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }

    /// Component-wise division.
    pub fn component_div(self, other: Self) -> Self {
        Vec2 { x: self.x / other.x, y: self.y / other.y }
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    pub fn set_from(&mut self, other: Self) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    pub fn add_in_place(&mut self, other: Self) -> &mut Self {
        *self += other;
        self
    }

    pub fn sub_in_place(&mut self, other: Self) -> &mut Self {
        *self -= other;
        self
    }

    pub fn mul_in_place(&mut self, other: Self) -> &mut Self {
        self.x = self.x * other.x;
        self.y = self.y * other.y;
        self
    }

    pub fn div_in_place(&mut self, other: Self) -> &mut Self {
        self.x = self.x / other.x;
        self.y = self.y / other.y;
        self
    }

    pub fn scale_in_place(&mut self, s: F) -> &mut Self {
        self.x = self.x * s;
        self.y = self.y * s;
        self
    }

    /// Rotate this point about `pivot` by `theta` radians.
    pub fn rotate_in_place(&mut self, pivot: Self, theta: F) -> &mut Self {
        *self = self.rotated_around(pivot, theta);
        self
    }

    /// Component-wise equality within `epsilon` (inclusive).
    pub fn epsilon_eq(self, other: Self, epsilon: F) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// 2D cross product (returns scalar): self.x * other.y - self.y * other.x
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Length (magnitude).
    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (self - other).length() }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F { (self - other).length_sq() }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`PhysicsError::DegenerateVector`] instead of producing NaN.
    pub fn normalized(self) -> Result<Self, PhysicsError> {
        let len = self.length();
        if len.is_near_zero(F::from_f64(1e-10)) {
            return Err(PhysicsError::DegenerateVector);
        }
        Ok(self.scale(F::one() / len))
    }

    /// Signed angle from `self` to `other`, in (-pi, pi].
    pub fn angle_to(self, other: Self) -> F {
        F::atan2(self.cross(other), self.dot(other))
    }

    /// Signed angle at `self` between the rays towards `left` and `right`.
    pub fn angle_between(self, left: Self, right: Self) -> F {
        (left - self).angle_to(right - self)
    }

    /// This point rotated about `pivot` by `theta` radians (counter-clockwise
    /// in a y-up frame).
    pub fn rotated_around(self, pivot: Self, theta: F) -> Self {
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        let (sin, cos) = (theta.sin(), theta.cos());
        Vec2 {
            x: dx * cos - dy * sin + pivot.x,
            y: dx * sin + dy * cos + pivot.y,
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
    }
}

impl<F: Float + fmt::Display> fmt::Display for Vec2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
