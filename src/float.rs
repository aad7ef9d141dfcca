//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting the floating-point operations the kernel needs.
///
/// Implemented for `f32` and `f64`. Transcendentals go through `libm` so the
/// crate builds without `std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Convert from f64 (for constants and configuration). Exact for `f64`,
    /// rounded to nearest for `f32`.
    fn from_f64(v: f64) -> Self;
    /// Arctangent of y/x, with correct quadrant.
    fn atan2(y: Self, x: Self) -> Self;

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    /// Wrap an angle difference into [-pi, pi].
    ///
    /// Only a single turn is folded, which is enough for differences of two
    /// `atan2` results.
    fn wrap_angle(self) -> Self {
        let pi = Self::pi();
        let two_pi = Self::two() * pi;
        if self <= -pi {
            self + two_pi
        } else if self >= pi {
            self - two_pi
        } else {
            self
        }
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2f(y, x) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn from_f64(v: f64) -> Self { v }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2(y, x) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_angle_folds_across_pi() {
        let pi = core::f64::consts::PI;
        let d = (-pi + 0.01) - (pi - 0.01);
        assert!((d.wrap_angle() - 0.02).abs() < 1e-9);
        let d = (pi - 0.01) - (-pi + 0.01);
        assert!((d.wrap_angle() + 0.02).abs() < 1e-9);
    }

    #[test]
    fn from_f64_is_exact_for_f64() {
        assert_eq!(<f64 as Float>::from_f64(0.99), 0.99);
        assert_eq!(<f64 as Float>::from_f64(0.2), 0.2);
        assert_eq!(<f32 as Float>::from_f64(0.2), 0.2f32);
    }

    #[test]
    fn wrap_angle_leaves_small_values() {
        assert_eq!(0.5f32.wrap_angle(), 0.5);
        assert_eq!((-0.5f32).wrap_angle(), -0.5);
    }
}
