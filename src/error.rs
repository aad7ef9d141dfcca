//! Error types for kernel operations.

use core::fmt;

/// Errors that can occur while building or editing a simulation.
///
/// Relaxation and integration never fail; only construction-time and
/// index-based operations report errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A zero-length vector was normalized (also raised for a plane with a zero normal).
    DegenerateVector,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A ring shape needs more rim segments than were requested.
    InsufficientSegments { segments: usize, min: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::DegenerateVector => write!(f, "cannot normalize a zero-length vector"),
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::InsufficientSegments { segments, min } => {
                write!(f, "{} segments requested, at least {} required", segments, min)
            }
        }
    }
}

impl core::error::Error for PhysicsError {}
