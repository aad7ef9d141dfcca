//! 2D position-based physics: Verlet particles and iterative constraint
//! relaxation.
//!
//! `verlet2d` is a render- and input-agnostic kernel. Hosts build bodies
//! with the [`shapes`] builders (or by hand), hand them to a [`World`], call
//! [`World::advance`] once per frame and read particle positions back for
//! drawing. Dragging is just writing a particle's `pos` between frames.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity from `pos - last_pos`, with
//!   friction, ground friction and bouncy world bounds
//! - **Constraint solver**: distance, pin, angle, collision, min/max
//!   distance, min/max angle and plane, relaxed Gauss-Seidel style
//! - **Shapes**: points, line segments, pinned cloth, spoked tires
//! - **Observable**: monitor frame phases via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use verlet2d::{shapes, Vec2, World};
//!
//! let mut world: World<f32> = World::with_defaults(800.0, 600.0);
//! let mut rope = shapes::line_segments(
//!     &[Vec2::new(100.0, 50.0), Vec2::new(120.0, 50.0), Vec2::new(140.0, 50.0)],
//!     1.0,
//! );
//! rope.pin(0, None).unwrap();
//! let rope = world.add_composite(rope);
//!
//! for _ in 0..60 {
//!     world.advance(8);
//! }
//! assert_eq!(world.composites[rope].particles[0].pos, Vec2::new(100.0, 50.0));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod style;
pub mod particle;
pub mod constraint;
pub mod composite;
pub mod world;
pub mod shapes;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use style::{ConstraintStyle, ParticleStyle, RenderHint, Rgba};
pub use particle::Particle;
pub use constraint::{
    AngleConstraint, CollisionConstraint, Constraint, CorrectionMode, DistanceConstraint,
    MinMaxAngleConstraint, MinMaxDistanceConstraint, PinConstraint, PlaneConstraint,
};
pub use composite::Composite;
pub use world::{ParticleHandle, World};
pub use config::WorldConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
