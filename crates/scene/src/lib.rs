//! Scene components and spatial queries.
//!
//! This crate is the spatial math core of the engine:
//! - [`Transform`] values producing model matrices
//! - [`Camera`] with a validated perspective projection
//! - [`Ray`] / [`Aabb`] intersection
//! - Screen-space picking
//! - The [`Scene`] object registry

pub mod camera;
pub mod picking;
pub mod ray;
pub mod scene;
pub mod transform;

mod error;

pub use camera::{Camera, Orientation, Perspective};
pub use error::SceneError;
pub use picking::{PickHit, pick_closest, ray_from_screen};
pub use ray::{Aabb, Ray};
pub use scene::Scene;
pub use transform::Transform;
