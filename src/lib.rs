//! Minimal single-precision geometry kernel: 2D/3D vectors, axis-aligned
//! bounding boxes, and planes.
//!
//! Everything here is a plain `Copy` value type and every operation is a
//! pure function, so the whole crate is allocation-free and trivially
//! thread-safe as long as callers do not mutate a shared [`Aabb`] from
//! several threads at once.
//!
//! Degenerate inputs (zero-length [`Vec2::normalize`], collinear
//! [`Plane::from_points`]) are not validated; they produce NaN/Inf
//! components that propagate silently. See the individual operations for
//! the exact contracts.

pub mod aabb;
pub mod plane;
pub mod vec2;
pub mod vec3;

pub use aabb::Aabb;
pub use plane::Plane;
pub use vec2::Vec2;
pub use vec3::Vec3;
