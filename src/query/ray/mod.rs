//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayHit};
#[cfg(feature = "dim3")]
pub use self::ray_triangle::ray_triangle_intersection;

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
#[cfg(feature = "dim3")]
mod ray_triangle;
