//! Non-persistent geometric queries.
//!
//! This module contains the geometric primitives the [`AabbTree`](crate::partitioning::AabbTree)
//! traversals are built upon:
//!
//! * [`Ray`] with the slab test [`Aabb::clip_ray`](crate::bounding_volume::Aabb::clip_ray) and,
//!   in 3D, the ray/triangle intersection [`ray_triangle_intersection`].
//! * The closest point on a triangle, [`Triangle::closest_point`](crate::shape::Triangle::closest_point).
//!
//! as well as the results returned by the tree queries ([`RayHit`] and [`TriangleProjection`]).

pub use self::point::TriangleProjection;
#[cfg(feature = "dim3")]
pub use self::ray::ray_triangle_intersection;
pub use self::ray::{Ray, RayHit};

pub mod point;
mod ray;
