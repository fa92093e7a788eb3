//! Point projection.

#[doc(inline)]
pub use self::point_query::TriangleProjection;

#[doc(hidden)]
pub mod point_query;
mod point_triangle;
