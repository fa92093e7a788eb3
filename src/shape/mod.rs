//! Shapes indexed by the AABB tree.

pub use self::indexed_triangle_set::{IndexedTriangleSet, IndexedTriangleSetError};
pub use self::triangle::Triangle;

mod indexed_triangle_set;
mod triangle;
