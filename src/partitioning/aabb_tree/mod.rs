//! An indirect AABB tree: a balanced bounding volume hierarchy referencing externally owned
//! primitives by index.
//!
//! The tree is stored as an implicit binary tree in a flat array: the children of the node at
//! index `i` are at indices `2i + 1` and `2i + 2`. It is built once from a complete set of
//! primitives (see [`AabbTree::build`]) and is immutable afterward; rebuilding replaces it
//! wholesale.
//!
//! The tree never owns the indexed geometry. Every query is given the
//! [`IndexedTriangleSet`](crate::shape::IndexedTriangleSet) the tree was built from.

pub use self::build::Buildable;
pub use self::build_triangle_set::{TriangleBuildable, DEFAULT_TRIANGLE_MARGIN};
pub use self::tree::{AabbTree, AabbTreeNode};

mod build;
mod build_triangle_set;
mod point_queries;
#[cfg(feature = "dim3")]
mod ray_queries;
mod tree;
mod validation;
