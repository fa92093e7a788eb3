//! Spatial partitioning tools.

pub use self::aabb_tree::{AabbTree, AabbTreeNode, Buildable, TriangleBuildable};
pub use self::aabb_tree::DEFAULT_TRIANGLE_MARGIN;

mod aabb_tree;
