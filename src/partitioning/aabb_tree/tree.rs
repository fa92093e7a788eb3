use crate::bounding_volume::Aabb;

/// A node (leaf, internal, or unused padding slot) of an [`AabbTree`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AabbTreeNode {
    /// Index of the external primitive referenced by this node if it is a leaf.
    ///
    /// Set to [`AabbTreeNode::INNER`] for internal nodes and to [`AabbTreeNode::UNUSED`] for
    /// slots of the implicit tree that are not part of the hierarchy.
    pub index: u32,
    /// Bounding box of this node.
    ///
    /// For leaves, this is the box given at build time (usually enlarged by a small margin).
    /// For internal nodes, this is the union of the boxes of both children.
    pub aabb: Aabb,
}

impl Default for AabbTreeNode {
    fn default() -> Self {
        Self::unused()
    }
}

impl AabbTreeNode {
    /// Marker index of slots that are not part of the hierarchy.
    pub const UNUSED: u32 = u32::MAX;
    /// Marker index of internal nodes.
    pub const INNER: u32 = u32::MAX - 1;

    #[inline(always)]
    pub(super) fn unused() -> Self {
        Self {
            index: Self::UNUSED,
            aabb: Aabb::new_invalid(),
        }
    }

    #[inline(always)]
    pub(super) fn leaf(index: u32, aabb: Aabb) -> Self {
        debug_assert!(index < Self::INNER, "Primitive index collides with a marker.");
        Self { index, aabb }
    }

    #[inline(always)]
    pub(super) fn inner(aabb: Aabb) -> Self {
        Self {
            index: Self::INNER,
            aabb,
        }
    }

    /// Is this node part of the hierarchy?
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        self.index != Self::UNUSED
    }

    /// Is this node an internal node?
    #[inline(always)]
    pub fn is_inner(&self) -> bool {
        self.index == Self::INNER
    }

    /// Is this node a leaf?
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.is_valid() && !self.is_inner()
    }

    /// The index of the primitive referenced by this node, if it is a leaf.
    #[inline]
    pub fn primitive(&self) -> Option<u32> {
        self.is_leaf().then_some(self.index)
    }

    /// The bounding box of this node.
    #[inline(always)]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }
}

/// An axis-aligned bounding box tree referencing external primitives by their index.
///
/// The tree is balanced: built over `N` primitives, its depth is `⌈log2(N)⌉` regardless of the
/// order of the input primitives.
///
/// Once built, the tree is never modified, so any number of queries can run concurrently on a
/// shared reference to it.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use aabbtree3d::na::{Point3, Vector3};
/// use aabbtree3d::partitioning::AabbTree;
/// use aabbtree3d::query::Ray;
/// use aabbtree3d::shape::IndexedTriangleSet;
///
/// let vertices = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let indices = [[0, 1, 2]];
/// let mesh = IndexedTriangleSet::new(&vertices, &indices);
/// let tree = AabbTree::from_triangle_set(&mesh);
///
/// let ray = Ray::new(Point3::new(0.2, 0.2, 1.0), Vector3::new(0.0, 0.0, -1.0));
/// let hit = tree.cast_ray_first_hit(&mesh, &ray).unwrap();
/// assert_eq!(hit.face_id, 0);
/// assert!((hit.time_of_impact - 1.0).abs() < 1.0e-6);
///
/// let proj = tree.closest_point(&mesh, &Point3::new(0.2, 0.2, 5.0)).unwrap();
/// assert!((proj.sqr_distance - 25.0).abs() < 1.0e-4);
/// # }
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AabbTree {
    pub(super) nodes: Vec<AabbTreeNode>,
}

impl AabbTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every node from this tree, making it empty.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Does this tree contain no node?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All the slots of this implicit tree, including unused ones.
    #[inline]
    pub fn nodes(&self) -> &[AabbTreeNode] {
        &self.nodes
    }

    /// The node at the given index.
    ///
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn node(&self, id: usize) -> &AabbTreeNode {
        &self.nodes[id]
    }

    /// The root of this tree, or `None` if it is empty.
    #[inline]
    pub fn root(&self) -> Option<&AabbTreeNode> {
        self.nodes.first()
    }

    /// The bounding box of everything indexed by this tree, or `None` if it is empty.
    #[inline]
    pub fn root_aabb(&self) -> Option<&Aabb> {
        self.root().map(|node| &node.aabb)
    }

    /// Index of the left child of the node at index `id`.
    #[inline(always)]
    pub fn left_child(id: usize) -> usize {
        id * 2 + 1
    }

    /// Index of the right child of the node at index `id`.
    #[inline(always)]
    pub fn right_child(id: usize) -> usize {
        id * 2 + 2
    }

    /// The number of leaves of this tree.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// The depth of this tree, i.e., the number of edges from the root to its deepest leaf.
    ///
    /// A tree with a single leaf, as well as an empty tree, has a depth of zero.
    pub fn depth(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_valid())
            .map(|(id, _)| (id + 1).ilog2() as usize)
            .max()
            .unwrap_or(0)
    }
}
