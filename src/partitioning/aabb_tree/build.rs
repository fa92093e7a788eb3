use super::{AabbTree, AabbTreeNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};

/// A primitive the [`AabbTree`] can be built from.
pub trait Buildable {
    /// The index of the external primitive described by this record.
    ///
    /// Must be smaller than [`AabbTreeNode::INNER`].
    fn index(&self) -> u32;
    /// The bounding box of the primitive, already enlarged by any desired margin.
    fn aabb(&self) -> Aabb;
    /// A representative point of the primitive, used to split primitives into two halves.
    fn centroid(&self) -> Point<Real>;
}

/// Boxes paired with their index can be indexed directly. Their centroid is the box center.
impl Buildable for (u32, Aabb) {
    #[inline]
    fn index(&self) -> u32 {
        self.0
    }

    #[inline]
    fn aabb(&self) -> Aabb {
        self.1
    }

    #[inline]
    fn centroid(&self) -> Point<Real> {
        self.1.center()
    }
}

impl AabbTree {
    /// Builds a new tree from the given primitives.
    ///
    /// See [`AabbTree::build`].
    pub fn from_buildables<B: Buildable>(input: Vec<B>) -> Self {
        let mut result = Self::new();
        result.build(input);
        result
    }

    /// Replaces the content of this tree by a balanced hierarchy over the given primitives.
    ///
    /// The input vector is consumed: it is reordered in place while the primitives are split
    /// into halves. An empty input results in an empty tree.
    ///
    /// At each level, the primitives are split at the median of their centroids along the
    /// widest axis of their bounding box. The median is found by quickselect, which keeps the
    /// construction `O(n log n)` even for adversarially ordered input.
    pub fn build<B: Buildable>(&mut self, mut input: Vec<B>) {
        if input.is_empty() {
            self.clear();
            return;
        }

        // Enough room for a full binary tree with `input.len()` leaves.
        let capacity = (input.len() * 2 + 1).next_power_of_two();
        log::debug!(
            "Building AABB tree over {} primitives ({} node slots).",
            input.len(),
            capacity
        );

        self.nodes.clear();
        self.nodes.resize(capacity, AabbTreeNode::unused());
        let right = input.len() - 1;
        self.build_recursive(&mut input, 0, 0, right);
    }

    /// Replaces the content of this tree by a balanced hierarchy over a copy of the given
    /// primitives.
    ///
    /// See [`AabbTree::build`].
    pub fn build_from_slice<B: Buildable + Clone>(&mut self, input: &[B]) {
        self.build(input.to_vec())
    }

    // Build a balanced tree by splitting the input sequence by an axis aligned plane.
    fn build_recursive<B: Buildable>(
        &mut self,
        input: &mut [B],
        node: usize,
        left: usize,
        right: usize,
    ) {
        debug_assert!(node < self.nodes.len());
        debug_assert!(left <= right);

        if left == right {
            self.nodes[node] = AabbTreeNode::leaf(input[left].index(), input[left].aabb());
            return;
        }

        let mut aabb = input[left].aabb();
        for elt in &input[left + 1..=right] {
            aabb.merge(&elt.aabb());
        }
        let dim = aabb.largest_axis();

        // Partition the input to left / right pieces of the same length to produce a balanced tree.
        let center = (left + right) / 2;
        partition_input(input, dim, left, right, center);

        self.nodes[node] = AabbTreeNode::inner(aabb);
        self.build_recursive(input, Self::left_child(node), left, center);
        self.build_recursive(input, Self::right_child(node), center + 1, right);
    }
}

/// Partitions `input[left..=right]` around its `k`-th element along `dim`, using quickselect.
///
/// Afterward, every element left of `k` has a centroid coordinate smaller or equal to the one of
/// the `k`-th element, and every element right of `k` a greater or equal one.
pub(super) fn partition_input<B: Buildable>(
    input: &mut [B],
    dim: usize,
    mut left: usize,
    mut right: usize,
    k: usize,
) {
    let value = |input: &[B], i: usize| input[i].centroid()[dim];

    while left < right {
        let center = (left + right) / 2;

        // Sort input[left], input[center], input[right] so that the median of the three values
        // ends up in input[center] and can be used as the pivot.
        let pivot = {
            let mut left_value = value(input, left);
            let mut center_value = value(input, center);
            let mut right_value = value(input, right);

            if left_value > center_value {
                input.swap(left, center);
                core::mem::swap(&mut left_value, &mut center_value);
            }
            if left_value > right_value {
                input.swap(left, right);
                right_value = left_value;
            }
            if center_value > right_value {
                input.swap(center, right);
                center_value = right_value;
            }

            center_value
        };

        if right <= left + 2 {
            // The range has at most three elements: it is already sorted.
            break;
        }

        let mut i = left;
        let mut j = right - 1;
        // Park the pivot right before the last element, which is known to be >= pivot.
        input.swap(center, j);

        loop {
            // Stops at `right - 1` at the latest, where the pivot is parked.
            i += 1;
            while value(input, i) < pivot {
                i += 1;
            }

            j -= 1;
            while value(input, j) > pivot && i < j {
                j -= 1;
            }

            if i >= j {
                break;
            }

            input.swap(i, j);
        }

        // Move the pivot to its final place.
        input.swap(i, right - 1);

        if k < i {
            right = i - 1;
        } else if k == i {
            break;
        } else {
            left = i + 1;
        }
    }
}
