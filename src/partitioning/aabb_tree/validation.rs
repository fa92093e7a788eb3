use super::AabbTree;
use crate::bounding_volume::BoundingVolume;

impl AabbTree {
    /// Panics if the structure of this tree is inconsistent.
    ///
    /// This checks that:
    /// - every inner node has two valid children and its box is the union of theirs,
    /// - no valid node lies below a leaf or an unused slot,
    /// - no primitive index is referenced by more than one leaf.
    ///
    /// This is a debugging utility traversing the whole tree.
    pub fn assert_well_formed(&self) {
        if self.nodes.is_empty() {
            return;
        }

        assert!(
            self.nodes.len().is_power_of_two(),
            "The node array must have a power-of-two length."
        );
        assert!(self.nodes[0].is_valid(), "The root of a non-empty tree must be valid.");

        for (id, node) in self.nodes.iter().enumerate() {
            let left = Self::left_child(id);
            let right = Self::right_child(id);

            if node.is_inner() {
                assert!(
                    right < self.nodes.len(),
                    "Inner node {} has no room for children.",
                    id
                );
                let left_node = &self.nodes[left];
                let right_node = &self.nodes[right];
                assert!(
                    left_node.is_valid() && right_node.is_valid(),
                    "Inner node {} must have two valid children.",
                    id
                );
                assert_eq!(
                    node.aabb,
                    left_node.aabb.merged(&right_node.aabb),
                    "The box of inner node {} is not the union of its children boxes.",
                    id
                );
            } else {
                for child in [left, right] {
                    assert!(
                        self.nodes.get(child).map_or(true, |n| !n.is_valid()),
                        "Node {} is valid but its parent {} is not an inner node.",
                        child,
                        id
                    );
                }
            }
        }

        let mut primitives: Vec<u32> = self.nodes.iter().filter_map(|n| n.primitive()).collect();
        primitives.sort_unstable();
        for pair in primitives.windows(2) {
            assert_ne!(
                pair[0], pair[1],
                "The primitive {} is referenced by several leaves.",
                pair[0]
            );
        }
    }
}
