use aabbtree2d::bounding_volume::Aabb;
use aabbtree2d::partitioning::AabbTree;
use na::{Point2, Vector2};

#[test]
fn grid_of_boxes_gives_balanced_tree() {
    let mut boxes = Vec::new();

    for i in 0..23u32 {
        for j in 0..17u32 {
            let center = Point2::new(i as f32 * 2.0, j as f32);
            boxes.push((i * 17 + j, Aabb::from_half_extents(center, Vector2::repeat(0.25))));
        }
    }

    let n = boxes.len();
    let mut tree = AabbTree::new();
    tree.build_from_slice(&boxes);
    tree.assert_well_formed();
    assert_eq!(tree.leaf_count(), n);
    assert_eq!(tree.depth(), n.next_power_of_two().trailing_zeros() as usize);

    boxes.reverse();
    let mut reversed = AabbTree::new();
    reversed.build(boxes);
    assert_eq!(reversed.depth(), tree.depth());
    assert_eq!(reversed.root_aabb(), tree.root_aabb());
}
