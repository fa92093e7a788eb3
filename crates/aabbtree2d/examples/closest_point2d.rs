use aabbtree2d::math::{Point, Real};
use aabbtree2d::partitioning::AabbTree;
use aabbtree2d::shape::IndexedTriangleSet;

fn main() {
    // A strip of triangles along the x axis.
    let n = 100u32;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=n {
        vertices.push(Point::new(i as Real, 0.0));
        vertices.push(Point::new(i as Real, 1.0));
    }

    for i in 0..n {
        indices.push([2 * i, 2 * i + 2, 2 * i + 1]);
        indices.push([2 * i + 1, 2 * i + 2, 2 * i + 3]);
    }

    let mesh = IndexedTriangleSet::new(&vertices, &indices);
    let tree = AabbTree::from_triangle_set(&mesh);
    println!("Tree depth: {}, leaves: {}.", tree.depth(), tree.leaf_count());

    let pt = Point::new(42.3, 3.0);
    if let Some(proj) = tree.closest_point(&mesh, &pt) {
        println!("Closest point to {:?}: {:?} on face {}.", pt, proj.point, proj.face_id);
    }

    let nearby = tree.triangles_in_radius(&mesh, &pt, 4.5);
    println!("Faces closer than {}: {:?}.", (4.5 as Real).sqrt(), nearby);
}
