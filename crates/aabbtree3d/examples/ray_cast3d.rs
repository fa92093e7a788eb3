use aabbtree3d::math::{Point, Real, Vector};
use aabbtree3d::partitioning::AabbTree;
use aabbtree3d::query::Ray;
use aabbtree3d::shape::IndexedTriangleSet;

/// A closed axis-aligned cube of side `2` centered at the origin.
fn cube() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let vertices = (0..8)
        .map(|i| {
            Point::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            )
        })
        .collect();
    #[rustfmt::skip]
    let indices = vec![
        [0, 2, 1], [1, 2, 3], // z = -1
        [4, 5, 6], [5, 7, 6], // z = 1
        [0, 1, 4], [1, 5, 4], // y = -1
        [2, 6, 3], [3, 6, 7], // y = 1
        [0, 4, 2], [2, 4, 6], // x = -1
        [1, 3, 5], [3, 7, 5], // x = 1
    ];

    (vertices, indices)
}

fn main() {
    let (vertices, indices) = cube();
    let mesh = IndexedTriangleSet::try_new(&vertices, &indices).expect("Invalid cube indices.");
    let tree = AabbTree::from_triangle_set(&mesh);

    let ray = Ray::new(Point::new(0.1, 0.2, -5.0), Vector::z());

    if let Some(hit) = tree.cast_ray_first_hit(&mesh, &ray) {
        println!(
            "First hit: face {} at t = {} ({:?}).",
            hit.face_id,
            hit.time_of_impact,
            ray.point_at(hit.time_of_impact)
        );
    }

    for hit in tree.cast_ray_all_hits(&mesh, &ray) {
        println!("Hit: face {} at t = {}.", hit.face_id, hit.time_of_impact);
    }

    let proj = tree
        .closest_point(&mesh, &Point::new(0.5, 0.1, 0.0))
        .expect("The cube is not empty.");
    println!(
        "Closest point: {:?} on face {}, at distance {}.",
        proj.point,
        proj.face_id,
        proj.distance()
    );
}
