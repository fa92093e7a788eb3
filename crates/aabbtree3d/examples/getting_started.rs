extern crate nalgebra as na;

use aabbtree3d::math::{Point, Vector};
use aabbtree3d::partitioning::AabbTree;
use aabbtree3d::query::Ray;
use aabbtree3d::shape::IndexedTriangleSet;

fn main() {
    let vertices = [
        Point::new(0.0f32, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];
    let indices = [[0, 1, 2]];
    let mesh = IndexedTriangleSet::new(&vertices, &indices);
    let tree = AabbTree::from_triangle_set(&mesh);

    let ray = Ray::new(Point::new(0.2, 0.2, 1.0), -Vector::z());
    assert!(tree.cast_ray_first_hit(&mesh, &ray).is_some());
    let pt = Point::new(0.2, 0.2, 5.0);
    let expected = na::distance_squared(&pt, &Point::new(0.2, 0.2, 0.0));
    assert!((tree.squared_distance(&mesh, &pt) - expected).abs() < 1.0e-4);
}
