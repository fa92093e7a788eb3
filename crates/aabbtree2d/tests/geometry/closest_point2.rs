use aabbtree2d::math::Real;
use aabbtree2d::partitioning::AabbTree;
use aabbtree2d::shape::IndexedTriangleSet;
use approx::assert_relative_eq;
use na::{Point2, Vector2};

// Random triangles of size at most `1` in a square of side `10`.
fn random_triangles(seed: u64, n: u32) -> (Vec<Point2<Real>>, Vec<[u32; 3]>) {
    let mut rng = oorandom::Rand32::new(seed);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for i in 0..n {
        let base = Point2::new(rng.rand_float() * 10.0, rng.rand_float() * 10.0);
        vertices.push(base);
        vertices.push(base + Vector2::new(rng.rand_float() - 0.5, rng.rand_float() - 0.5));
        vertices.push(base + Vector2::new(rng.rand_float() - 0.5, rng.rand_float() - 0.5));
        indices.push([3 * i, 3 * i + 1, 3 * i + 2]);
    }

    (vertices, indices)
}

#[test]
fn closest_point_matches_brute_force_2d() {
    let (vertices, indices) = random_triangles(0, 200);
    let mesh = IndexedTriangleSet::new(&vertices, &indices);
    let tree = AabbTree::from_triangle_set(&mesh);
    tree.assert_well_formed();
    let mut rng = oorandom::Rand32::new(1);

    for _ in 0..500 {
        let pt = Point2::new(rng.rand_float() * 14.0 - 2.0, rng.rand_float() * 14.0 - 2.0);
        let expected = mesh
            .triangles()
            .map(|tri| na::distance_squared(&pt, &tri.closest_point(&pt)))
            .fold(Real::INFINITY, Real::min);

        let proj = tree.closest_point(&mesh, &pt).unwrap();
        assert_eq!(proj.sqr_distance, expected);
        assert_eq!(proj.point, mesh.triangle(proj.face_id).closest_point(&pt));

        let max_sqr_distance = 0.5;
        let in_radius: Vec<u32> = mesh
            .triangles()
            .enumerate()
            .filter(|(_, tri)| na::distance_squared(&pt, &tri.closest_point(&pt)) < max_sqr_distance)
            .map(|(i, _)| i as u32)
            .collect();
        assert_eq!(tree.triangles_in_radius(&mesh, &pt, max_sqr_distance), in_radius);
    }
}

#[test]
fn point_inside_a_triangle_is_at_zero_distance() {
    let vertices = [
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(0.0, 4.0),
        Point2::new(10.0, 10.0),
        Point2::new(11.0, 10.0),
        Point2::new(10.0, 11.0),
    ];
    let indices = [[0, 1, 2], [3, 4, 5]];
    let mesh = IndexedTriangleSet::new(&vertices, &indices);
    let tree = AabbTree::from_triangle_set(&mesh);

    let proj = tree.closest_point(&mesh, &Point2::new(1.0, 1.0)).unwrap();
    assert_eq!(proj.face_id, 0);
    assert_eq!(proj.sqr_distance, 0.0);
    assert_relative_eq!(proj.point, Point2::new(1.0, 1.0), epsilon = 1.0e-6);

    let proj = tree.closest_point(&mesh, &Point2::new(12.0, 12.0)).unwrap();
    assert_eq!(proj.face_id, 1);
    assert_relative_eq!(proj.point, Point2::new(10.5, 10.5), epsilon = 1.0e-6);
    assert_relative_eq!(proj.sqr_distance, 4.5, epsilon = 1.0e-5);
}
