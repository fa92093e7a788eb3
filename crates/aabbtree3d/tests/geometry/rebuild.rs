use aabbtree3d::math::{Point, Vector};
use aabbtree3d::partitioning::{AabbTree, DEFAULT_TRIANGLE_MARGIN};
use aabbtree3d::query::Ray;
use aabbtree3d::shape::IndexedTriangleSet;

use super::random_triangle_soup;

#[test]
fn rebuilt_tree_answers_like_a_fresh_one() {
    let (vertices, indices) = random_triangle_soup(30, 500);
    let mesh = IndexedTriangleSet::new(&vertices, &indices);
    let fresh = AabbTree::from_triangle_set(&mesh);

    // Rebuild a tree that first indexed the faces in reverse order.
    let reversed: Vec<_> = indices.iter().rev().copied().collect();
    let reversed_mesh = IndexedTriangleSet::new(&vertices, &reversed);
    let mut rebuilt = AabbTree::from_triangle_set(&reversed_mesh);
    rebuilt.build_from_triangle_set(&mesh, DEFAULT_TRIANGLE_MARGIN);
    rebuilt.assert_well_formed();
    assert_eq!(rebuilt.leaf_count(), fresh.leaf_count());

    let mut rng = oorandom::Rand32::new(31);
    let mut num_hits = 0;

    for _ in 0..300 {
        let origin = Point::from(Vector::from_fn(|_, _| rng.rand_float() * 14.0 - 2.0));
        let target = mesh.triangle(rng.rand_range(0..500)).center();
        let ray = Ray::new(origin, target - origin);

        let expected = fresh.cast_ray_first_hit(&mesh, &ray);
        let found = rebuilt.cast_ray_first_hit(&mesh, &ray);
        assert_eq!(expected, found);
        num_hits += found.is_some() as usize;

        let mut expected = fresh.cast_ray_all_hits(&mesh, &ray);
        let mut found = rebuilt.cast_ray_all_hits(&mesh, &ray);
        expected.sort_by_key(|hit| hit.face_id);
        found.sort_by_key(|hit| hit.face_id);
        assert_eq!(expected, found);

        assert_eq!(
            fresh.squared_distance(&mesh, &origin),
            rebuilt.squared_distance(&mesh, &origin)
        );
    }

    assert!(num_hits > 100);
}
