use aabbtree3d::math::{Point, Vector};
use aabbtree3d::partitioning::AabbTree;
use aabbtree3d::query::{ray_triangle_intersection, Ray, RayHit};
use aabbtree3d::shape::IndexedTriangleSet;
use approx::assert_relative_eq;

use super::random_triangle_soup;

fn brute_force_hits(mesh: &IndexedTriangleSet, ray: &Ray) -> Vec<RayHit> {
    mesh.triangles()
        .enumerate()
        .filter_map(|(i, tri)| {
            let (toi, u, v) = ray_triangle_intersection(&tri.a, &tri.b, &tri.c, ray)?;
            (toi > 0.0).then(|| RayHit::new(i as u32, toi, u, v))
        })
        .collect()
}

fn random_rays(seed: u64, n: usize) -> Vec<Ray> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..n)
        .map(|_| {
            let origin = Point::from(Vector::from_fn(|_, _| rng.rand_float() * 14.0 - 2.0));
            let target = Point::from(Vector::from_fn(|_, _| rng.rand_float() * 10.0));
            Ray::new(origin, target - origin)
        })
        .collect()
}

#[test]
fn first_hit_matches_brute_force() {
    let (vertices, indices) = random_triangle_soup(0, 1000);
    let mesh = IndexedTriangleSet::new(&vertices, &indices);
    let tree = AabbTree::from_triangle_set(&mesh);
    tree.assert_well_formed();

    let mut num_hits = 0;

    for ray in random_rays(1, 500) {
        let expected = brute_force_hits(&mesh, &ray)
            .into_iter()
            .min_by(|a, b| a.time_of_impact.total_cmp(&b.time_of_impact));
        let found = tree.cast_ray_first_hit(&mesh, &ray);

        match (expected, found) {
            (None, None) => {}
            (Some(expected), Some(found)) => {
                num_hits += 1;
                assert_eq!(expected.time_of_impact, found.time_of_impact);
                assert_eq!(expected.face_id, found.face_id);
            }
            _ => panic!("Tree and brute force disagree for {:?}: {:?} vs. {:?}", ray, expected, found),
        }
    }

    // Make sure the test is not vacuous.
    assert!(num_hits > 50);
}

#[test]
fn all_hits_match_brute_force() {
    let (vertices, indices) = random_triangle_soup(2, 1000);
    let mesh = IndexedTriangleSet::new(&vertices, &indices);
    let tree = AabbTree::from_triangle_set(&mesh);

    for ray in random_rays(3, 500) {
        let hits = tree.cast_ray_all_hits(&mesh, &ray);

        assert!(hits
            .windows(2)
            .all(|pair| pair[0].time_of_impact <= pair[1].time_of_impact));
        assert!(hits.iter().all(|hit| hit.time_of_impact > 0.0));

        let mut found: Vec<_> = hits.iter().map(|hit| hit.face_id).collect();
        let mut expected: Vec<_> = brute_force_hits(&mesh, &ray)
            .iter()
            .map(|hit| hit.face_id)
            .collect();
        found.sort_unstable();
        expected.sort_unstable();
        assert_eq!(found, expected);

        if let Some(first) = hits.first() {
            let nearest = tree.cast_ray_first_hit(&mesh, &ray).unwrap();
            assert_eq!(first.time_of_impact, nearest.time_of_impact);
        }
    }
}

#[test]
fn ray_starting_on_a_face_ignores_it() {
    // Two parallel faces: the ray starts on a vertex of the lower one and must reach the upper one.
    let vertices = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(-1.0, -1.0, 2.0),
        Point::new(2.0, -1.0, 2.0),
        Point::new(-1.0, 2.0, 2.0),
    ];
    let indices = [[0, 1, 2], [3, 4, 5]];
    let mesh = IndexedTriangleSet::new(&vertices, &indices);
    let tree = AabbTree::from_triangle_set(&mesh);

    let lower = mesh.triangle(0);
    let ray = Ray::new(lower.a, lower.scaled_normal());
    let hit = tree.cast_ray_first_hit(&mesh, &ray).unwrap();
    assert_eq!(hit.face_id, 1);
    assert_relative_eq!(hit.time_of_impact, 2.0, epsilon = 1.0e-6);
    assert_eq!(tree.cast_ray_all_hits(&mesh, &ray), [hit]);

    let (vertices, indices) = random_triangle_soup(4, 300);
    let mesh = IndexedTriangleSet::new(&vertices, &indices);
    let tree = AabbTree::from_triangle_set(&mesh);

    for i in 0..mesh.num_triangles() as u32 {
        let tri = mesh.triangle(i);
        // Start exactly on a vertex of the face.
        let ray = Ray::new(tri.a, tri.scaled_normal());

        let expected = brute_force_hits(&mesh, &ray)
            .into_iter()
            .min_by(|a, b| a.time_of_impact.total_cmp(&b.time_of_impact));
        let found = tree.cast_ray_first_hit(&mesh, &ray);
        assert_eq!(expected, found);

        if let Some(hit) = found {
            assert!(hit.time_of_impact > 0.0);
            assert_ne!(hit.face_id, i);
        }
    }
}
