use aabbtree3d::partitioning::AabbTree;
use aabbtree3d::query::Ray;
use aabbtree3d::shape::IndexedTriangleSet;
use approx::assert_relative_eq;
use na::{Point3, Vector3};

fn unit_triangle() -> (Vec<Point3<f32>>, Vec<[u32; 3]>) {
    (
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2]],
    )
}

#[test]
fn unit_triangle_queries() {
    let (vertices, indices) = unit_triangle();
    let mesh = IndexedTriangleSet::new(&vertices, &indices);
    let tree = AabbTree::from_triangle_set(&mesh);

    assert_eq!(tree.nodes().len(), 4);
    assert_eq!(tree.leaf_count(), 1);
    assert_eq!(tree.depth(), 0);

    let ray = Ray::new(Point3::new(0.2, 0.2, 1.0), Vector3::new(0.0, 0.0, -1.0));
    let hit = tree.cast_ray_first_hit(&mesh, &ray).unwrap();
    assert_eq!(hit.face_id, 0);
    assert_relative_eq!(hit.time_of_impact, 1.0, epsilon = 1.0e-6);
    assert!(hit.u >= 0.0 && hit.v >= 0.0 && hit.u + hit.v <= 1.0);
    assert_relative_eq!(
        ray.point_at(hit.time_of_impact),
        vertices[0] * (1.0 - hit.u - hit.v) + vertices[1].coords * hit.u + vertices[2].coords * hit.v,
        epsilon = 1.0e-6
    );

    let all_hits = tree.cast_ray_all_hits(&mesh, &ray);
    assert_eq!(all_hits, [hit]);

    let miss = Ray::new(Point3::new(5.0, 5.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
    assert!(tree.cast_ray_first_hit(&mesh, &miss).is_none());
    assert!(tree.cast_ray_all_hits(&mesh, &miss).is_empty());

    let proj = tree
        .closest_point(&mesh, &Point3::new(0.2, 0.2, 5.0))
        .unwrap();
    assert_eq!(proj.face_id, 0);
    assert_relative_eq!(proj.point, Point3::new(0.2, 0.2, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(proj.sqr_distance, 25.0, epsilon = 1.0e-4);
    assert_relative_eq!(
        tree.squared_distance(&mesh, &Point3::new(0.2, 0.2, 5.0)),
        25.0,
        epsilon = 1.0e-4
    );
}

#[test]
fn empty_mesh() {
    let mesh = IndexedTriangleSet::new(&[], &[]);
    let tree = AabbTree::from_triangle_set(&mesh);
    let ray = Ray::new(Point3::origin(), Vector3::x());

    assert!(tree.is_empty());
    assert!(tree.cast_ray_first_hit(&mesh, &ray).is_none());
    assert!(tree.cast_ray_all_hits(&mesh, &ray).is_empty());
    assert!(tree.closest_point(&mesh, &Point3::origin()).is_none());
    assert_eq!(tree.squared_distance(&mesh, &Point3::origin()), f32::INFINITY);
}
