use super::AabbTree;
use crate::math::{Point, Real};
use crate::query::TriangleProjection;
use crate::shape::IndexedTriangleSet;

/// The best candidate found so far by a closest-point traversal.
struct ClosestPointAccumulator {
    /// Squared distance to `best`, or the initial search bound if nothing was found yet.
    up_sqr_d: Real,
    best: Option<(u32, Point<Real>)>,
}

impl ClosestPointAccumulator {
    fn new(max_sqr_distance: Real) -> Self {
        Self {
            up_sqr_d: max_sqr_distance,
            best: None,
        }
    }

    fn into_projection(self) -> Option<TriangleProjection> {
        let (face_id, point) = self.best?;
        Some(TriangleProjection::new(face_id, point, self.up_sqr_d))
    }
}

impl AabbTree {
    /// Computes the point of `mesh` closest to `point`.
    ///
    /// `mesh` must be the triangle set this tree was built from. Returns `None` if this tree is
    /// empty. Among several faces at the exact same distance, the one found first during the
    /// traversal is kept.
    pub fn closest_point(
        &self,
        mesh: &IndexedTriangleSet,
        point: &Point<Real>,
    ) -> Option<TriangleProjection> {
        self.closest_point_within(mesh, point, Real::INFINITY)
    }

    /// Computes the point of `mesh` closest to `point`, ignoring faces whose squared distance to
    /// `point` is not strictly smaller than `max_sqr_distance`.
    pub fn closest_point_within(
        &self,
        mesh: &IndexedTriangleSet,
        point: &Point<Real>,
        max_sqr_distance: Real,
    ) -> Option<TriangleProjection> {
        let mut acc = ClosestPointAccumulator::new(max_sqr_distance);
        self.closest_point_recursive(mesh, point, 0, 0.0, &mut acc);
        acc.into_projection()
    }

    /// The squared distance between `point` and `mesh`.
    ///
    /// Returns `Real::INFINITY` if this tree is empty.
    pub fn squared_distance(&self, mesh: &IndexedTriangleSet, point: &Point<Real>) -> Real {
        self.closest_point(mesh, point)
            .map(|proj| proj.sqr_distance)
            .unwrap_or(Real::INFINITY)
    }

    /// Is there any face of `mesh` whose squared distance to `point` is strictly smaller than
    /// `max_sqr_distance`?
    pub fn is_any_triangle_in_radius(
        &self,
        mesh: &IndexedTriangleSet,
        point: &Point<Real>,
        max_sqr_distance: Real,
    ) -> bool {
        let mut found = false;
        let _ = self.visit_triangles_in_radius(mesh, point, max_sqr_distance, 0, &mut |_| {
            found = true;
            false
        });
        found
    }

    /// The indices of every face of `mesh` whose squared distance to `point` is strictly smaller
    /// than `max_sqr_distance`, in increasing order.
    pub fn triangles_in_radius(
        &self,
        mesh: &IndexedTriangleSet,
        point: &Point<Real>,
        max_sqr_distance: Real,
    ) -> Vec<u32> {
        let mut result = Vec::new();
        let _ = self.visit_triangles_in_radius(mesh, point, max_sqr_distance, 0, &mut |face_id| {
            result.push(face_id);
            true
        });
        result.sort_unstable();
        result
    }

    fn closest_point_recursive(
        &self,
        mesh: &IndexedTriangleSet,
        point: &Point<Real>,
        node_id: usize,
        low_sqr_d: Real,
        acc: &mut ClosestPointAccumulator,
    ) {
        let Some(node) = self.nodes.get(node_id) else {
            return;
        };

        if !node.is_valid() || low_sqr_d > acc.up_sqr_d {
            return;
        }

        if let Some(face_id) = node.primitive() {
            let proj = mesh.triangle(face_id).closest_point(point);
            let sqr_d = na::distance_squared(point, &proj);

            if sqr_d < acc.up_sqr_d {
                acc.up_sqr_d = sqr_d;
                acc.best = Some((face_id, proj));
            }

            return;
        }

        let children = [Self::left_child(node_id), Self::right_child(node_id)];
        let mut looked = [false; 2];

        // Children containing the point may hold the closest face: descend into them first to
        // shrink the bound as early as possible.
        for (child, looked) in children.iter().zip(looked.iter_mut()) {
            if let Some(child_node) = self.nodes.get(*child) {
                if child_node.is_valid() && child_node.aabb.contains_local_point(point) {
                    self.closest_point_recursive(mesh, point, *child, 0.0, acc);
                    *looked = true;
                }
            }
        }

        let mut remaining = [(Real::INFINITY, 0usize); 2];
        let mut num_remaining = 0;

        for (child, looked) in children.iter().zip(looked.iter()) {
            if *looked {
                continue;
            }

            if let Some(child_node) = self.nodes.get(*child) {
                if child_node.is_valid() {
                    let sqr_d = child_node.aabb.squared_distance_to_local_point(point);
                    remaining[num_remaining] = (sqr_d, *child);
                    num_remaining += 1;
                }
            }
        }

        let remaining = &mut remaining[..num_remaining];
        if remaining.len() == 2 && remaining[1].0 < remaining[0].0 {
            remaining.swap(0, 1);
        }

        for (sqr_d, child) in remaining.iter() {
            // The bound may have shrunk while visiting the previous child.
            if *sqr_d < acc.up_sqr_d {
                self.closest_point_recursive(mesh, point, *child, *sqr_d, acc);
            }
        }
    }

    // Calls `f` on each face closer than the bound until it returns `false`. Returns `false` if
    // the visit was interrupted.
    fn visit_triangles_in_radius(
        &self,
        mesh: &IndexedTriangleSet,
        point: &Point<Real>,
        max_sqr_distance: Real,
        node_id: usize,
        f: &mut impl FnMut(u32) -> bool,
    ) -> bool {
        let Some(node) = self.nodes.get(node_id) else {
            return true;
        };

        if !node.is_valid() || node.aabb.squared_distance_to_local_point(point) >= max_sqr_distance
        {
            return true;
        }

        if let Some(face_id) = node.primitive() {
            let proj = mesh.triangle(face_id).closest_point(point);

            if na::distance_squared(point, &proj) < max_sqr_distance {
                return f(face_id);
            }

            return true;
        }

        self.visit_triangles_in_radius(mesh, point, max_sqr_distance, Self::left_child(node_id), f)
            && self.visit_triangles_in_radius(
                mesh,
                point,
                max_sqr_distance,
                Self::right_child(node_id),
                f,
            )
    }
}
