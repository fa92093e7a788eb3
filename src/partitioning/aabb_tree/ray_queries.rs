use ordered_float::OrderedFloat;

use super::AabbTree;
use crate::math::Real;
use crate::query::{ray_triangle_intersection, Ray, RayHit};
use crate::shape::IndexedTriangleSet;

impl AabbTree {
    /// Computes the hit of `ray` with the face of `mesh` closest to the ray origin.
    ///
    /// `mesh` must be the triangle set this tree was built from. Only hits with a strictly
    /// positive time of impact are considered. Among hits with the exact same time of impact,
    /// the one found first during the depth-first traversal is kept.
    pub fn cast_ray_first_hit(&self, mesh: &IndexedTriangleSet, ray: &Ray) -> Option<RayHit> {
        self.cast_ray_first_hit_recursive(mesh, ray, 0, Real::MAX)
    }

    /// Computes every hit of `ray` with the faces of `mesh`, sorted by increasing time of impact.
    ///
    /// `mesh` must be the triangle set this tree was built from. Only hits with a strictly
    /// positive time of impact are reported. A face crossed exactly on an edge shared with
    /// another face is reported once for each face.
    pub fn cast_ray_all_hits(&self, mesh: &IndexedTriangleSet, ray: &Ray) -> Vec<RayHit> {
        let mut hits = Vec::new();
        self.cast_ray_all_hits_recursive(mesh, ray, 0, &mut hits);
        hits.sort_by_key(|hit| OrderedFloat(hit.time_of_impact));
        hits
    }

    fn cast_ray_first_hit_recursive(
        &self,
        mesh: &IndexedTriangleSet,
        ray: &Ray,
        node_id: usize,
        max_toi: Real,
    ) -> Option<RayHit> {
        let node = self.nodes.get(node_id)?;

        if !node.is_valid() {
            return None;
        }

        let _ = node.aabb.clip_ray(ray, 0.0, max_toi)?;

        if let Some(face_id) = node.primitive() {
            let tri = mesh.triangle(face_id);
            return match ray_triangle_intersection(&tri.a, &tri.b, &tri.c, ray) {
                Some((toi, u, v)) if toi > 0.0 => Some(RayHit::new(face_id, toi, u, v)),
                _ => None,
            };
        }

        // The left hit, if any, bounds the search in the right subtree.
        let mut best = None;
        let mut min_toi = max_toi;

        for child in [Self::left_child(node_id), Self::right_child(node_id)] {
            if let Some(hit) = self.cast_ray_first_hit_recursive(mesh, ray, child, min_toi) {
                if hit.time_of_impact < min_toi {
                    min_toi = hit.time_of_impact;
                    best = Some(hit);
                }
            }
        }

        best
    }

    fn cast_ray_all_hits_recursive(
        &self,
        mesh: &IndexedTriangleSet,
        ray: &Ray,
        node_id: usize,
        hits: &mut Vec<RayHit>,
    ) {
        let Some(node) = self.nodes.get(node_id) else {
            return;
        };

        if !node.is_valid() || node.aabb.clip_ray(ray, 0.0, Real::MAX).is_none() {
            return;
        }

        if let Some(face_id) = node.primitive() {
            let tri = mesh.triangle(face_id);
            if let Some((toi, u, v)) = ray_triangle_intersection(&tri.a, &tri.b, &tri.c, ray) {
                if toi > 0.0 {
                    hits.push(RayHit::new(face_id, toi, u, v));
                }
            }
            return;
        }

        self.cast_ray_all_hits_recursive(mesh, ray, Self::left_child(node_id), hits);
        self.cast_ray_all_hits_recursive(mesh, ray, Self::right_child(node_id), hits);
    }
}
