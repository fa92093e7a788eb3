use crate::math::{Point, Real};
use crate::query::Ray;

/// Determinant below which a ray is considered parallel to a triangle.
const PARALLEL_EPSILON: Real = 1.0e-6;

/// Computes the intersection between a ray and the triangle `(a, b, c)`.
///
/// Both sides of the triangle are considered. If the line supporting the ray crosses the
/// triangle, returns the time of impact `t` and the barycentric coordinates `(u, v)` of the
/// intersection point relative to `b` and `c`, so that the intersection is
/// `a * (1 - u - v) + b * u + c * v`.
///
/// The returned time of impact may be negative or zero, i.e., the intersection may lie behind
/// the ray origin. Filtering those out is up to the caller.
pub fn ray_triangle_intersection(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    ray: &Ray,
) -> Option<(Real, Real, Real)> {
    let ab = b - a;
    let ac = c - a;

    let pvec = ray.dir.cross(&ac);
    let det = ab.dot(&pvec);

    // the ray direction lies in the plane of the triangle
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - a;

    let u = tvec.dot(&pvec) * inv_det;
    if u < 0.0 || u > 1.0 {
        return None;
    }

    let qvec = tvec.cross(&ab);
    let v = ray.dir.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let toi = ac.dot(&qvec) * inv_det;

    Some((toi, u, v))
}
