//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction.
///
/// # Direction Vector
///
/// The direction can be any non-zero vector:
/// - **Normalized**: `dir` with length 1.0 gives times-of-impact in world units
/// - **Not normalized**: times-of-impact are scaled by `1 / dir.norm()`
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use aabbtree3d::query::Ray;
/// use aabbtree3d::na::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
///
/// assert_eq!(ray.point_at(5.0), Point3::new(5.0, 0.0, 0.0));
/// assert_eq!(ray.point_at(0.0), ray.origin);
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Computes the point at the given parameter on this line.
    ///
    /// This computes `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// A triangle hit by a ray.
///
/// The hit point is `ray.point_at(hit.time_of_impact)`, or equivalently
/// `a * (1 - u - v) + b * u + c * v` where `a`, `b`, `c` are the vertices of the face
/// `face_id`, in the order given by the index buffer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayHit {
    /// Index of the face that was hit.
    pub face_id: u32,
    /// The time of impact of the ray with the face.
    ///
    /// Always strictly positive: intersections at, or behind, the ray origin are not hits.
    pub time_of_impact: Real,
    /// Barycentric coordinate of the hit point relative to the second vertex of the face.
    pub u: Real,
    /// Barycentric coordinate of the hit point relative to the third vertex of the face.
    pub v: Real,
}

impl RayHit {
    /// Creates a new `RayHit`.
    #[inline]
    pub fn new(face_id: u32, time_of_impact: Real, u: Real, v: Real) -> Self {
        Self {
            face_id,
            time_of_impact,
            u,
            v,
        }
    }
}
