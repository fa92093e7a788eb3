use crate::math::{Point, Real};

/// The closest point of a triangle set to a query point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangleProjection {
    /// Index of the closest face.
    pub face_id: u32,
    /// The point of the face `face_id` closest to the query point.
    pub point: Point<Real>,
    /// The squared distance between the query point and `self.point`.
    pub sqr_distance: Real,
}

impl TriangleProjection {
    /// Creates a new `TriangleProjection`.
    #[inline]
    pub fn new(face_id: u32, point: Point<Real>, sqr_distance: Real) -> Self {
        Self {
            face_id,
            point,
            sqr_distance,
        }
    }

    /// The distance between the query point and `self.point`.
    #[inline]
    pub fn distance(&self) -> Real {
        self.sqr_distance.sqrt()
    }
}
