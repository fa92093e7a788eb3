//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always parallel to the
/// coordinate axes, which makes intersection, inclusion and distance tests a handful of
/// coordinate comparisons.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis
/// - **maxs**: The point with the largest coordinates on each axis
/// - **Invariant**: `mins[i] ≤ maxs[i]` for every axis `i` (except for
///   [`Aabb::new_invalid`], which is only meant as a starting value for merges)
///
/// # Use in the tree
///
/// Every node of an [`AabbTree`](crate::partitioning::AabbTree) stores one `Aabb`. Leaf boxes
/// are usually [loosened](BoundingVolume::loosened) by a small margin so that rounding errors
/// during ray-casting or distance computations never make the traversal miss a primitive
/// lying exactly on a box face.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use aabbtree3d::bounding_volume::{Aabb, BoundingVolume};
/// use aabbtree3d::na::Point3;
///
/// let aabb = Aabb::from_points([
///     Point3::new(1.0, 2.0, 3.0),
///     Point3::new(-1.0, 4.0, 2.0),
///     Point3::new(0.0, 0.0, 5.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
/// assert!(aabb.contains_local_point(&Point3::new(0.0, 1.0, 3.0)));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new Aabb.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid `Aabb` with `mins` components set to `Real::MAX` and `maxs`
    /// components set to `-Real::MAX`.
    ///
    /// This is often used as the initial values of some `Aabb` merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new `Aabb` from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new `Aabb` tightly enclosing a set of points.
    ///
    /// Returns [`Aabb::new_invalid`] if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(pt);
        }

        result
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this `Aabb`.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = 0.5;
        (self.maxs - self.mins) * half
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The index of the axis along which this `Aabb` is the widest.
    ///
    /// Ties are resolved in favor of the smallest axis index.
    #[inline]
    pub fn largest_axis(&self) -> usize {
        self.extents().imax()
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Does this AABB contains a point expressed in the same coordinate frame as `self`?
    ///
    /// Points lying exactly on the boundary are considered inside.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The squared distance between `point` and the exterior of this `Aabb`.
    ///
    /// This is zero if `point` lies inside (or on the boundary of) this box. It is a lower bound
    /// of the squared distance between `point` and anything contained by this box.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use aabbtree3d::bounding_volume::Aabb;
    /// use aabbtree3d::na::Point3;
    ///
    /// let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    ///
    /// assert_eq!(aabb.squared_distance_to_local_point(&Point3::new(0.5, 0.5, 0.5)), 0.0);
    /// assert_eq!(aabb.squared_distance_to_local_point(&Point3::new(3.0, 0.5, 0.5)), 4.0);
    /// # }
    /// ```
    #[inline]
    pub fn squared_distance_to_local_point(&self, point: &Point<Real>) -> Real {
        let mins_point = self.mins - point;
        let point_maxs = point - self.maxs;
        let shift = mins_point.sup(&point_maxs).sup(&Vector::zeros());

        shift.norm_squared()
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}
