use super::{AabbTree, Buildable};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use crate::shape::IndexedTriangleSet;

/// Margin added to the bounding box of each triangle when building an [`AabbTree`] from an
/// [`IndexedTriangleSet`].
///
/// This prevents rays grazing an axis-aligned triangle from missing its (flat) box because of
/// rounding errors.
pub const DEFAULT_TRIANGLE_MARGIN: Real = 1.0e-4;

/// The build record of one face of an [`IndexedTriangleSet`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleBuildable {
    /// The face index.
    pub index: u32,
    /// The loosened bounding box of the face.
    pub aabb: Aabb,
    /// The average of the three vertices of the face.
    pub centroid: Point<Real>,
}

impl TriangleBuildable {
    /// Computes the build record of the face `index` of `mesh`.
    pub fn new(mesh: &IndexedTriangleSet, index: u32, margin: Real) -> Self {
        let triangle = mesh.triangle(index);
        Self {
            index,
            aabb: triangle.local_aabb().loosened(margin),
            centroid: triangle.center(),
        }
    }
}

impl Buildable for TriangleBuildable {
    #[inline]
    fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    fn aabb(&self) -> Aabb {
        self.aabb
    }

    #[inline]
    fn centroid(&self) -> Point<Real> {
        self.centroid
    }
}

impl AabbTree {
    /// Builds a tree indexing every face of `mesh`.
    ///
    /// Each face's bounding box is enlarged by [`DEFAULT_TRIANGLE_MARGIN`].
    pub fn from_triangle_set(mesh: &IndexedTriangleSet) -> Self {
        Self::from_triangle_set_with_margin(mesh, DEFAULT_TRIANGLE_MARGIN)
    }

    /// Builds a tree indexing every face of `mesh`, enlarging each face's bounding box by
    /// `margin`.
    ///
    /// Panics if `margin` is negative.
    pub fn from_triangle_set_with_margin(mesh: &IndexedTriangleSet, margin: Real) -> Self {
        let mut result = Self::new();
        result.build_from_triangle_set(mesh, margin);
        result
    }

    /// Replaces the content of this tree by a hierarchy indexing every face of `mesh`.
    ///
    /// Panics if `margin` is negative.
    pub fn build_from_triangle_set(&mut self, mesh: &IndexedTriangleSet, margin: Real) {
        log::debug!(
            "Converting {} triangles ({} vertices) to AABB tree records.",
            mesh.num_triangles(),
            mesh.vertices().len()
        );

        let records: Vec<_> = (0..mesh.num_triangles() as u32)
            .map(|i| TriangleBuildable::new(mesh, i, margin))
            .collect();
        self.build(records);
    }
}
