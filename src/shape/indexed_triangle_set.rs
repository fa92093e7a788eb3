//! A borrowed view over an indexed triangle set.

use crate::math::{Point, Real};
use crate::shape::Triangle;

/// Indicated an inconsistency while creating an [`IndexedTriangleSet`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexedTriangleSetError {
    /// A face references a vertex that does not exist.
    #[error("the face {face} references the vertex {vertex} but there are only {num_vertices} vertices.")]
    VertexIndexOutOfBounds {
        /// The face with the invalid index.
        face: u32,
        /// The out-of-bounds vertex index.
        vertex: u32,
        /// The number of vertices of the set.
        num_vertices: usize,
    },
}

/// A triangle mesh given as a vertex buffer and a buffer of index triples, both owned by the
/// caller.
///
/// This is the mesh representation consumed by every query of
/// [`AabbTree`](crate::partitioning::AabbTree): the tree only stores face indices, so the same
/// (unmodified) `IndexedTriangleSet` the tree was built from must be given back to each query.
#[derive(Copy, Clone, Debug)]
pub struct IndexedTriangleSet<'a> {
    vertices: &'a [Point<Real>],
    indices: &'a [[u32; 3]],
}

impl<'a> IndexedTriangleSet<'a> {
    /// Creates a view over the given vertex and index buffers.
    ///
    /// Index bounds are only checked in debug builds. Use [`IndexedTriangleSet::try_new`] for
    /// buffers coming from untrusted sources.
    pub fn new(vertices: &'a [Point<Real>], indices: &'a [[u32; 3]]) -> Self {
        debug_assert!(
            Self::check_indices(vertices, indices).is_ok(),
            "Found a vertex index out of bounds."
        );
        Self { vertices, indices }
    }

    /// Creates a view over the given vertex and index buffers, checking that every index
    /// references an existing vertex.
    pub fn try_new(
        vertices: &'a [Point<Real>],
        indices: &'a [[u32; 3]],
    ) -> Result<Self, IndexedTriangleSetError> {
        Self::check_indices(vertices, indices)?;
        Ok(Self { vertices, indices })
    }

    fn check_indices(
        vertices: &[Point<Real>],
        indices: &[[u32; 3]],
    ) -> Result<(), IndexedTriangleSetError> {
        for (face, idx) in indices.iter().enumerate() {
            if let Some(vertex) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(IndexedTriangleSetError::VertexIndexOutOfBounds {
                    face: face as u32,
                    vertex: *vertex,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(())
    }

    /// The vertex buffer of this triangle set.
    #[inline]
    pub fn vertices(&self) -> &'a [Point<Real>] {
        self.vertices
    }

    /// The index buffer of this triangle set.
    #[inline]
    pub fn indices(&self) -> &'a [[u32; 3]] {
        self.indices
    }

    /// The number of triangles of this set.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Does this set contain no triangle?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Get the `i`-th triangle of this set.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this set.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i))
    }
}
