//! Boundary analysis trait for planar meshes.

use crate::core::edge::EdgeKey;
use crate::core::mesh::{MeshError, PointKey};
use thiserror::Error;

/// Errors raised while walking the mesh boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoundaryError {
    /// No triangle exists yet, so there is no boundary.
    #[error("Mesh has no triangle yet ({count} points stored)")]
    NotEnoughPoints {
        /// Number of points currently stored.
        count: usize,
    },
    /// The hull edges do not form a single closed loop through this point.
    #[error("Boundary is not a simple closed loop at point {point_key:?}")]
    BrokenBoundary {
        /// Where the walk failed.
        point_key: PointKey,
    },
    /// A boundary edge references a missing triangle.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Trait for boundary analysis operations on planar meshes.
///
/// A boundary edge bounds exactly one triangle. In a triangulation of the
/// convex hull of its points, the boundary edges are the hull edges.
///
/// # Examples
///
/// ```
/// use planar_delaunay::prelude::*;
///
/// let mut mesh = Mesh::new();
/// for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.5, 0.4)] {
///     mesh.insert(Point::new(x, y)).unwrap();
/// }
///
/// assert_eq!(mesh.number_of_boundary_edges(), 4);
/// assert_eq!(mesh.convex_hull().unwrap().len(), 4);
/// ```
pub trait BoundaryAnalysis {
    /// Keys of all boundary edges, in no particular order.
    fn boundary_edges(&self) -> Vec<EdgeKey>;

    /// Whether `edge` exists and bounds exactly one triangle.
    fn is_boundary_edge(&self, edge: EdgeKey) -> bool;

    /// Number of boundary edges.
    fn number_of_boundary_edges(&self) -> usize;

    /// Hull points in counter-clockwise order, starting at the point with
    /// the smallest `x` (then smallest `y`).
    ///
    /// Points lying on a hull edge are included.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::NotEnoughPoints`] before the first triangle,
    /// or [`BoundaryError::BrokenBoundary`] if the boundary is not one loop.
    fn convex_hull(&self) -> Result<Vec<PointKey>, BoundaryError>;
}
