//! Point location for planar triangulations.
//!
//! Implements a visibility walk: starting from a hint triangle, repeatedly
//! cross the side the query point lies strictly beyond until the point is
//! inside (or on the boundary of) the current triangle, or the walk leaves
//! the mesh through a hull edge.
//!
//! On a Delaunay triangulation the walk always terminates. Floating-point
//! noise near cocircular configurations can still make it wander, so it runs
//! under a step budget and falls back to scanning every triangle.
//!
//! # References
//!
//! - O. Devillers, S. Pion, and M. Teillaud, "Walking in a Triangulation",
//!   International Journal of Foundations of Computer Science, 2001.

use crate::core::edge::EdgeKey;
use crate::core::mesh::{Mesh, MeshError, PointKey, TriangleKey};
use crate::core::triangle::{PointPosition, TriangleError};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Extra steps granted on top of the triangle count before the walk gives up.
const WALK_STEP_MARGIN: usize = 8;

/// Result of a point location query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateResult {
    /// Point is strictly inside the triangle
    InsideTriangle(TriangleKey),
    /// Point is on an edge (within tolerance)
    OnEdge(EdgeKey),
    /// Point coincides with an existing point (within tolerance)
    OnPoint(PointKey),
    /// Point is outside the convex hull
    Outside,
}

/// Error during point location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    /// No triangle exists yet.
    #[error("Cannot locate a point before the first triangle exists ({count} points stored)")]
    NotEnoughPoints {
        /// Number of points currently stored
        count: usize,
    },

    /// A triangle or edge reached by the walk is missing.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A triangle reached by the walk references a missing point.
    #[error(transparent)]
    Triangle(#[from] TriangleError),
}

/// Locate `point` in `mesh`, starting the walk at `hint` when it is still a
/// live triangle.
///
/// # Errors
///
/// Returns [`LocateError::NotEnoughPoints`] if the mesh has no triangle, or a
/// wrapped [`MeshError`] / [`TriangleError`] if the mesh is inconsistent.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::core::algorithms::locate::{LocateResult, locate};
/// use planar_delaunay::prelude::*;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.insert(Point::new(0.0, 0.0)).unwrap();
/// let b = mesh.insert(Point::new(4.0, 0.0)).unwrap();
/// mesh.insert(Point::new(0.0, 4.0)).unwrap();
///
/// let on_edge = locate(&mesh, &Point::new(2.0, 0.0), None).unwrap();
/// assert_eq!(on_edge, LocateResult::OnEdge(EdgeKey::new(a, b)));
/// ```
pub fn locate<T: CoordinateScalar>(
    mesh: &Mesh<T>,
    point: &Point<T>,
    hint: Option<TriangleKey>,
) -> Result<LocateResult, LocateError> {
    let Some(start) = hint
        .filter(|&key| mesh.triangle(key).is_some())
        .or_else(|| mesh.triangles().next().map(|(key, _)| key))
    else {
        return Err(LocateError::NotEnoughPoints {
            count: mesh.number_of_points(),
        });
    };

    let max_steps = mesh
        .config()
        .max_walk_steps
        .unwrap_or(mesh.number_of_triangles() + WALK_STEP_MARGIN);

    let mut current = start;
    for _ in 0..max_steps {
        let triangle = mesh
            .triangle(current)
            .ok_or(MeshError::MissingTriangle { triangle_key: current })?;

        match triangle.classify_point(mesh, point)? {
            PointPosition::Inside => return Ok(LocateResult::InsideTriangle(current)),
            PointPosition::OnEdge(edge) => return Ok(LocateResult::OnEdge(edge)),
            PointPosition::OnVertex(vertex) => return Ok(LocateResult::OnPoint(vertex)),
            PointPosition::Outside(edge) => {
                let record = mesh.edge(edge).ok_or(MeshError::MissingEdge { edge })?;
                match record.neighbor_of(current).map_err(MeshError::from)? {
                    Some(next) => current = next,
                    None => return Ok(LocateResult::Outside),
                }
            }
        }
    }

    tracing::warn!(
        max_steps,
        triangles = mesh.number_of_triangles(),
        "locate: walk exceeded step budget; falling back to full scan"
    );
    locate_by_scan(mesh, point)
}

/// Locate `point` by classifying it against every triangle.
///
/// A vertex hit wins over an edge hit, which wins over an interior hit, so
/// the result does not depend on iteration order for points near shared
/// features.
///
/// # Errors
///
/// Same as [`locate`].
pub fn locate_by_scan<T: CoordinateScalar>(
    mesh: &Mesh<T>,
    point: &Point<T>,
) -> Result<LocateResult, LocateError> {
    if !mesh.is_complete() {
        return Err(LocateError::NotEnoughPoints {
            count: mesh.number_of_points(),
        });
    }

    let mut best = LocateResult::Outside;
    for (key, triangle) in mesh.triangles() {
        match triangle.classify_point(mesh, point)? {
            PointPosition::OnVertex(vertex) => return Ok(LocateResult::OnPoint(vertex)),
            PointPosition::OnEdge(edge) => best = LocateResult::OnEdge(edge),
            PointPosition::Inside if best == LocateResult::Outside => {
                best = LocateResult::InsideTriangle(key);
            }
            PointPosition::Inside | PointPosition::Outside(_) => {}
        }
    }
    Ok(best)
}
