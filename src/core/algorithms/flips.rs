//! Edge flips and Delaunay legalization.
//!
//! An interior edge shared by triangles `(a, b, c)` and `(b, a, d)` is
//! *illegal* when `d` lies strictly inside the circumcircle of `(a, b, c)`.
//! Flipping it replaces the diagonal `a-b` of the quadrilateral `a, d, b, c`
//! with `c-d`, which makes both new edges legal locally.
//!
//! [`legalize_edges`] drives flips from a worklist: after each flip the four
//! outer sides of the quadrilateral may have become illegal and are pushed
//! back. In exact arithmetic this terminates (Lawson); a flip budget guards
//! against cycles caused by rounding.
//!
//! # References
//! - C. L. Lawson (1977) - "Software for C¹ Surface Interpolation"
//! - Guibas & Stolfi (1985) - "Primitives for the Manipulation of General
//!   Subdivisions and the Computation of Voronoi Diagrams"

use std::fmt;

use thiserror::Error;

use crate::core::collections::EdgeWorklist;
use crate::core::edge::EdgeKey;
use crate::core::mesh::{Mesh, MeshError, PointKey, TriangleKey};
use crate::core::triangle::TriangleError;
use crate::geometry::point::Point;
use crate::geometry::predicates::{InCircle, Orientation, in_circle, orientation};
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Errors raised by flips and legalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlipError {
    /// No triangle exists yet.
    #[error("Cannot flip before the first triangle exists ({count} points stored)")]
    NotEnoughPoints {
        /// Number of points currently stored.
        count: usize,
    },
    /// The edge bounds only one triangle.
    #[error("Edge {edge:?} is on the hull and cannot be flipped")]
    BoundaryEdge {
        /// The hull edge.
        edge: EdgeKey,
    },
    /// The edge does not exist.
    #[error("Edge {edge:?} not found in mesh")]
    MissingEdge {
        /// The missing edge.
        edge: EdgeKey,
    },
    /// The two triangles do not form a strictly convex quadrilateral, so the
    /// other diagonal would leave it.
    #[error("Edge {edge:?} is the diagonal of a non-convex quadrilateral")]
    NonConvexQuadrilateral {
        /// The edge that could not be flipped.
        edge: EdgeKey,
    },
    /// Legalization exceeded its flip budget.
    #[error("Legalization did not converge after {max_flips} flips")]
    NonConvergent {
        /// The exhausted budget.
        max_flips: usize,
    },
    /// Mesh bookkeeping failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
    /// A triangle could not be read or built.
    #[error(transparent)]
    Triangle(#[from] TriangleError),
}

/// What a single flip changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipInfo {
    /// The diagonal that was removed.
    pub removed_edge: EdgeKey,
    /// The diagonal that replaced it.
    pub new_edge: EdgeKey,
    /// Triangles that were removed.
    pub removed_triangles: [TriangleKey; 2],
    /// Triangles that were created.
    pub new_triangles: [TriangleKey; 2],
    /// The four sides of the quadrilateral, which may now be illegal.
    pub outer_edges: [EdgeKey; 4],
}

/// Counters collected by [`legalize_edges`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegalizationStats {
    /// Number of worklist entries popped.
    pub edges_checked: usize,
    /// Number of flips performed.
    pub flips_performed: usize,
    /// Maximum worklist length observed.
    pub max_worklist_len: usize,
}

impl fmt::Display for LegalizationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "checked={} flips={} max_worklist={}",
            self.edges_checked, self.flips_performed, self.max_worklist_len
        )
    }
}

/// The quadrilateral around an interior edge.
///
/// `first = (a, b, c)` and `second = (b, a, d)`, both counter-clockwise.
struct Quad {
    triangles: [TriangleKey; 2],
    a: PointKey,
    b: PointKey,
    c: PointKey,
    d: PointKey,
}

fn quad_around<T: CoordinateScalar>(mesh: &Mesh<T>, edge: EdgeKey) -> Result<Quad, FlipError> {
    if !mesh.is_complete() {
        return Err(FlipError::NotEnoughPoints {
            count: mesh.number_of_points(),
        });
    }
    let record = mesh.edge(edge).ok_or(FlipError::MissingEdge { edge })?;
    let &[first, second] = record.triangles() else {
        return Err(FlipError::BoundaryEdge { edge });
    };

    let t1 = mesh
        .triangle(first)
        .ok_or(MeshError::MissingTriangle { triangle_key: first })?;
    let t2 = mesh
        .triangle(second)
        .ok_or(MeshError::MissingTriangle { triangle_key: second })?;

    let (a, b) = t1.directed_edge(edge).ok_or(MeshError::MissingEdge { edge })?;
    let c = t1.opposite_point(edge).ok_or(MeshError::MissingEdge { edge })?;
    let d = t2.opposite_point(edge).ok_or(MeshError::MissingEdge { edge })?;

    Ok(Quad {
        triangles: [first, second],
        a,
        b,
        c,
        d,
    })
}

fn coords<T: CoordinateScalar>(
    mesh: &Mesh<T>,
    key: PointKey,
) -> Result<Point<T>, FlipError> {
    mesh.point(key)
        .copied()
        .ok_or(FlipError::Triangle(TriangleError::MissingPoint { point_key: key }))
}

/// Whether `edge` satisfies the local Delaunay condition.
///
/// Hull edges are always legal. Cocircular quadrilaterals (within the
/// in-circle tolerance) are legal, which keeps legalization from flipping
/// back and forth.
///
/// # Errors
///
/// Returns [`FlipError::MissingEdge`] if the edge does not exist, or
/// [`FlipError::NotEnoughPoints`] before the first triangle.
pub fn is_edge_legal<T: CoordinateScalar>(mesh: &Mesh<T>, edge: EdgeKey) -> Result<bool, FlipError> {
    let quad = match quad_around(mesh, edge) {
        Ok(quad) => quad,
        Err(FlipError::BoundaryEdge { .. }) => return Ok(true),
        Err(err) => return Err(err),
    };
    let a = coords(mesh, quad.a)?;
    let b = coords(mesh, quad.b)?;
    let c = coords(mesh, quad.c)?;
    let d = coords(mesh, quad.d)?;
    Ok(in_circle(&a, &b, &c, &d, mesh.config().incircle_tolerance) != InCircle::INSIDE)
}

/// Replace the diagonal `edge` of its quadrilateral with the other diagonal.
///
/// The flip is performed regardless of legality; callers decide when it is
/// wanted.
///
/// # Errors
///
/// - [`FlipError::NotEnoughPoints`] before the first triangle.
/// - [`FlipError::MissingEdge`] / [`FlipError::BoundaryEdge`] if `edge` is
///   not an interior edge.
/// - [`FlipError::NonConvexQuadrilateral`] if the new triangles would be
///   degenerate or inverted.
///
/// The mesh is unchanged on any of these.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::core::algorithms::flips::flip_edge;
/// use planar_delaunay::prelude::*;
///
/// let mut mesh = Mesh::new();
/// let keys: Vec<_> = [(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (2.2, 2.2)]
///     .into_iter()
///     .map(|(x, y)| mesh.insert(Point::new(x, y)).unwrap())
///     .collect();
///
/// let diagonal = EdgeKey::new(keys[1], keys[2]);
/// let info = flip_edge(&mut mesh, diagonal).unwrap();
/// assert_eq!(info.new_edge, EdgeKey::new(keys[0], keys[3]));
/// assert!(mesh.edge(diagonal).is_none());
/// assert!(mesh.validate().is_ok());
/// ```
pub fn flip_edge<T: CoordinateScalar>(mesh: &mut Mesh<T>, edge: EdgeKey) -> Result<FlipInfo, FlipError> {
    let quad = quad_around(mesh, edge)?;
    let Quad {
        triangles,
        a,
        b,
        c,
        d,
    } = quad;

    let pa = coords(mesh, a)?;
    let pb = coords(mesh, b)?;
    let pc = coords(mesh, c)?;
    let pd = coords(mesh, d)?;
    let tolerance = mesh.config().tolerance;
    if orientation(&pc, &pa, &pd, tolerance) != Orientation::POSITIVE
        || orientation(&pc, &pd, &pb, tolerance) != Orientation::POSITIVE
    {
        return Err(FlipError::NonConvexQuadrilateral { edge });
    }

    mesh.remove_triangle(triangles[0])?;
    mesh.remove_triangle(triangles[1])?;
    let first = mesh.add_triangle([c, a, d])?;
    let second = mesh.add_triangle([c, d, b])?;

    let new_edge = EdgeKey::new(c, d);
    tracing::debug!(?edge, ?new_edge, "flip: replaced diagonal");

    Ok(FlipInfo {
        removed_edge: edge,
        new_edge,
        removed_triangles: triangles,
        new_triangles: [first, second],
        outer_edges: [
            EdgeKey::new(a, d),
            EdgeKey::new(d, b),
            EdgeKey::new(b, c),
            EdgeKey::new(c, a),
        ],
    })
}

/// Flip illegal edges until every edge reachable from `worklist` is legal.
///
/// Entries that no longer exist or lie on the hull are skipped. A
/// quadrilateral that is not strictly convex is skipped with a warning; for
/// an illegal edge this only happens under rounding noise.
///
/// # Errors
///
/// Returns [`FlipError::NonConvergent`] if more than `4·E + 16` flips are
/// needed, or a wrapped [`MeshError`] if the mesh is inconsistent.
pub fn legalize_edges<T: CoordinateScalar>(
    mesh: &mut Mesh<T>,
    mut worklist: EdgeWorklist,
) -> Result<LegalizationStats, FlipError> {
    let max_flips = 4 * mesh.number_of_edges() + 16;
    let mut stats = LegalizationStats {
        max_worklist_len: worklist.len(),
        ..LegalizationStats::default()
    };

    while let Some(edge) = worklist.pop() {
        stats.edges_checked += 1;

        let interior = mesh
            .edge(edge)
            .is_some_and(|record| !record.is_boundary());
        if !interior || is_edge_legal(mesh, edge)? {
            continue;
        }

        match flip_edge(mesh, edge) {
            Ok(info) => {
                stats.flips_performed += 1;
                if stats.flips_performed > max_flips {
                    return Err(FlipError::NonConvergent { max_flips });
                }
                worklist.extend(info.outer_edges);
                stats.max_worklist_len = stats.max_worklist_len.max(worklist.len());
            }
            Err(FlipError::NonConvexQuadrilateral { edge }) => {
                tracing::warn!(?edge, "legalize: skipping illegal edge of non-convex quadrilateral");
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(%stats, "legalize: done");
    Ok(stats)
}
