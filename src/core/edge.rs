//! Edges of the planar mesh.
//!
//! An edge is identified by its canonical [`EdgeKey`]: the two endpoint
//! [`PointKey`]s with their order normalised, so `(a, b)` and `(b, a)` map to
//! the same edge. The mesh stores one [`Edge`] record per key; the record
//! keeps the endpoints in the order they were first seen (for orientation
//! queries) and the set of at most two adjacent triangles.
//!
//! ## Determinism
//!
//! `EdgeKey` ordering is derived from internal slotmap keys and is not stable
//! across processes. Sort by coordinates if a deterministic order is needed.

use crate::core::collections::EdgeTriangles;
use crate::core::mesh::{Mesh, PointKey, TriangleKey};
use crate::geometry::point::Point;
use crate::geometry::predicates::orient2d;
use crate::geometry::traits::coordinate::CoordinateScalar;
use slotmap::Key;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors raised by edge construction and edge queries.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EdgeError {
    /// Both endpoints are the same point.
    #[error("Cannot create an edge from point {point_key:?} to itself")]
    InvalidEdge {
        /// The repeated endpoint.
        point_key: PointKey,
    },
    /// The triangle passed to a neighbor query does not bound this edge.
    #[error("Triangle {triangle_key:?} is not adjacent to edge {edge:?}")]
    NotAdjacent {
        /// The queried edge.
        edge: EdgeKey,
        /// The unrelated triangle.
        triangle_key: TriangleKey,
    },
    /// The point passed to an endpoint query is not an endpoint of this edge.
    #[error("Point {point_key:?} is not an endpoint of edge {edge:?}")]
    NotAnEndpoint {
        /// The queried edge.
        edge: EdgeKey,
        /// The unrelated point.
        point_key: PointKey,
    },
    /// An endpoint key does not resolve in the mesh.
    #[error("Point {point_key:?} not found in mesh")]
    MissingPoint {
        /// The dangling key.
        point_key: PointKey,
    },
    /// A third triangle was attached to an edge.
    #[error("Edge {edge:?} already bounds two triangles; cannot attach {triangle_key:?}")]
    TriangleOverflow {
        /// The saturated edge.
        edge: EdgeKey,
        /// The triangle that did not fit.
        triangle_key: TriangleKey,
    },
}

// =============================================================================
// EDGE KEY
// =============================================================================

/// Canonical identifier for an (undirected) edge.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::core::edge::EdgeKey;
/// use planar_delaunay::core::mesh::PointKey;
/// use slotmap::KeyData;
///
/// let a = PointKey::from(KeyData::from_ffi(1));
/// let b = PointKey::from(KeyData::from_ffi(2));
/// assert_eq!(EdgeKey::new(a, b), EdgeKey::new(b, a));
/// assert_eq!(EdgeKey::new(b, a).endpoints(), (a, b));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    v0: PointKey,
    v1: PointKey,
}

impl EdgeKey {
    /// Creates a new canonical edge key.
    ///
    /// The endpoints are reordered so that `v0 <= v1` under the raw key order.
    #[must_use]
    pub fn new(a: PointKey, b: PointKey) -> Self {
        let a_raw = a.data().as_ffi();
        let b_raw = b.data().as_ffi();

        if a_raw <= b_raw {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }

    /// Returns the first (canonical) endpoint.
    #[inline]
    #[must_use]
    pub const fn v0(self) -> PointKey {
        self.v0
    }

    /// Returns the second (canonical) endpoint.
    #[inline]
    #[must_use]
    pub const fn v1(self) -> PointKey {
        self.v1
    }

    /// Returns the two endpoints as a tuple.
    #[inline]
    #[must_use]
    pub const fn endpoints(self) -> (PointKey, PointKey) {
        (self.v0, self.v1)
    }

    /// Whether `point` is one of the endpoints.
    #[inline]
    #[must_use]
    pub fn contains(self, point: PointKey) -> bool {
        self.v0 == point || self.v1 == point
    }
}

impl From<(PointKey, PointKey)> for EdgeKey {
    #[inline]
    fn from((a, b): (PointKey, PointKey)) -> Self {
        Self::new(a, b)
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// An undirected mesh edge and its adjacent triangles.
///
/// Equality and hashing go through the canonical [`EdgeKey`], so they ignore
/// endpoint order and adjacency.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::prelude::*;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.insert(Point::new(0.0, 0.0)).unwrap();
/// let b = mesh.insert(Point::new(1.0, 0.0)).unwrap();
/// mesh.insert(Point::new(0.0, 1.0)).unwrap();
///
/// let edge = mesh.edge_between(a, b).unwrap();
/// assert_eq!(edge.other_point(a).unwrap(), b);
/// assert!(edge.is_boundary());
/// assert_eq!(edge.length(&mesh).unwrap(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Edge {
    points: [PointKey; 2],
    triangles: EdgeTriangles,
}

impl Edge {
    /// Creates an edge between two distinct points, with no adjacent triangles.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeError::InvalidEdge`] if `a == b`.
    pub fn new(a: PointKey, b: PointKey) -> Result<Self, EdgeError> {
        if a == b {
            return Err(EdgeError::InvalidEdge { point_key: a });
        }
        Ok(Self {
            points: [a, b],
            triangles: EdgeTriangles::new(),
        })
    }

    /// The canonical key of this edge.
    #[inline]
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.points[0], self.points[1])
    }

    /// Endpoints in the order they were given at creation.
    #[inline]
    #[must_use]
    pub const fn points(&self) -> [PointKey; 2] {
        self.points
    }

    /// Adjacent triangles (zero to two).
    #[inline]
    #[must_use]
    pub fn triangles(&self) -> &[TriangleKey] {
        &self.triangles
    }

    /// Whether exactly one triangle is adjacent.
    #[inline]
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.triangles.len() == 1
    }

    /// Whether `point` is one of the endpoints.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: PointKey) -> bool {
        self.points.contains(&point)
    }

    /// The triangle on the other side of this edge from `triangle`.
    ///
    /// Returns `Ok(None)` for a boundary edge.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeError::NotAdjacent`] if `triangle` does not bound this edge.
    pub fn neighbor_of(&self, triangle: TriangleKey) -> Result<Option<TriangleKey>, EdgeError> {
        if !self.triangles.contains(&triangle) {
            return Err(EdgeError::NotAdjacent {
                edge: self.key(),
                triangle_key: triangle,
            });
        }
        Ok(self.triangles.iter().copied().find(|&t| t != triangle))
    }

    /// The endpoint that is not `point`.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeError::NotAnEndpoint`] if `point` is not an endpoint.
    pub fn other_point(&self, point: PointKey) -> Result<PointKey, EdgeError> {
        match self.points {
            [a, b] if a == point => Ok(b),
            [a, b] if b == point => Ok(a),
            _ => Err(EdgeError::NotAnEndpoint {
                edge: self.key(),
                point_key: point,
            }),
        }
    }

    /// Whether `point` lies strictly left of this edge directed from `start`
    /// to the other endpoint.
    ///
    /// Collinear points are not on the left.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeError::NotAnEndpoint`] if `start` is not an endpoint, or
    /// [`EdgeError::MissingPoint`] if an endpoint is not in `mesh`.
    pub fn point_on_left<T: CoordinateScalar>(
        &self,
        mesh: &Mesh<T>,
        point: &Point<T>,
        start: PointKey,
    ) -> Result<bool, EdgeError> {
        let end = self.other_point(start)?;
        let start_point = lookup(mesh, start)?;
        let end_point = lookup(mesh, end)?;
        Ok(orient2d(start_point, end_point, point) > T::zero())
    }

    /// The triangle adjacent to both this edge and `other`, if any.
    #[must_use]
    pub fn shared_triangle_with_edge(&self, other: &Self) -> Option<TriangleKey> {
        self.triangles
            .iter()
            .copied()
            .find(|t| other.triangles.contains(t))
    }

    /// Euclidean distance between the endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeError::MissingPoint`] if an endpoint is not in `mesh`.
    pub fn length<T: CoordinateScalar>(&self, mesh: &Mesh<T>) -> Result<T, EdgeError> {
        let a = lookup(mesh, self.points[0])?;
        let b = lookup(mesh, self.points[1])?;
        Ok(a.distance(b))
    }

    pub(crate) fn attach_triangle(&mut self, triangle: TriangleKey) -> Result<(), EdgeError> {
        if self.triangles.contains(&triangle) {
            return Ok(());
        }
        if self.triangles.len() >= 2 {
            return Err(EdgeError::TriangleOverflow {
                edge: self.key(),
                triangle_key: triangle,
            });
        }
        self.triangles.push(triangle);
        Ok(())
    }

    /// Returns whether `triangle` was attached.
    pub(crate) fn detach_triangle(&mut self, triangle: TriangleKey) -> bool {
        let before = self.triangles.len();
        self.triangles.retain(|t| *t != triangle);
        self.triangles.len() != before
    }
}

fn lookup<T: CoordinateScalar>(mesh: &Mesh<T>, key: PointKey) -> Result<&Point<T>, EdgeError> {
    mesh.point(key)
        .ok_or(EdgeError::MissingPoint { point_key: key })
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
