//! Triangles (faces) of the planar mesh.
//!
//! A [`Triangle`] stores its three [`PointKey`]s in counter-clockwise order and
//! the [`EdgeKey`]s of its sides, with `edges()[i]` opposite `points()[i]`.
//! Directed counter-clockwise, every side has the interior on its left, which
//! is what point location and hull visibility rely on.

use crate::core::edge::EdgeKey;
use crate::core::mesh::{Mesh, PointKey};
use crate::geometry::point::Point;
use crate::geometry::predicates::{InCircle, Orientation, in_circle, orientation, signed_distance_to_line};
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::geometry::util::{Circumcircle, CircumcenterError, signed_area};
use std::cmp::Ordering;
use thiserror::Error;

/// Errors raised by triangle construction and triangle queries.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriangleError {
    /// The three points are collinear within the mesh tolerance.
    #[error("Degenerate triangle: points {points:?} are collinear")]
    DegenerateTriangle {
        /// The offending point keys.
        points: [PointKey; 3],
    },
    /// Two of the three point keys are equal, so a side would join a point to itself.
    #[error("Invalid triangle edge: point {point_key:?} repeated")]
    InvalidEdge {
        /// The repeated point.
        point_key: PointKey,
    },
    /// A vertex key does not resolve in the mesh.
    #[error("Point {point_key:?} not found in mesh")]
    MissingPoint {
        /// The dangling key.
        point_key: PointKey,
    },
    /// Circumcircle computation failed.
    #[error(transparent)]
    Circumcenter(#[from] CircumcenterError),
}

/// Where a query point falls relative to one triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointPosition {
    /// Strictly inside, farther than the tolerance from every side.
    Inside,
    /// Within the tolerance of this side (and not of a vertex).
    OnEdge(EdgeKey),
    /// Within the tolerance of this vertex.
    OnVertex(PointKey),
    /// Strictly beyond this side.
    Outside(EdgeKey),
}

/// A counter-clockwise triangle of the mesh.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::prelude::*;
///
/// let mut mesh = Mesh::new();
/// mesh.insert(Point::new(0.0, 0.0)).unwrap();
/// mesh.insert(Point::new(2.0, 0.0)).unwrap();
/// mesh.insert(Point::new(0.0, 2.0)).unwrap();
///
/// let (_, triangle) = mesh.triangles().next().unwrap();
/// assert!(triangle.contains_point(&mesh, &Point::new(0.5, 0.5)).unwrap());
/// assert!(triangle.circumcircle_contains(&mesh, &Point::new(1.9, 1.9)).unwrap());
/// assert!(!triangle.circumcircle_contains(&mesh, &Point::new(3.0, 3.0)).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    points: [PointKey; 3],
    edges: [EdgeKey; 3],
}

impl Triangle {
    /// Creates a triangle over three mesh points, reordering them
    /// counter-clockwise.
    ///
    /// # Errors
    ///
    /// - [`TriangleError::InvalidEdge`] if two keys are equal.
    /// - [`TriangleError::MissingPoint`] if a key is not in `mesh`.
    /// - [`TriangleError::DegenerateTriangle`] if the points are collinear
    ///   within the mesh tolerance.
    pub fn new<T: CoordinateScalar>(mesh: &Mesh<T>, points: [PointKey; 3]) -> Result<Self, TriangleError> {
        let [a, b, c] = points;
        if a == b || a == c {
            return Err(TriangleError::InvalidEdge { point_key: a });
        }
        if b == c {
            return Err(TriangleError::InvalidEdge { point_key: b });
        }

        let pa = lookup(mesh, a)?;
        let pb = lookup(mesh, b)?;
        let pc = lookup(mesh, c)?;

        let ordered = match orientation(pa, pb, pc, mesh.config().tolerance) {
            Orientation::DEGENERATE => return Err(TriangleError::DegenerateTriangle { points }),
            Orientation::POSITIVE => [a, b, c],
            Orientation::NEGATIVE => [a, c, b],
        };
        Ok(Self::from_ordered(ordered))
    }

    /// Builds a triangle from keys already known to be counter-clockwise.
    fn from_ordered(points: [PointKey; 3]) -> Self {
        let [a, b, c] = points;
        Self {
            points,
            edges: [EdgeKey::new(b, c), EdgeKey::new(c, a), EdgeKey::new(a, b)],
        }
    }

    /// Vertex keys in counter-clockwise order.
    #[inline]
    #[must_use]
    pub const fn points(&self) -> &[PointKey; 3] {
        &self.points
    }

    /// Side keys; `edges()[i]` is opposite `points()[i]`.
    #[inline]
    #[must_use]
    pub const fn edges(&self) -> &[EdgeKey; 3] {
        &self.edges
    }

    /// Whether `point` is one of the vertices.
    #[inline]
    #[must_use]
    pub fn contains_vertex(&self, point: PointKey) -> bool {
        self.points.contains(&point)
    }

    /// Whether `edge` is one of the sides.
    #[inline]
    #[must_use]
    pub fn has_edge(&self, edge: EdgeKey) -> bool {
        self.edges.contains(&edge)
    }

    /// The vertex not on `edge`, or `None` if `edge` is not a side.
    #[must_use]
    pub fn opposite_point(&self, edge: EdgeKey) -> Option<PointKey> {
        self.edges
            .iter()
            .position(|&e| e == edge)
            .map(|i| self.points[i])
    }

    /// The side not touching `point`, or `None` if `point` is not a vertex.
    #[must_use]
    pub fn edge_opposite(&self, point: PointKey) -> Option<EdgeKey> {
        self.points
            .iter()
            .position(|&p| p == point)
            .map(|i| self.edges[i])
    }

    /// Endpoints of `edge` in counter-clockwise direction around this
    /// triangle, so the interior lies on the left.
    #[must_use]
    pub fn directed_edge(&self, edge: EdgeKey) -> Option<(PointKey, PointKey)> {
        self.edges
            .iter()
            .position(|&e| e == edge)
            .map(|i| (self.points[(i + 1) % 3], self.points[(i + 2) % 3]))
    }

    /// Vertex coordinates in counter-clockwise order.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::MissingPoint`] if a vertex is not in `mesh`.
    pub fn coordinates<T: CoordinateScalar>(&self, mesh: &Mesh<T>) -> Result<[Point<T>; 3], TriangleError> {
        Ok([
            *lookup(mesh, self.points[0])?,
            *lookup(mesh, self.points[1])?,
            *lookup(mesh, self.points[2])?,
        ])
    }

    /// The circle through the three vertices.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::MissingPoint`] for dangling keys, or
    /// [`TriangleError::Circumcenter`] if the vertices are exactly collinear.
    pub fn circumcircle<T: CoordinateScalar>(&self, mesh: &Mesh<T>) -> Result<Circumcircle<T>, TriangleError> {
        let [a, b, c] = self.coordinates(mesh)?;
        Ok(Circumcircle::from_points(&a, &b, &c)?)
    }

    /// Whether `point` lies strictly inside the circumcircle.
    ///
    /// Uses the in-circle determinant with the mesh's relative tolerance, so
    /// cocircular points are not inside.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::MissingPoint`] if a vertex is not in `mesh`.
    pub fn circumcircle_contains<T: CoordinateScalar>(
        &self,
        mesh: &Mesh<T>,
        point: &Point<T>,
    ) -> Result<bool, TriangleError> {
        let [a, b, c] = self.coordinates(mesh)?;
        Ok(in_circle(&a, &b, &c, point, mesh.config().incircle_tolerance) == InCircle::INSIDE)
    }

    /// Whether `point` is inside the triangle or on its boundary (within the
    /// mesh tolerance).
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::MissingPoint`] if a vertex is not in `mesh`.
    pub fn contains_point<T: CoordinateScalar>(&self, mesh: &Mesh<T>, point: &Point<T>) -> Result<bool, TriangleError> {
        Ok(!matches!(
            self.classify_point(mesh, point)?,
            PointPosition::Outside(_)
        ))
    }

    /// Classify `point` against this triangle using three orientation checks.
    ///
    /// Vertices win over sides, and a point beyond any side is outside even
    /// if it is close to another one. When several sides are violated, the
    /// most violated one is reported.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::MissingPoint`] if a vertex is not in `mesh`.
    pub fn classify_point<T: CoordinateScalar>(
        &self,
        mesh: &Mesh<T>,
        point: &Point<T>,
    ) -> Result<PointPosition, TriangleError> {
        let tolerance = mesh.config().tolerance;
        let vertices = self.coordinates(mesh)?;

        for (i, vertex) in vertices.iter().enumerate() {
            if vertex.distance(point) <= tolerance {
                return Ok(PointPosition::OnVertex(self.points[i]));
            }
        }

        // Side `i` is the edge opposite vertex `i`, directed counter-clockwise
        let sides: [Orientation; 3] = std::array::from_fn(|i| {
            orientation(&vertices[(i + 1) % 3], &vertices[(i + 2) % 3], point, tolerance)
        });
        let distances: [T; 3] = std::array::from_fn(|i| {
            signed_distance_to_line(&vertices[(i + 1) % 3], &vertices[(i + 2) % 3], point)
        });
        let by = |wanted: Orientation| (0..3).filter(move |&i| sides[i] == wanted);

        let most_violated = by(Orientation::NEGATIVE)
            .min_by(|&i, &j| distances[i].partial_cmp(&distances[j]).unwrap_or(Ordering::Equal));
        if let Some(i) = most_violated {
            return Ok(PointPosition::Outside(self.edges[i]));
        }

        let closest = by(Orientation::DEGENERATE).min_by(|&i, &j| {
            distances[i]
                .abs()
                .partial_cmp(&distances[j].abs())
                .unwrap_or(Ordering::Equal)
        });
        if let Some(i) = closest {
            return Ok(PointPosition::OnEdge(self.edges[i]));
        }
        Ok(PointPosition::Inside)
    }

    /// Unsigned area.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::MissingPoint`] if a vertex is not in `mesh`.
    pub fn area<T: CoordinateScalar>(&self, mesh: &Mesh<T>) -> Result<T, TriangleError> {
        let [a, b, c] = self.coordinates(mesh)?;
        Ok(signed_area(&a, &b, &c).abs())
    }
}

fn lookup<T: CoordinateScalar>(mesh: &Mesh<T>, key: PointKey) -> Result<&Point<T>, TriangleError> {
    mesh.point(key)
        .ok_or(TriangleError::MissingPoint { point_key: key })
}
