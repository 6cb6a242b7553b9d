//! The planar triangle mesh.
//!
//! [`Mesh`] owns every point, edge and triangle of a triangulation and keeps
//! the adjacency between them consistent:
//!
//! - points live in a slotmap arena keyed by [`PointKey`]
//! - triangles live in a slotmap arena keyed by [`TriangleKey`]
//! - edges live in a hash map keyed by the canonical [`EdgeKey`]
//!
//! Cross references are keys, never pointers. A triangle registers itself on
//! its three edges when added and detaches when removed; an edge that no
//! longer bounds any triangle is dropped.
//!
//! # Topological Invariants
//!
//! Once the first triangle exists:
//!
//! - every edge bounds one (hull) or two (interior) triangles
//! - every triangle is stored counter-clockwise and registered on its edges
//! - `V - E + F = 1` (the mesh is a topological disk)
//! - after every public insertion, no point lies strictly inside the
//!   circumcircle of any triangle
//!
//! [`Mesh::validate`] checks the structural invariants and
//! [`Mesh::validate_delaunay`] checks the empty-circle property.

use std::collections::hash_map::Entry;
use std::fmt;

use slotmap::new_key_type;
use thiserror::Error;

use crate::core::algorithms::incremental_insertion::{
    BatchInsertionError, InsertionError, InsertionInfo, insert_point,
};
use crate::core::algorithms::locate::{LocateError, LocateResult, locate};
use crate::core::collections::{FastHashMap, StorageMap, fast_hash_map_with_capacity};
use crate::core::edge::{Edge, EdgeError, EdgeKey};
use crate::core::triangle::{Triangle, TriangleError};
use crate::core::util::find_delaunay_violations;
use crate::geometry::point::Point;
use crate::geometry::predicates::orient2d;
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::topology::euler::{FVector, euler_characteristic};

new_key_type! {
    /// Key type for accessing points in the mesh.
    ///
    /// Stable for the lifetime of the mesh; points are never removed.
    pub struct PointKey;
}

new_key_type! {
    /// Key type for accessing triangles in the mesh.
    ///
    /// Triangles are replaced by splits and flips, so a key may stop
    /// resolving after a later insertion.
    pub struct TriangleKey;
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Numerical configuration of a [`Mesh`].
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::core::mesh::{Mesh, MeshConfigBuilder};
///
/// let config = MeshConfigBuilder::<f64>::default()
///     .tolerance(1e-8)
///     .max_walk_steps(Some(64))
///     .build()
///     .unwrap();
/// let mesh = Mesh::with_config(config);
/// assert_eq!(mesh.config().tolerance, 1e-8);
/// assert_eq!(mesh.config().incircle_tolerance, 1e-12);
///
/// assert!(MeshConfigBuilder::<f64>::default().tolerance(-1.0).build().is_err());
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct MeshConfig<T: CoordinateScalar> {
    /// Absolute distance below which two points coincide, a point lies on an
    /// edge, or three points are collinear.
    #[builder(default = "T::default_tolerance()")]
    pub tolerance: T,
    /// Relative tolerance on the in-circle determinant, scaled by its
    /// permanent. Within it, a point counts as on the circumcircle.
    #[builder(default = "T::default_incircle_tolerance()")]
    pub incircle_tolerance: T,
    /// Triangles visited by the location walk before falling back to a full
    /// scan. `None` means the triangle count plus a small margin.
    #[builder(default)]
    pub max_walk_steps: Option<usize>,
}

impl<T: CoordinateScalar> MeshConfigBuilder<T> {
    fn validate(&self) -> Result<(), String> {
        let invalid = |value: Option<T>| value.is_some_and(|v| !(v.is_finite() && v >= T::zero()));
        if invalid(self.tolerance) {
            return Err(format!(
                "tolerance must be finite and non-negative, got {:?}",
                self.tolerance
            ));
        }
        if invalid(self.incircle_tolerance) {
            return Err(format!(
                "incircle_tolerance must be finite and non-negative, got {:?}",
                self.incircle_tolerance
            ));
        }
        Ok(())
    }
}

impl<T: CoordinateScalar> Default for MeshConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::default_tolerance(),
            incircle_tolerance: T::default_incircle_tolerance(),
            max_walk_steps: None,
        }
    }
}

// =============================================================================
// CONSTRUCTION STATE
// =============================================================================

/// Whether the mesh has its first triangle yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstructionState {
    /// No triangle yet: every stored point is collinear. Holds their number.
    Incomplete(usize),
    /// At least one triangle exists.
    Constructed,
}

impl Default for ConstructionState {
    fn default() -> Self {
        Self::Incomplete(0)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by low-level mesh mutation.
///
/// Insertion checks every recoverable condition before mutating, so these
/// surfacing from an insertion indicate a broken internal contract.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// A triangle key does not resolve.
    #[error("Triangle {triangle_key:?} not found in mesh")]
    MissingTriangle {
        /// The dangling key.
        triangle_key: TriangleKey,
    },
    /// An edge key does not resolve.
    #[error("Edge {edge:?} not found in mesh")]
    MissingEdge {
        /// The dangling key.
        edge: EdgeKey,
    },
    /// Adding a triangle would give an edge a third adjacent triangle.
    #[error("Edge {edge:?} already bounds two triangles")]
    EdgeOverflow {
        /// The saturated edge.
        edge: EdgeKey,
    },
    /// Triangle construction failed.
    #[error(transparent)]
    Triangle(#[from] TriangleError),
    /// Edge bookkeeping failed.
    #[error(transparent)]
    Edge(#[from] EdgeError),
}

/// Structural or geometric problems found by [`Mesh::validate`] and
/// [`Mesh::validate_delaunay`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MeshValidationError {
    /// An edge bounds no triangle.
    #[error("Edge {edge:?} bounds no triangle")]
    OrphanEdge {
        /// The orphaned edge.
        edge: EdgeKey,
    },
    /// An edge bounds more than two triangles.
    #[error("Edge {edge:?} bounds {count} triangles")]
    EdgeOverflow {
        /// The edge.
        edge: EdgeKey,
        /// Number of adjacent triangles.
        count: usize,
    },
    /// A triangle is missing from one of its edges' adjacency, or an edge
    /// lists a triangle that does not have it as a side.
    #[error("Triangle {triangle_key:?} and edge {edge:?} disagree on adjacency")]
    UnregisteredTriangle {
        /// The triangle.
        triangle_key: TriangleKey,
        /// The edge.
        edge: EdgeKey,
    },
    /// An edge lists a triangle that no longer exists.
    #[error("Edge {edge:?} references missing triangle {triangle_key:?}")]
    MissingTriangle {
        /// The edge.
        edge: EdgeKey,
        /// The dangling triangle key.
        triangle_key: TriangleKey,
    },
    /// A triangle side has no edge record.
    #[error("Triangle {triangle_key:?} has side {edge:?} with no edge record")]
    MissingEdge {
        /// The triangle.
        triangle_key: TriangleKey,
        /// The missing edge.
        edge: EdgeKey,
    },
    /// A triangle vertex does not resolve.
    #[error("Triangle {triangle_key:?} references missing point {point_key:?}")]
    MissingPoint {
        /// The triangle.
        triangle_key: TriangleKey,
        /// The dangling point key.
        point_key: PointKey,
    },
    /// A triangle is clockwise or has zero area.
    #[error("Triangle {triangle_key:?} is not counter-clockwise")]
    NonCounterClockwise {
        /// The triangle.
        triangle_key: TriangleKey,
    },
    /// `V - E + F` is not that of a disk.
    #[error("Euler characteristic {actual} does not match expected {expected}")]
    EulerCharacteristic {
        /// Expected value.
        expected: isize,
        /// Observed value.
        actual: isize,
    },
    /// A point lies strictly inside a triangle's circumcircle.
    #[error("Point {point_key:?} lies inside the circumcircle of triangle {triangle_key:?}")]
    DelaunayViolation {
        /// The offending triangle.
        triangle_key: TriangleKey,
        /// The point inside its circumcircle.
        point_key: PointKey,
    },
}

// =============================================================================
// MESH
// =============================================================================

/// An incrementally built planar Delaunay triangulation.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::prelude::*;
///
/// let mut mesh = Mesh::new();
/// for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
///     mesh.insert(Point::new(x, y)).unwrap();
/// }
///
/// assert_eq!(mesh.number_of_points(), 4);
/// assert_eq!(mesh.number_of_triangles(), 2);
/// assert_eq!(mesh.number_of_edges(), 5);
/// assert!(mesh.is_valid());
/// ```
#[derive(Clone, Debug)]
pub struct Mesh<T: CoordinateScalar> {
    points: StorageMap<PointKey, Point<T>>,
    edges: FastHashMap<EdgeKey, Edge>,
    triangles: StorageMap<TriangleKey, Triangle>,
    config: MeshConfig<T>,
    last_triangle: Option<TriangleKey>,
}

impl<T: CoordinateScalar> Default for Mesh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CoordinateScalar> Mesh<T> {
    /// Creates an empty mesh with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MeshConfig::default())
    }

    /// Creates an empty mesh with `config`.
    #[must_use]
    pub fn with_config(config: MeshConfig<T>) -> Self {
        Self {
            points: StorageMap::with_key(),
            edges: fast_hash_map_with_capacity(0),
            triangles: StorageMap::with_key(),
            config,
            last_triangle: None,
        }
    }

    /// Numerical configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &MeshConfig<T> {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Insertion
    // -------------------------------------------------------------------------

    /// Inserts a point, restoring the Delaunay property.
    ///
    /// # Errors
    ///
    /// - [`InsertionError::InvalidCoordinate`] for NaN or infinite input.
    /// - [`InsertionError::DuplicatePoint`] if an existing point is within
    ///   the tolerance.
    /// - [`InsertionError::DegenerateTriangle`] if the point would create a
    ///   triangle thinner than the tolerance. Points collinear with every
    ///   stored point are kept pending instead.
    ///
    /// The mesh is unchanged on any of these.
    pub fn insert(&mut self, point: Point<T>) -> Result<PointKey, InsertionError> {
        insert_point(self, point).map(|info| info.point)
    }

    /// Inserts a point and reports what the insertion did.
    ///
    /// # Errors
    ///
    /// Same as [`Mesh::insert`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planar_delaunay::prelude::*;
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.insert(Point::new(0.0, 0.0)).unwrap();
    /// mesh.insert(Point::new(4.0, 0.0)).unwrap();
    /// let info = mesh.insert_with_statistics(Point::new(0.0, 4.0)).unwrap();
    /// assert_eq!(info.kind, InsertionKind::Bootstrap);
    ///
    /// let info = mesh.insert_with_statistics(Point::new(1.0, 1.0)).unwrap();
    /// assert_eq!(info.kind, InsertionKind::SplitTriangle);
    /// assert_eq!(info.triangles_created, 3);
    /// ```
    pub fn insert_with_statistics(&mut self, point: Point<T>) -> Result<InsertionInfo, InsertionError> {
        insert_point(self, point)
    }

    /// Inserts points in order, stopping at the first failure.
    ///
    /// Returns the number of points inserted.
    ///
    /// # Errors
    ///
    /// Returns [`BatchInsertionError`] carrying how many points were inserted
    /// before the failing one; those stay in the mesh.
    pub fn insert_all<I>(&mut self, points: I) -> Result<usize, BatchInsertionError>
    where
        I: IntoIterator<Item = Point<T>>,
    {
        let mut inserted = 0;
        for point in points {
            insert_point(self, point).map_err(|source| BatchInsertionError { inserted, source })?;
            inserted += 1;
        }
        Ok(inserted)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Iterates over all points.
    pub fn points(&self) -> impl Iterator<Item = (PointKey, &Point<T>)> {
        self.points.iter()
    }

    /// Iterates over all edges.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, &Edge)> {
        self.edges.iter().map(|(k, e)| (*k, e))
    }

    /// Iterates over all triangles.
    pub fn triangles(&self) -> impl Iterator<Item = (TriangleKey, &Triangle)> {
        self.triangles.iter()
    }

    /// Point by key.
    #[inline]
    #[must_use]
    pub fn point(&self, key: PointKey) -> Option<&Point<T>> {
        self.points.get(key)
    }

    /// Edge by canonical key.
    #[inline]
    #[must_use]
    pub fn edge(&self, key: EdgeKey) -> Option<&Edge> {
        self.edges.get(&key)
    }

    /// Triangle by key.
    #[inline]
    #[must_use]
    pub fn triangle(&self, key: TriangleKey) -> Option<&Triangle> {
        self.triangles.get(key)
    }

    /// The edge joining `a` and `b`, in either order.
    #[must_use]
    pub fn edge_between(&self, a: PointKey, b: PointKey) -> Option<&Edge> {
        self.edges.get(&EdgeKey::new(a, b))
    }

    /// Vertex coordinates of a triangle, counter-clockwise.
    #[must_use]
    pub fn triangle_points(&self, key: TriangleKey) -> Option<[Point<T>; 3]> {
        self.triangle(key)?.coordinates(self).ok()
    }

    /// Number of points.
    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn number_of_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the first triangle exists.
    #[must_use]
    pub fn construction_state(&self) -> ConstructionState {
        if self.triangles.is_empty() {
            ConstructionState::Incomplete(self.points.len())
        } else {
            ConstructionState::Constructed
        }
    }

    /// Shorthand for `construction_state() == Constructed`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.triangles.is_empty()
    }

    /// Finds where `point` falls in the mesh.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::NotEnoughPoints`] before the first triangle
    /// exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planar_delaunay::prelude::*;
    ///
    /// let mut mesh = Mesh::new();
    /// let a = mesh.insert(Point::new(0.0, 0.0)).unwrap();
    /// mesh.insert(Point::new(2.0, 0.0)).unwrap();
    /// mesh.insert(Point::new(0.0, 2.0)).unwrap();
    ///
    /// assert!(matches!(mesh.locate(&Point::new(0.5, 0.5)), Ok(LocateResult::InsideTriangle(_))));
    /// assert_eq!(mesh.locate(&Point::new(0.0, 0.0)).unwrap(), LocateResult::OnPoint(a));
    /// assert_eq!(mesh.locate(&Point::new(5.0, 5.0)).unwrap(), LocateResult::Outside);
    /// ```
    pub fn locate(&self, point: &Point<T>) -> Result<LocateResult, LocateError> {
        locate(self, point, self.last_triangle)
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Checks adjacency, orientation and the Euler characteristic.
    ///
    /// # Errors
    ///
    /// Returns the first [`MeshValidationError`] found.
    pub fn validate(&self) -> Result<(), MeshValidationError> {
        for (triangle_key, triangle) in &self.triangles {
            let mut coords = [Point::default(); 3];
            for (slot, &point_key) in coords.iter_mut().zip(triangle.points()) {
                *slot = *self.point(point_key).ok_or(MeshValidationError::MissingPoint {
                    triangle_key,
                    point_key,
                })?;
            }
            if orient2d(&coords[0], &coords[1], &coords[2]) <= T::zero() {
                return Err(MeshValidationError::NonCounterClockwise { triangle_key });
            }
            for &edge in triangle.edges() {
                let record = self
                    .edges
                    .get(&edge)
                    .ok_or(MeshValidationError::MissingEdge { triangle_key, edge })?;
                if !record.triangles().contains(&triangle_key) {
                    return Err(MeshValidationError::UnregisteredTriangle { triangle_key, edge });
                }
            }
        }

        for (&edge, record) in &self.edges {
            match record.triangles().len() {
                0 => return Err(MeshValidationError::OrphanEdge { edge }),
                1 | 2 => {}
                count => return Err(MeshValidationError::EdgeOverflow { edge, count }),
            }
            for &triangle_key in record.triangles() {
                let triangle = self
                    .triangle(triangle_key)
                    .ok_or(MeshValidationError::MissingTriangle { edge, triangle_key })?;
                if !triangle.has_edge(edge) {
                    return Err(MeshValidationError::UnregisteredTriangle { triangle_key, edge });
                }
            }
        }

        if self.is_complete() {
            let actual = euler_characteristic(&FVector::from_mesh(self));
            if actual != 1 {
                return Err(MeshValidationError::EulerCharacteristic {
                    expected: 1,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Checks that no point lies strictly inside any circumcircle.
    ///
    /// # Errors
    ///
    /// Returns [`MeshValidationError::DelaunayViolation`] for the first
    /// violation found.
    pub fn validate_delaunay(&self) -> Result<(), MeshValidationError> {
        match find_delaunay_violations(self).into_iter().next() {
            Some((triangle_key, point_key)) => Err(MeshValidationError::DelaunayViolation {
                triangle_key,
                point_key,
            }),
            None => Ok(()),
        }
    }

    /// Whether both [`Mesh::validate`] and [`Mesh::validate_delaunay`] pass.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok() && self.validate_delaunay().is_ok()
    }

    // -------------------------------------------------------------------------
    // Crate-internal mutation
    // -------------------------------------------------------------------------

    /// Triangle created most recently, used as the location hint.
    pub(crate) const fn last_triangle(&self) -> Option<TriangleKey> {
        self.last_triangle
    }

    pub(crate) fn add_point(&mut self, point: Point<T>) -> PointKey {
        self.points.insert(point)
    }

    /// Adds a triangle over three existing points and registers it on its
    /// edges, creating edges that do not exist yet.
    pub(crate) fn add_triangle(&mut self, points: [PointKey; 3]) -> Result<TriangleKey, MeshError> {
        let triangle = Triangle::new(self, points)?;

        for &edge in triangle.edges() {
            if self
                .edges
                .get(&edge)
                .is_some_and(|record| record.triangles().len() >= 2)
            {
                return Err(MeshError::EdgeOverflow { edge });
            }
        }

        let ordered = *triangle.points();
        let edges = *triangle.edges();
        let triangle_key = self.triangles.insert(triangle);

        for (i, edge) in edges.into_iter().enumerate() {
            let record = match self.edges.entry(edge) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    entry.insert(Edge::new(ordered[(i + 1) % 3], ordered[(i + 2) % 3])?)
                }
            };
            record.attach_triangle(triangle_key)?;
        }

        self.last_triangle = Some(triangle_key);
        Ok(triangle_key)
    }

    /// Removes a triangle, detaching it from its edges and dropping edges
    /// left with no triangle.
    pub(crate) fn remove_triangle(&mut self, triangle_key: TriangleKey) -> Result<Triangle, MeshError> {
        let triangle = self
            .triangles
            .remove(triangle_key)
            .ok_or(MeshError::MissingTriangle { triangle_key })?;

        for &edge in triangle.edges() {
            let orphaned = match self.edges.get_mut(&edge) {
                Some(record) => {
                    record.detach_triangle(triangle_key);
                    record.triangles().is_empty()
                }
                None => return Err(MeshError::MissingEdge { edge }),
            };
            if orphaned {
                self.edges.remove(&edge);
            }
        }

        if self.last_triangle == Some(triangle_key) {
            self.last_triangle = None;
        }
        Ok(triangle)
    }
}

impl<T: CoordinateScalar> fmt::Display for Mesh<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mesh({} points, {} edges, {} triangles)",
            self.number_of_points(),
            self.number_of_edges(),
            self.number_of_triangles()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> (Mesh<f64>, [PointKey; 3]) {
        let mut mesh = Mesh::new();
        let a = mesh.add_point(Point::new(0.0, 0.0));
        let b = mesh.add_point(Point::new(1.0, 0.0));
        let c = mesh.add_point(Point::new(0.0, 1.0));
        (mesh, [a, b, c])
    }

    #[test]
    fn add_triangle_registers_edges() {
        let (mut mesh, keys) = unit_triangle();
        assert_eq!(mesh.construction_state(), ConstructionState::Incomplete(3));

        let t = mesh.add_triangle(keys).unwrap();
        assert_eq!(mesh.construction_state(), ConstructionState::Constructed);
        assert_eq!(mesh.number_of_edges(), 3);
        for (_, edge) in mesh.edges() {
            assert_eq!(edge.triangles(), &[t]);
        }
        assert_eq!(mesh.last_triangle(), Some(t));
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn remove_triangle_drops_orphan_edges() {
        let (mut mesh, keys) = unit_triangle();
        let d = mesh.add_point(Point::new(1.0, 1.0));
        let t1 = mesh.add_triangle(keys).unwrap();
        let t2 = mesh.add_triangle([keys[1], d, keys[2]]).unwrap();
        assert_eq!(mesh.number_of_edges(), 5);
        assert_eq!(mesh.edge_between(keys[1], keys[2]).unwrap().triangles().len(), 2);

        mesh.remove_triangle(t1).unwrap();
        assert_eq!(mesh.number_of_edges(), 3);
        assert_eq!(mesh.edge_between(keys[1], keys[2]).unwrap().triangles(), &[t2]);
        assert!(mesh.edge_between(keys[0], keys[1]).is_none());
        assert_eq!(mesh.last_triangle(), Some(t2));

        assert_eq!(
            mesh.remove_triangle(t1),
            Err(MeshError::MissingTriangle { triangle_key: t1 })
        );
    }

    #[test]
    fn third_triangle_on_edge_is_rejected() {
        let (mut mesh, keys) = unit_triangle();
        let d = mesh.add_point(Point::new(1.0, 1.0));
        let e = mesh.add_point(Point::new(2.0, 2.0));
        mesh.add_triangle(keys).unwrap();
        mesh.add_triangle([keys[1], d, keys[2]]).unwrap();
        let before = mesh.number_of_triangles();

        assert_eq!(
            mesh.add_triangle([keys[1], e, keys[2]]),
            Err(MeshError::EdgeOverflow {
                edge: EdgeKey::new(keys[1], keys[2])
            })
        );
        assert_eq!(mesh.number_of_triangles(), before);
    }

    #[test]
    fn validate_reports_euler_mismatch() {
        let (mut mesh, keys) = unit_triangle();
        mesh.add_point(Point::new(5.0, 5.0));
        mesh.add_triangle(keys).unwrap();
        assert_eq!(
            mesh.validate(),
            Err(MeshValidationError::EulerCharacteristic {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn config_builder_defaults() {
        let config = MeshConfigBuilder::<f32>::default().build().unwrap();
        assert_eq!(config, MeshConfig::default());
        assert_eq!(config.tolerance, 1e-5);
        assert!(MeshConfigBuilder::<f64>::default()
            .incircle_tolerance(f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn display_summarises_counts() {
        let (mut mesh, keys) = unit_triangle();
        mesh.add_triangle(keys).unwrap();
        assert_eq!(mesh.to_string(), "Mesh(3 points, 3 edges, 1 triangles)");
    }
}
