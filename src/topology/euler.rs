//! Euler characteristic of planar triangulations.
//!
//! For a planar mesh `χ = V - E + F`, counting only bounded faces. A
//! triangulation of a convex region is a topological disk, so `χ = 1`; a
//! mesh with an uncovered hole or a stray point fails that check.
//!
//! # Examples
//!
//! ```rust
//! use planar_delaunay::prelude::*;
//! use planar_delaunay::topology::euler;
//!
//! let mut mesh = Mesh::new();
//! for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
//!     mesh.insert(Point::new(x, y)).unwrap();
//! }
//!
//! let counts = euler::count_simplices(&mesh);
//! assert_eq!(counts, euler::FVector { vertices: 4, edges: 5, faces: 2 });
//! assert_eq!(euler::euler_characteristic(&counts), 1);
//! ```

use crate::core::collections::{FastHashSet, fast_hash_set_with_capacity};
use crate::core::mesh::Mesh;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Simplex counts of a planar mesh (the f-vector `(f₀, f₁, f₂)`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FVector {
    /// Number of points (`f₀`).
    pub vertices: usize,
    /// Number of edges (`f₁`).
    pub edges: usize,
    /// Number of triangles (`f₂`).
    pub faces: usize,
}

impl FVector {
    /// Counts as stored by the mesh.
    #[must_use]
    pub fn from_mesh<T: CoordinateScalar>(mesh: &Mesh<T>) -> Self {
        Self {
            vertices: mesh.number_of_points(),
            edges: mesh.number_of_edges(),
            faces: mesh.number_of_triangles(),
        }
    }

    /// Number of `k`-simplices; 0 for `k > 2`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planar_delaunay::topology::euler::FVector;
    ///
    /// let counts = FVector { vertices: 3, edges: 3, faces: 1 };
    /// assert_eq!(counts.count(1), 3);
    /// assert_eq!(counts.count(3), 0);
    /// ```
    #[must_use]
    pub const fn count(&self, k: usize) -> usize {
        match k {
            0 => self.vertices,
            1 => self.edges,
            2 => self.faces,
            _ => 0,
        }
    }
}

/// Global shape of a planar mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyClassification {
    /// No points.
    Empty,
    /// Points but no triangle yet.
    Incomplete,
    /// Exactly one triangle.
    SingleTriangle,
    /// Several triangles covering a disk.
    Disk,
}

impl TopologyClassification {
    /// The Euler characteristic a mesh of this class must have.
    #[must_use]
    pub const fn expected_euler_characteristic(self) -> Option<isize> {
        match self {
            Self::Empty => Some(0),
            Self::Incomplete => None,
            Self::SingleTriangle | Self::Disk => Some(1),
        }
    }
}

/// Count points, edges and triangles, deriving edges from the triangles
/// rather than trusting the edge table.
#[must_use]
pub fn count_simplices<T: CoordinateScalar>(mesh: &Mesh<T>) -> FVector {
    let mut edges: FastHashSet<_> = fast_hash_set_with_capacity(mesh.number_of_triangles() * 2);
    for (_, triangle) in mesh.triangles() {
        edges.extend(triangle.edges().iter().copied());
    }
    FVector {
        vertices: mesh.number_of_points(),
        edges: edges.len(),
        faces: mesh.number_of_triangles(),
    }
}

/// `χ = V - E + F`.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::topology::euler::{FVector, euler_characteristic};
///
/// let single = FVector { vertices: 3, edges: 3, faces: 1 };
/// assert_eq!(euler_characteristic(&single), 1);
/// ```
#[must_use]
pub fn euler_characteristic(counts: &FVector) -> isize {
    let signed = |n: usize| isize::try_from(n).unwrap_or(isize::MAX);
    signed(counts.vertices) - signed(counts.edges) + signed(counts.faces)
}

/// Classify the mesh by its triangle count.
#[must_use]
pub fn classify<T: CoordinateScalar>(mesh: &Mesh<T>) -> TopologyClassification {
    match (mesh.number_of_points(), mesh.number_of_triangles()) {
        (0, _) => TopologyClassification::Empty,
        (_, 0) => TopologyClassification::Incomplete,
        (_, 1) => TopologyClassification::SingleTriangle,
        _ => TopologyClassification::Disk,
    }
}
