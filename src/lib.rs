//! # planar-delaunay
//!
//! This is a library for incrementally building the Delaunay triangulation of
//! a growing set of points in the plane.
//!
//! # Features
//!
//! - Incremental insertion: points can be added one at a time, and the mesh
//!   satisfies the Delaunay property after every insertion
//! - Full adjacency between points, edges and triangles, stored in slotmap
//!   arenas with stable keys
//! - Point location by walking, with a full-scan fallback
//! - Edge-flip legalization (Lawson flips)
//! - Generic floating-point coordinate types (`f32`, `f64`) through
//!   [`CoordinateScalar`](geometry::traits::coordinate::CoordinateScalar)
//! - Convex hull extraction and structural validation
//!
//! # Basic Usage
//!
//! ```rust
//! use planar_delaunay::prelude::*;
//!
//! let mut mesh = Mesh::new();
//! let a = mesh.insert(Point::new(0.0, 0.0)).unwrap();
//! let b = mesh.insert(Point::new(1.0, 0.0)).unwrap();
//! let c = mesh.insert(Point::new(0.0, 1.0)).unwrap();
//!
//! // The third point forms the first triangle.
//! assert_eq!(mesh.number_of_triangles(), 1);
//! assert_eq!(mesh.number_of_edges(), 3);
//! assert!(mesh.edges().all(|(_, edge)| edge.triangles().len() == 1));
//!
//! // A fourth point outside the hull is connected to the edge it sees.
//! let d = mesh.insert(Point::new(1.0, 1.0)).unwrap();
//! assert_eq!(mesh.number_of_triangles(), 2);
//! assert_eq!(mesh.number_of_edges(), 5);
//! assert_eq!(mesh.edge_between(b, c).unwrap().triangles().len(), 2);
//! assert!(mesh.edge_between(a, d).is_none());
//! assert!(mesh.is_valid());
//! ```
//!
//! # Mesh Invariants
//!
//! Once the first triangle exists, [`Mesh::validate`](core::mesh::Mesh::validate)
//! checks that:
//!
//! - **Edge sharing** – every edge bounds one (hull) or two (interior) triangles.
//! - **Registration** – every triangle is registered on its three edges and
//!   every edge only lists triangles that have it as a side.
//! - **Orientation** – every triangle is stored counter-clockwise.
//! - **Euler characteristic** – `V - E + F = 1`.
//!
//! [`Mesh::validate_delaunay`](core::mesh::Mesh::validate_delaunay) checks the
//! **Delaunay property**: no point lies strictly inside the circumcircle of
//! any triangle.
//!
//! # Correctness Guarantees and Limitations
//!
//! 1. **Successful insertions maintain all invariants.** If
//!    [`Mesh::insert`](core::mesh::Mesh::insert) returns `Ok(_)`, the mesh is
//!    structurally valid and Delaunay.
//!
//! 2. **Rejected points leave the mesh unchanged.** Invalid coordinates,
//!    duplicate points (within the configured tolerance) and points that
//!    would create a zero-area triangle are detected before any mutation.
//!
//! 3. **Collinear starts stay pending.** While every stored point lies on one
//!    line the mesh is incomplete. The first point off that line is joined to
//!    each consecutive pair along it, so no point is lost whatever the
//!    insertion order.
//!
//! 4. **Numerical precision.** Predicates use floating-point arithmetic with
//!    explicit tolerances (see [`MeshConfig`](core::mesh::MeshConfig)).
//!    Cocircular configurations are treated as legal, so grids triangulate
//!    without flip cycles, but ill-conditioned inputs near the tolerance may
//!    still be rejected as degenerate.
//!
//! ```rust
//! use planar_delaunay::prelude::*;
//!
//! let mut mesh = Mesh::new();
//! mesh.insert(Point::new(0.0, 0.0)).unwrap();
//! mesh.insert(Point::new(1.0, 1.0)).unwrap();
//! mesh.insert(Point::new(2.0, 2.0)).unwrap();
//! assert_eq!(mesh.construction_state(), ConstructionState::Incomplete(3));
//!
//! mesh.insert(Point::new(2.0, 0.0)).unwrap();
//! assert_eq!(mesh.number_of_triangles(), 2);
//! ```
//!
//! # References
//!
//! - C. L. Lawson (1977) - "Software for C¹ Surface Interpolation"
//! - L. Guibas and J. Stolfi (1985) - "Primitives for the Manipulation of
//!   General Subdivisions and the Computation of Voronoi Diagrams"
//! - O. Devillers, S. Pion, and M. Teillaud (2001) - "Walking in a Triangulation"

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains the mesh data structures and the algorithms
/// that build and maintain it.
///
/// It includes [`Mesh`](core::mesh::Mesh) and its [`Edge`](core::edge::Edge)
/// and [`Triangle`](core::triangle::Triangle) components.
pub mod core {
    /// Triangulation algorithms for construction, maintenance, and querying
    pub mod algorithms {
        /// Edge flips and Delaunay legalization
        pub mod flips;
        /// Point insertion by splitting and flipping
        pub mod incremental_insertion;
        /// Point location by walking
        pub mod locate;
    }
    pub mod boundary;
    pub mod collections;
    pub mod edge;
    pub mod mesh;
    pub mod triangle;
    pub mod util;
    /// Traits implemented by the mesh.
    pub mod traits {
        pub mod boundary_analysis;
        pub use boundary_analysis::*;
    }

    pub use edge::*;
    pub use mesh::*;
    pub use traits::*;
    pub use triangle::*;
    pub use util::*;
    // Note: collections module not re-exported here to avoid namespace pollution
    // Import specific types via prelude or use crate::core::collections::
}

/// Contains geometric types including the `Point` struct and geometry predicates.
pub mod geometry {
    pub mod point;
    pub mod predicates;
    /// Circumcircles, areas and point generators
    pub mod util;
    /// Traits module containing the coordinate scalar abstraction.
    pub mod traits {
        pub mod coordinate;
        pub use coordinate::*;
    }
    pub use point::*;
    pub use predicates::*;
    pub use traits::*;
    pub use util::*;
}

/// Topological characteristics of meshes.
pub mod topology {
    /// Euler characteristic and simplex counts
    pub mod euler;
}

/// A prelude module that re-exports commonly used types.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{
        algorithms::{flips::*, incremental_insertion::*, locate::*},
        edge::*,
        mesh::*,
        traits::boundary_analysis::*,
        triangle::*,
        util::*,
    };

    // Re-export commonly used collection types from core::collections
    pub use crate::core::collections::{
        FastHashMap, FastHashSet, SmallBuffer, fast_hash_map_with_capacity,
        fast_hash_set_with_capacity,
    };

    // Re-export from geometry
    pub use crate::geometry::{point::*, predicates::*, traits::coordinate::*, util::*};
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
