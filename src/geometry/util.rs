//! Geometric utility functions for planar triangulation.
//!
//! Circumcircle and area computations used by triangles and validation, plus
//! the point generators used by tests and benchmarks.

mod circumcircle;
mod point_generation;

pub use circumcircle::{Circumcircle, CircumcenterError, circumcenter, circumradius, signed_area};
pub use point_generation::{
    RandomPointGenerationError, generate_grid_points, generate_random_points,
    generate_random_points_seeded,
};
