//! General helper utilities

mod delaunay_validation;

pub use delaunay_validation::{
    DelaunayViolation, find_delaunay_violations, find_local_delaunay_violations,
};
