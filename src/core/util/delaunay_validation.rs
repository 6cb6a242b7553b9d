//! Delaunay empty-circumcircle property validation utilities.

#![forbid(unsafe_code)]

use crate::core::mesh::{Mesh, PointKey, TriangleKey};
use crate::core::triangle::Triangle;
use crate::geometry::predicates::{InCircle, in_circle};
use crate::geometry::traits::coordinate::CoordinateScalar;

/// A triangle together with a point strictly inside its circumcircle.
pub type DelaunayViolation = (TriangleKey, PointKey);

/// Internal helper: points of `mesh` strictly inside the circumcircle of
/// `triangle`. Triangles with a dangling vertex report nothing; structural
/// validation catches those.
fn violations_of_triangle<'a, T: CoordinateScalar>(
    mesh: &'a Mesh<T>,
    triangle_key: TriangleKey,
    triangle: &'a Triangle,
    candidates: impl Iterator<Item = PointKey> + 'a,
) -> impl Iterator<Item = DelaunayViolation> + 'a {
    let coords = triangle.coordinates(mesh).ok();
    let tolerance = mesh.config().incircle_tolerance;
    candidates.filter_map(move |point_key| {
        let [a, b, c] = coords.as_ref()?;
        if triangle.contains_vertex(point_key) {
            return None;
        }
        let p = mesh.point(point_key)?;
        (in_circle(a, b, c, p, tolerance) == InCircle::INSIDE).then_some((triangle_key, point_key))
    })
}

/// Every (triangle, point) pair where the point lies strictly inside the
/// triangle's circumcircle, checking all points against all triangles.
///
/// Cocircular points (within the in-circle tolerance) are not violations.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::prelude::*;
///
/// let mut mesh = Mesh::new();
/// for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.4, 0.6)] {
///     mesh.insert(Point::new(x, y)).unwrap();
/// }
/// assert!(find_delaunay_violations(&mesh).is_empty());
/// ```
#[must_use]
pub fn find_delaunay_violations<T: CoordinateScalar>(mesh: &Mesh<T>) -> Vec<DelaunayViolation> {
    mesh.triangles()
        .flat_map(|(triangle_key, triangle)| {
            violations_of_triangle(
                mesh,
                triangle_key,
                triangle,
                mesh.points().map(|(key, _)| key),
            )
        })
        .collect()
}

/// Violations between neighbouring triangles only: for each interior edge,
/// the vertex of one triangle against the circumcircle of the other.
///
/// On a valid triangulation this finds a violation whenever
/// [`find_delaunay_violations`] does, in time linear in the mesh size.
#[must_use]
pub fn find_local_delaunay_violations<T: CoordinateScalar>(mesh: &Mesh<T>) -> Vec<DelaunayViolation> {
    mesh.triangles()
        .flat_map(|(triangle_key, triangle)| {
            let opposite = triangle.edges().iter().filter_map(move |&edge| {
                let neighbor = mesh.edge(edge)?.neighbor_of(triangle_key).ok()??;
                mesh.triangle(neighbor)?.opposite_point(edge)
            });
            violations_of_triangle(mesh, triangle_key, triangle, opposite)
        })
        .collect()
}
