//! Boundary and convex hull analysis functions
//!
//! This module implements the `BoundaryAnalysis` trait for [`Mesh`], walking
//! the edges that bound a single triangle.

use super::{
    collections::{FastHashMap, fast_hash_map_with_capacity},
    edge::EdgeKey,
    mesh::{Mesh, MeshError, PointKey},
    traits::boundary_analysis::{BoundaryAnalysis, BoundaryError},
};
use crate::geometry::traits::coordinate::CoordinateScalar;
use std::cmp::Ordering;

impl<T: CoordinateScalar> BoundaryAnalysis for Mesh<T> {
    fn boundary_edges(&self) -> Vec<EdgeKey> {
        self.edges()
            .filter(|(_, edge)| edge.is_boundary())
            .map(|(key, _)| key)
            .collect()
    }

    fn is_boundary_edge(&self, edge: EdgeKey) -> bool {
        self.edge(edge).is_some_and(|record| record.is_boundary())
    }

    fn number_of_boundary_edges(&self) -> usize {
        self.edges().filter(|(_, edge)| edge.is_boundary()).count()
    }

    fn convex_hull(&self) -> Result<Vec<PointKey>, BoundaryError> {
        if !self.is_complete() {
            return Err(BoundaryError::NotEnoughPoints {
                count: self.number_of_points(),
            });
        }

        // Each hull edge directed as in its triangle has the interior on the
        // left, so following `next` walks the hull counter-clockwise.
        let mut next: FastHashMap<PointKey, PointKey> = fast_hash_map_with_capacity(16);
        for (key, edge) in self.edges() {
            let &[triangle_key] = edge.triangles() else {
                continue;
            };
            let (from, to) = self
                .triangle(triangle_key)
                .ok_or(MeshError::MissingTriangle { triangle_key })?
                .directed_edge(key)
                .ok_or(MeshError::MissingEdge { edge: key })?;
            if next.insert(from, to).is_some() {
                return Err(BoundaryError::BrokenBoundary { point_key: from });
            }
        }

        let start = next
            .keys()
            .copied()
            .filter_map(|key| self.point(key).map(|p| (key, p.coords())))
            .min_by(|(_, a), (_, b)| {
                let by = |i: usize| a[i].partial_cmp(&b[i]).unwrap_or(Ordering::Equal);
                by(0).then_with(|| by(1))
            })
            .map(|(key, _)| key)
            .ok_or(BoundaryError::NotEnoughPoints {
                count: self.number_of_points(),
            })?;

        let mut hull = Vec::with_capacity(next.len());
        let mut current = start;
        loop {
            hull.push(current);
            current = *next
                .get(&current)
                .ok_or(BoundaryError::BrokenBoundary { point_key: current })?;
            if current == start {
                break;
            }
            if hull.len() >= next.len() {
                return Err(BoundaryError::BrokenBoundary { point_key: current });
            }
        }

        if hull.len() != next.len() {
            return Err(BoundaryError::BrokenBoundary { point_key: start });
        }
        Ok(hull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;
    use crate::geometry::predicates::orient2d;

    fn mesh_of(points: &[(f64, f64)]) -> Mesh<f64> {
        let mut mesh = Mesh::new();
        for &(x, y) in points {
            mesh.insert(Point::new(x, y)).unwrap();
        }
        mesh
    }

    #[test]
    fn hull_of_square_with_interior_point() {
        let mesh = mesh_of(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 0.8)]);
        assert_eq!(mesh.number_of_boundary_edges(), 4);
        assert_eq!(mesh.boundary_edges().len(), 4);

        let hull = mesh.convex_hull().unwrap();
        let coords: Vec<_> = hull.iter().map(|&k| *mesh.point(k).unwrap()).collect();
        assert_eq!(
            coords,
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0)
            ]
        );
        for i in 0..coords.len() {
            let a = &coords[i];
            let b = &coords[(i + 1) % coords.len()];
            let interior = Point::new(1.0, 1.0);
            assert!(orient2d(a, b, &interior) > 0.0);
        }
    }

    #[test]
    fn hull_includes_points_on_hull_edges() {
        let mesh = mesh_of(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (1.0, 0.0)]);
        assert_eq!(mesh.convex_hull().unwrap().len(), 4);
        assert_eq!(mesh.number_of_boundary_edges(), 4);
    }

    #[test]
    fn is_boundary_edge_distinguishes_interior() {
        let mut mesh = Mesh::new();
        let a = mesh.insert(Point::new(0.0, 0.0)).unwrap();
        let b = mesh.insert(Point::new(2.0, 0.0)).unwrap();
        let c = mesh.insert(Point::new(0.0, 2.0)).unwrap();
        let d = mesh.insert(Point::new(2.0, 2.0)).unwrap();

        assert!(mesh.is_boundary_edge(EdgeKey::new(a, b)));
        assert!(!mesh.is_boundary_edge(EdgeKey::new(b, c)));
        assert!(!mesh.is_boundary_edge(EdgeKey::new(a, d)));
    }

    #[test]
    fn hull_requires_a_triangle() {
        let mesh = mesh_of(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(
            mesh.convex_hull(),
            Err(BoundaryError::NotEnoughPoints { count: 2 })
        );
        assert!(mesh.boundary_edges().is_empty());
    }
}
