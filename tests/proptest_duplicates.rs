//! Property-based tests for duplicate point handling.
//!
//! Re-inserting a stored point, exactly or within the tolerance, must be
//! rejected with the key of the stored point and leave the mesh unchanged.

use planar_delaunay::prelude::*;
use proptest::prelude::*;

fn point_cloud() -> impl Strategy<Value = Vec<Point<f64>>> {
    prop::collection::vec((-100.0..100.0, -100.0..100.0), 3..=30)
        .prop_map(|coords| coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

fn build_mesh(points: &[Point<f64>]) -> (Mesh<f64>, Vec<(PointKey, Point<f64>)>) {
    let mut mesh = Mesh::new();
    let mut stored = Vec::with_capacity(points.len());
    for point in points {
        if let Ok(key) = mesh.insert(*point) {
            stored.push((key, *point));
        }
    }
    (mesh, stored)
}

fn counts(mesh: &Mesh<f64>) -> (usize, usize, usize) {
    (
        mesh.number_of_points(),
        mesh.number_of_edges(),
        mesh.number_of_triangles(),
    )
}

proptest! {
    /// Property: exact duplicates are rejected with the stored key.
    #[test]
    fn prop_exact_duplicate_rejected(points in point_cloud(), pick in any::<prop::sample::Index>()) {
        let (mut mesh, stored) = build_mesh(&points);
        prop_assume!(!stored.is_empty());
        let (key, point) = stored[pick.index(stored.len())];
        let before = counts(&mesh);

        prop_assert_eq!(mesh.insert(point), Err(InsertionError::DuplicatePoint { existing: key }));
        prop_assert_eq!(counts(&mesh), before);
        prop_assert!(mesh.validate().is_ok());
    }

    /// Property: points within the tolerance of a stored point are duplicates.
    #[test]
    fn prop_near_duplicate_rejected(
        points in point_cloud(),
        pick in any::<prop::sample::Index>(),
        dx in -5e-11..5e-11,
        dy in -5e-11..5e-11,
    ) {
        let (mut mesh, stored) = build_mesh(&points);
        prop_assume!(!stored.is_empty());
        let (key, point) = stored[pick.index(stored.len())];
        let before = counts(&mesh);

        let jittered = Point::new(point.x() + dx, point.y() + dy);
        prop_assert_eq!(mesh.insert(jittered), Err(InsertionError::DuplicatePoint { existing: key }));
        prop_assert_eq!(counts(&mesh), before);
    }

    /// Property: a batch containing every point twice stores each once.
    #[test]
    fn prop_doubled_batch_stores_each_point_once(points in point_cloud()) {
        let (mesh, stored) = build_mesh(&points);
        prop_assert_eq!(stored.len(), points.len());
        let doubled: Vec<_> = points.iter().chain(points.iter()).copied().collect();
        let (doubled_mesh, doubled_stored) = build_mesh(&doubled);

        prop_assert_eq!(doubled_stored.len(), stored.len());
        prop_assert_eq!(counts(&doubled_mesh), counts(&mesh));
    }
}
