//! Edge case and regression tests for incremental insertion.
//!
//! These tests cover:
//! - Degenerate input (collinear starts, duplicates, invalid coordinates)
//! - Cocircular configurations (grids, regular polygons)
//! - Rejected points leaving the mesh untouched
//! - Known configurations across both scalar types

use planar_delaunay::prelude::*;

// =========================================================================
// Helpers
// =========================================================================

/// Counts that must not change when an insertion is rejected.
fn snapshot<T: CoordinateScalar>(mesh: &Mesh<T>) -> (usize, usize, usize, ConstructionState) {
    (
        mesh.number_of_points(),
        mesh.number_of_edges(),
        mesh.number_of_triangles(),
        mesh.construction_state(),
    )
}

// =========================================================================
// Regression Tests - Known Configurations
// =========================================================================

/// Macro to generate configuration tests for both `f32` and `f64`.
macro_rules! test_known_config {
    ($name:ident, $coords:expr, triangles = $triangles:expr) => {
        pastey::paste! {
            #[test]
            fn [<test_ $name _f64>]() {
                let mut mesh: Mesh<f64> = Mesh::new();
                for (x, y) in $coords {
                    mesh.insert(Point::new(x, y)).unwrap_or_else(|err| {
                        panic!("f64 configuration failed at ({x}, {y}): {err}")
                    });
                }
                assert_eq!(mesh.number_of_triangles(), $triangles);
                assert!(mesh.validate().is_ok());
                assert!(mesh.validate_delaunay().is_ok());
            }

            #[test]
            fn [<test_ $name _f32>]() {
                let mut mesh: Mesh<f32> = Mesh::new();
                for (x, y) in $coords {
                    #[allow(clippy::cast_possible_truncation)]
                    let point = Point::new(x as f32, y as f32);
                    mesh.insert(point).unwrap_or_else(|err| {
                        panic!("f32 configuration failed at ({x}, {y}): {err}")
                    });
                }
                assert_eq!(mesh.number_of_triangles(), $triangles);
                assert!(mesh.validate().is_ok());
                assert!(mesh.validate_delaunay().is_ok());
            }
        }
    };
}

// Base triangle with an interior and an exterior point
test_known_config!(
    base_triangle_interior_exterior,
    [(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (0.8, 0.7), (-0.5, -0.4)],
    triangles = 5
);

// Square with a point near the centre (forces a flip of the diagonal)
test_known_config!(
    square_off_centre,
    [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (4.0, 4.0), (2.5, 2.0)],
    triangles = 4
);

// Thin sliver followed by a point that must flip it
test_known_config!(
    sliver_then_flip,
    [(0.0, 0.0), (10.0, 0.0), (5.0, 0.5), (5.0, -3.0)],
    triangles = 2
);

// =========================================================================
// Degenerate Input
// =========================================================================

#[test]
fn test_collinear_start_stays_pending() {
    let mut mesh = Mesh::new();
    let chain: Vec<PointKey> = [(1.0, 1.0), (0.0, 0.0), (2.0, 2.0)]
        .into_iter()
        .map(|(x, y)| mesh.insert(Point::new(x, y)).unwrap())
        .collect();
    assert_eq!(mesh.construction_state(), ConstructionState::Incomplete(3));
    assert_eq!(mesh.number_of_triangles(), 0);
    assert!(mesh.validate().is_ok());

    // The first point off the line joins every consecutive pair of the chain
    let info = mesh.insert_with_statistics(Point::new(0.0, 1.0)).unwrap();
    assert_eq!(info.kind, InsertionKind::Bootstrap);
    assert_eq!(info.triangles_created, 2);
    assert_eq!(mesh.number_of_points(), 4);
    assert_eq!(mesh.number_of_triangles(), 2);
    assert_eq!(mesh.number_of_edges(), 5);
    assert!(mesh.edge_between(chain[1], chain[0]).is_some());
    assert!(mesh.edge_between(chain[0], chain[2]).is_some());
    assert!(mesh.edge_between(chain[1], chain[2]).is_none());
    assert!(mesh.is_valid());
    assert!(mesh.validate_delaunay().is_ok());
}

#[test]
fn test_nearly_collinear_start_stays_pending() {
    let mut mesh = Mesh::new();
    mesh.insert(Point::new(0.0, 0.0)).unwrap();
    mesh.insert(Point::new(10.0, 0.0)).unwrap();

    let info = mesh.insert_with_statistics(Point::new(5.0, 1e-13)).unwrap();
    assert_eq!(info.kind, InsertionKind::Pending);
    assert_eq!(mesh.construction_state(), ConstructionState::Incomplete(3));

    mesh.insert(Point::new(5.0, 5.0)).unwrap();
    assert_eq!(mesh.number_of_points(), 4);
    assert_eq!(mesh.number_of_triangles(), 2);
    assert!(mesh.validate().is_ok());
    assert!(mesh.validate_delaunay().is_ok());
}

#[test]
fn test_duplicate_points_are_rejected() {
    let mut mesh = Mesh::new();
    let a = mesh.insert(Point::new(0.0, 0.0)).unwrap();

    // Before the first triangle exists
    assert_eq!(
        mesh.insert(Point::new(0.0, 0.0)),
        Err(InsertionError::DuplicatePoint { existing: a })
    );

    let b = mesh.insert(Point::new(1.0, 0.0)).unwrap();
    mesh.insert(Point::new(0.0, 1.0)).unwrap();
    let before = snapshot(&mesh);

    // Exact and within-tolerance duplicates after construction
    assert_eq!(
        mesh.insert(Point::new(1.0, 0.0)),
        Err(InsertionError::DuplicatePoint { existing: b })
    );
    assert_eq!(
        mesh.insert(Point::new(1.0 + 1e-12, 1e-12)),
        Err(InsertionError::DuplicatePoint { existing: b })
    );
    assert_eq!(snapshot(&mesh), before);
    assert!(mesh.is_valid());
}

#[test]
fn test_invalid_coordinates_are_rejected() {
    let mut mesh: Mesh<f64> = Mesh::new();
    for point in [
        Point::new(f64::NAN, 0.0),
        Point::new(0.0, f64::INFINITY),
        Point::new(f64::NEG_INFINITY, f64::NAN),
    ] {
        assert!(matches!(
            mesh.insert(point),
            Err(InsertionError::InvalidCoordinate(_))
        ));
    }
    assert_eq!(mesh.number_of_points(), 0);
}

#[test]
fn test_rejections_after_construction_leave_mesh_unchanged() {
    let mut mesh = Mesh::new();
    for (x, y) in [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (4.0, 4.0), (1.0, 2.0)] {
        mesh.insert(Point::new(x, y)).unwrap();
    }
    let before = snapshot(&mesh);
    let hull_before = mesh.convex_hull().unwrap();

    assert!(mesh.insert(Point::new(1.0, 2.0)).is_err());
    assert!(mesh.insert(Point::new(f64::NAN, 1.0)).is_err());

    assert_eq!(snapshot(&mesh), before);
    assert_eq!(mesh.convex_hull().unwrap(), hull_before);
    assert!(mesh.is_valid());
}

#[test]
fn test_insert_all_reports_progress() {
    let mut mesh = Mesh::new();
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 0.0),
        Point::new(5.0, 5.0),
    ];

    let err = mesh.insert_all(points).unwrap_err();
    assert_eq!(err.inserted, 3);
    assert!(matches!(err.source, InsertionError::DuplicatePoint { .. }));
    assert_eq!(mesh.number_of_points(), 3);
}

// =========================================================================
// Cocircular Configurations
// =========================================================================

#[test]
fn test_square_grid() {
    let points = generate_grid_points(5, 1.0, [0.0, 0.0]).unwrap();
    let reversed: Vec<_> = points.iter().rev().copied().collect();

    // Both orders start with a full row of collinear points
    for order in [points, reversed] {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.insert_all(order).unwrap(), 25);

        // 2n - h - 2 triangles, with all 16 boundary points on the hull
        assert_eq!(mesh.number_of_points(), 25);
        assert_eq!(mesh.number_of_triangles(), 32);
        assert_eq!(mesh.number_of_edges(), 56);
        assert_eq!(mesh.number_of_boundary_edges(), 16);
        assert!(mesh.validate().is_ok());
        assert!(mesh.validate_delaunay().is_ok());
    }
}

#[test]
fn test_row_major_grid_keeps_every_point() {
    let points = generate_grid_points(3, 1.0, [0.0, 0.0]).unwrap();
    let mut swapped = points.clone();
    swapped.swap(2, 4);

    let mut row_major = Mesh::new();
    assert_eq!(row_major.insert_all(points).unwrap(), 9);
    let mut reordered = Mesh::new();
    assert_eq!(reordered.insert_all(swapped).unwrap(), 9);

    for mesh in [&row_major, &reordered] {
        assert_eq!(mesh.number_of_points(), 9);
        assert_eq!(mesh.number_of_triangles(), 8);
        assert_eq!(mesh.number_of_edges(), 16);
        assert_eq!(mesh.number_of_boundary_edges(), 8);
        assert!(mesh.validate_delaunay().is_ok());
    }
}

#[test]
fn test_regular_octagon_with_centre() {
    let mut mesh = Mesh::new();
    for i in 0..8 {
        let angle = f64::from(i) * std::f64::consts::FRAC_PI_4;
        mesh.insert(Point::new(angle.cos(), angle.sin())).unwrap();
    }
    assert_eq!(mesh.number_of_triangles(), 6);

    let centre = mesh.insert(Point::new(0.0, 0.0)).unwrap();
    assert_eq!(mesh.number_of_triangles(), 8);
    assert_eq!(mesh.convex_hull().unwrap().len(), 8);
    assert!(!mesh.convex_hull().unwrap().contains(&centre));
    assert!(mesh.validate().is_ok());
    assert!(mesh.validate_delaunay().is_ok());
}

// =========================================================================
// Extreme Coordinates
// =========================================================================

#[test]
fn test_large_and_small_scales() {
    for scale in [1e-3, 1.0, 1e6] {
        let mut mesh = Mesh::new();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.3, 0.6), (2.0, 0.5)] {
            mesh.insert(Point::new(x * scale, y * scale))
                .unwrap_or_else(|err| panic!("scale {scale}: {err}"));
        }
        assert_eq!(mesh.number_of_points(), 6);
        assert!(mesh.validate().is_ok(), "scale {scale}");
        assert!(mesh.validate_delaunay().is_ok(), "scale {scale}");
    }
}
