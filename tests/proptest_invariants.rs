//! Property-based tests for structural mesh invariants.
//!
//! After any sequence of insertions (rejected points included):
//! - every edge bounds one or two triangles, and every triangle is
//!   registered on its three edges
//! - every triangle is counter-clockwise with positive area
//! - `V - E + F = 1` once the first triangle exists
//! - the hull loop and the boundary edges agree
//! - every stored point is found again by point location

use planar_delaunay::prelude::*;
use proptest::prelude::*;

// =============================================================================
// TEST CONFIGURATION
// =============================================================================

/// Generates the invariant tests for one scalar type.
macro_rules! test_mesh_invariants {
    ($t:ident, $range:expr) => {
        pastey::paste! {
            fn [<point_cloud_ $t>]() -> impl Strategy<Value = Vec<Point<$t>>> {
                prop::collection::vec(($range, $range), 3..=30)
                    .prop_map(|coords| coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
            }

            fn [<build_mesh_ $t>](points: &[Point<$t>]) -> Result<Mesh<$t>, TestCaseError> {
                let mut mesh = Mesh::new();
                for point in points {
                    match mesh.insert(*point) {
                        Ok(_) | Err(InsertionError::DuplicatePoint { .. }) => {}
                        // Only the fan over a collinear start can be degenerate
                        Err(InsertionError::DegenerateTriangle { .. }) if !mesh.is_complete() => {}
                        Err(err) => {
                            return Err(TestCaseError::fail(format!(
                                "unexpected insertion error: {err}"
                            )));
                        }
                    }
                }
                Ok(mesh)
            }

            proptest! {
                /// Property: edges bound one or two triangles and adjacency is
                /// registered both ways.
                #[test]
                fn [<prop_edge_triangle_adjacency_ $t>](points in [<point_cloud_ $t>]()) {
                    let mesh = [<build_mesh_ $t>](&points)?;

                    for (edge_key, edge) in mesh.edges() {
                        let count = edge.triangles().len();
                        prop_assert!((1..=2).contains(&count), "edge {edge_key:?} bounds {count} triangles");
                        for &triangle_key in edge.triangles() {
                            let triangle = mesh.triangle(triangle_key).unwrap();
                            prop_assert!(triangle.has_edge(edge_key));
                        }
                    }
                    for (triangle_key, triangle) in mesh.triangles() {
                        for &edge_key in triangle.edges() {
                            let edge = mesh.edge(edge_key).unwrap();
                            prop_assert!(edge.triangles().contains(&triangle_key));
                        }
                    }
                    prop_assert!(mesh.validate().is_ok(), "{:?}", mesh.validate());
                }

                /// Property: every triangle is counter-clockwise.
                #[test]
                fn [<prop_triangles_counter_clockwise_ $t>](points in [<point_cloud_ $t>]()) {
                    let mesh = [<build_mesh_ $t>](&points)?;

                    for (triangle_key, _) in mesh.triangles() {
                        let [a, b, c] = mesh.triangle_points(triangle_key).unwrap();
                        prop_assert!(orient2d(&a, &b, &c) > 0.0);
                        prop_assert!(signed_area(&a, &b, &c) > 0.0);
                    }
                }

                /// Property: `V - E + F = 1` for any constructed mesh.
                #[test]
                fn [<prop_euler_characteristic_ $t>](points in [<point_cloud_ $t>]()) {
                    let mesh = [<build_mesh_ $t>](&points)?;
                    prop_assume!(mesh.is_complete());

                    let v = mesh.number_of_points();
                    let e = mesh.number_of_edges();
                    let f = mesh.number_of_triangles();
                    prop_assert_eq!(v + f, e + 1);
                }

                /// Property: the hull loop walks exactly the boundary edges.
                #[test]
                fn [<prop_hull_matches_boundary_ $t>](points in [<point_cloud_ $t>]()) {
                    let mesh = [<build_mesh_ $t>](&points)?;
                    prop_assume!(mesh.is_complete());

                    let hull = mesh.convex_hull().unwrap();
                    prop_assert_eq!(hull.len(), mesh.number_of_boundary_edges());
                    for (i, &a) in hull.iter().enumerate() {
                        let b = hull[(i + 1) % hull.len()];
                        let edge = mesh.edge_between(a, b);
                        prop_assert!(edge.is_some_and(Edge::is_boundary));
                    }
                }

                /// Property: locating a stored point returns that point.
                #[test]
                fn [<prop_locate_finds_vertices_ $t>](points in [<point_cloud_ $t>]()) {
                    let mesh = [<build_mesh_ $t>](&points)?;
                    prop_assume!(mesh.is_complete());

                    for (key, point) in mesh.points() {
                        prop_assert_eq!(mesh.locate(point).unwrap(), LocateResult::OnPoint(key));
                    }
                }
            }
        }
    };
}

test_mesh_invariants!(f64, -100.0_f64..100.0);
test_mesh_invariants!(f32, -10.0_f32..10.0);
