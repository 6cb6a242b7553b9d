//! Incremental Delaunay insertion by splitting and flipping.
//!
//! Each point goes through:
//! 1. Coordinate validation
//! 2. Bootstrap while no triangle exists (the third point forms the first one)
//! 3. Point location (visibility walk, see [`locate`])
//! 4. Duplicate rejection against nearby points
//! 5. A local split: one triangle into three, an edge's triangles into two
//!    each, or a fan of new triangles over the hull edges the point sees
//! 6. Legalization of the edges opposite the new point ([`legalize_edges`])
//!
//! Steps 1-4 and the geometric checks of step 5 run before anything is
//! mutated, so a rejected point leaves the mesh exactly as it was.

use crate::core::algorithms::flips::{FlipError, LegalizationStats, legalize_edges};
use crate::core::algorithms::locate::{LocateError, LocateResult, locate};
use crate::core::collections::{
    EdgeWorklist, FastHashMap, SmallBuffer, TriangleKeyBuffer, fast_hash_map_with_capacity,
};
use crate::core::edge::{EdgeError, EdgeKey};
use crate::core::mesh::{Mesh, MeshError, PointKey, TriangleKey};
use crate::core::triangle::TriangleError;
use crate::geometry::point::Point;
use crate::geometry::predicates::{Orientation, orientation};
use crate::geometry::traits::coordinate::{CoordinateScalar, CoordinateValidationError};

/// Error during incremental insertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertionError {
    /// A coordinate is NaN or infinite.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateValidationError),

    /// An existing point lies within the tolerance of the new one.
    #[error("Duplicate point: coincides with existing point {existing:?}")]
    DuplicatePoint {
        /// The point already in the mesh
        existing: PointKey,
    },

    /// The point would create a zero-area triangle.
    #[error("Degenerate triangle: point is collinear with {points:?}")]
    DegenerateTriangle {
        /// The points it is collinear with
        points: [PointKey; 2],
    },

    /// Edge bookkeeping failed.
    #[error("Invalid edge: {0}")]
    InvalidEdge(#[from] EdgeError),

    /// Point location failed
    #[error("Location error: {0}")]
    Location(#[from] LocateError),

    /// Legalization failed
    #[error("Flip error: {0}")]
    Flip(#[from] FlipError),

    /// Mesh mutation failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// Triangle construction failed
    #[error("Triangle error: {0}")]
    Triangle(#[from] TriangleError),
}

/// Failure partway through [`Mesh::insert_all`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Batch insertion stopped after {inserted} points: {source}")]
pub struct BatchInsertionError {
    /// Points inserted before the failure; they remain in the mesh.
    pub inserted: usize,
    /// Why the next point was rejected.
    pub source: InsertionError,
}

/// How a point entered the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionKind {
    /// Stored while waiting for a third, non-collinear point.
    Pending,
    /// Formed the first triangle.
    Bootstrap,
    /// Split the triangle containing it.
    SplitTriangle,
    /// Split the edge it lies on (and its one or two triangles).
    SplitEdge,
    /// Lay outside the hull and was connected to the hull edges it sees.
    ExtendHull,
}

/// What an insertion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionInfo {
    /// Key of the inserted point
    pub point: PointKey,
    /// Which insertion path was taken
    pub kind: InsertionKind,
    /// Triangles created by the split, before legalization
    pub triangles_created: usize,
    /// Legalization counters
    pub stats: LegalizationStats,
}

/// A planned split: triangles to remove, fans `[u, v]` to connect to the new
/// point as `(p, u, v)`, and the edges to legalize afterwards.
struct SplitPlan {
    kind: InsertionKind,
    removed: TriangleKeyBuffer,
    fans: SmallBuffer<[PointKey; 2], 4>,
    worklist: EdgeWorklist,
}

/// Insert `point` into `mesh` and restore the Delaunay property.
///
/// # Errors
///
/// - [`InsertionError::InvalidCoordinate`] for NaN or infinite coordinates.
/// - [`InsertionError::DuplicatePoint`] when an existing point is within
///   the tolerance.
/// - [`InsertionError::DegenerateTriangle`] when a new triangle would have
///   zero area.
///
/// All three leave the mesh unchanged. Other variants indicate an internal
/// inconsistency.
pub fn insert_point<T: CoordinateScalar>(
    mesh: &mut Mesh<T>,
    point: Point<T>,
) -> Result<InsertionInfo, InsertionError> {
    point.validate()?;

    if !mesh.is_complete() {
        return bootstrap(mesh, point);
    }

    let plan = match locate(mesh, &point, mesh.last_triangle())? {
        LocateResult::OnPoint(existing) => {
            return Err(InsertionError::DuplicatePoint { existing });
        }
        LocateResult::InsideTriangle(triangle) => {
            ensure_not_near(mesh, &point, &neighborhood(mesh, &[triangle]))?;
            plan_split_triangle(mesh, triangle)?
        }
        LocateResult::OnEdge(edge) => {
            let adjacent: TriangleKeyBuffer = mesh
                .edge(edge)
                .ok_or(MeshError::MissingEdge { edge })?
                .triangles()
                .iter()
                .copied()
                .collect();
            ensure_not_near(mesh, &point, &neighborhood(mesh, &adjacent))?;
            plan_split_edge(mesh, edge)?
        }
        LocateResult::Outside => {
            let all: Vec<PointKey> = mesh.points().map(|(key, _)| key).collect();
            ensure_not_near(mesh, &point, &all)?;
            plan_extend_hull(mesh, &point)?
        }
    };

    check_fans(mesh, &point, &plan.fans)?;
    apply_plan(mesh, point, plan)
}

/// Store points while all of them are collinear; the first point off their
/// line is joined to every consecutive pair along it.
///
/// A circle through two consecutive chain points meets the line only at those
/// two, so the fan is already Delaunay and needs no legalization.
fn bootstrap<T: CoordinateScalar>(
    mesh: &mut Mesh<T>,
    point: Point<T>,
) -> Result<InsertionInfo, InsertionError> {
    let pending: Vec<PointKey> = mesh.points().map(|(key, _)| key).collect();
    ensure_not_near(mesh, &point, &pending)?;

    let chain = collinear_chain(mesh, &pending)?;
    let side = match (chain.first(), chain.last()) {
        (Some(&first), Some(&last)) if first != last => orientation(
            &point_at(mesh, first)?,
            &point_at(mesh, last)?,
            &point,
            mesh.config().tolerance,
        ),
        _ => Orientation::DEGENERATE,
    };

    if side == Orientation::DEGENERATE {
        let key = mesh.add_point(point);
        tracing::debug!(?key, count = mesh.number_of_points(), "bootstrap: stored pending point");
        return Ok(InsertionInfo {
            point: key,
            kind: InsertionKind::Pending,
            triangles_created: 0,
            stats: LegalizationStats::default(),
        });
    }

    let fans: SmallBuffer<[PointKey; 2], 4> = chain
        .windows(2)
        .map(|pair| {
            if side == Orientation::POSITIVE {
                [pair[0], pair[1]]
            } else {
                [pair[1], pair[0]]
            }
        })
        .collect();
    check_fans(mesh, &point, &fans)?;

    tracing::debug!(chain = chain.len(), "bootstrap: forming first triangles");
    apply_plan(
        mesh,
        point,
        SplitPlan {
            kind: InsertionKind::Bootstrap,
            removed: TriangleKeyBuffer::new(),
            fans,
            worklist: EdgeWorklist::new(),
        },
    )
}

/// Pending points ordered along the line through the first two.
fn collinear_chain<T: CoordinateScalar>(
    mesh: &Mesh<T>,
    pending: &[PointKey],
) -> Result<Vec<PointKey>, InsertionError> {
    let &[first, second, ..] = pending else {
        return Ok(pending.to_vec());
    };
    let origin = point_at(mesh, first)?;
    let towards = point_at(mesh, second)?;
    let (dx, dy) = (towards.x() - origin.x(), towards.y() - origin.y());

    let mut projected = pending
        .iter()
        .map(|&key| {
            let p = point_at(mesh, key)?;
            Ok((key, (p.x() - origin.x()) * dx + (p.y() - origin.y()) * dy))
        })
        .collect::<Result<Vec<_>, InsertionError>>()?;
    projected.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    Ok(projected.into_iter().map(|(key, _)| key).collect())
}

/// One triangle becomes three around the new point.
fn plan_split_triangle<T: CoordinateScalar>(
    mesh: &Mesh<T>,
    triangle_key: TriangleKey,
) -> Result<SplitPlan, InsertionError> {
    let triangle = mesh
        .triangle(triangle_key)
        .ok_or(MeshError::MissingTriangle { triangle_key })?;
    let [a, b, c] = *triangle.points();

    Ok(SplitPlan {
        kind: InsertionKind::SplitTriangle,
        removed: std::iter::once(triangle_key).collect(),
        fans: [[b, c], [c, a], [a, b]].into_iter().collect(),
        worklist: triangle.edges().to_vec(),
    })
}

/// Each triangle `(u, v, w)` on the edge `u-v` becomes `(p, v, w)` and
/// `(p, w, u)`.
fn plan_split_edge<T: CoordinateScalar>(mesh: &Mesh<T>, edge: EdgeKey) -> Result<SplitPlan, InsertionError> {
    let record = mesh.edge(edge).ok_or(MeshError::MissingEdge { edge })?;

    let mut plan = SplitPlan {
        kind: InsertionKind::SplitEdge,
        removed: TriangleKeyBuffer::new(),
        fans: SmallBuffer::new(),
        worklist: EdgeWorklist::with_capacity(4),
    };
    for &triangle_key in record.triangles() {
        let triangle = mesh
            .triangle(triangle_key)
            .ok_or(MeshError::MissingTriangle { triangle_key })?;
        let (u, v) = triangle
            .directed_edge(edge)
            .ok_or(MeshError::MissingEdge { edge })?;
        let w = triangle
            .opposite_point(edge)
            .ok_or(MeshError::MissingEdge { edge })?;

        plan.removed.push(triangle_key);
        plan.fans.extend([[v, w], [w, u]]);
        plan.worklist.extend([EdgeKey::new(v, w), EdgeKey::new(w, u)]);
    }
    Ok(plan)
}

/// Connect the point to every hull edge it lies strictly beyond, judged by
/// the same tolerant orientation test that [`check_fans`] applies.
///
/// The visible edges must form one chain; otherwise the fan would enclose an
/// uncovered sliver, and the point is rejected as degenerate.
fn plan_extend_hull<T: CoordinateScalar>(
    mesh: &Mesh<T>,
    point: &Point<T>,
) -> Result<SplitPlan, InsertionError> {
    let tolerance = mesh.config().tolerance;
    let mut plan = SplitPlan {
        kind: InsertionKind::ExtendHull,
        removed: TriangleKeyBuffer::new(),
        fans: SmallBuffer::new(),
        worklist: EdgeWorklist::new(),
    };
    let mut endpoint_uses: FastHashMap<PointKey, usize> = fast_hash_map_with_capacity(8);

    for (edge, record) in mesh.edges() {
        let &[triangle_key] = record.triangles() else {
            continue;
        };
        let triangle = mesh
            .triangle(triangle_key)
            .ok_or(MeshError::MissingTriangle { triangle_key })?;
        let (u, v) = triangle
            .directed_edge(edge)
            .ok_or(MeshError::MissingEdge { edge })?;

        if orientation(&point_at(mesh, u)?, &point_at(mesh, v)?, point, tolerance) == Orientation::NEGATIVE {
            plan.fans.push([v, u]);
            plan.worklist.push(edge);
            *endpoint_uses.entry(u).or_default() += 1;
            *endpoint_uses.entry(v).or_default() += 1;
        }
    }

    let chain_ends = endpoint_uses.values().filter(|&&uses| uses == 1).count();
    if plan.fans.is_empty() || chain_ends != 2 {
        let points = plan.fans.first().copied().unwrap_or_default();
        return Err(InsertionError::DegenerateTriangle { points });
    }
    Ok(plan)
}

/// Every planned triangle `(p, u, v)` must be counter-clockwise and
/// non-degenerate under the same test [`Triangle::new`] applies.
///
/// [`Triangle::new`]: crate::core::triangle::Triangle::new
fn check_fans<T: CoordinateScalar>(
    mesh: &Mesh<T>,
    point: &Point<T>,
    fans: &[[PointKey; 2]],
) -> Result<(), InsertionError> {
    let tolerance = mesh.config().tolerance;
    for &[u, v] in fans {
        let pu = point_at(mesh, u)?;
        let pv = point_at(mesh, v)?;
        if orientation(point, &pu, &pv, tolerance) != Orientation::POSITIVE {
            return Err(InsertionError::DegenerateTriangle { points: [u, v] });
        }
    }
    Ok(())
}

fn apply_plan<T: CoordinateScalar>(
    mesh: &mut Mesh<T>,
    point: Point<T>,
    plan: SplitPlan,
) -> Result<InsertionInfo, InsertionError> {
    let key = mesh.add_point(point);
    for &triangle in &plan.removed {
        mesh.remove_triangle(triangle)?;
    }
    let mut created = TriangleKeyBuffer::new();
    for &[u, v] in &plan.fans {
        created.push(mesh.add_triangle([key, u, v])?);
    }

    let stats = legalize_edges(mesh, plan.worklist)?;
    tracing::debug!(
        ?key,
        kind = ?plan.kind,
        created = created.len(),
        flips = stats.flips_performed,
        "insert: point inserted"
    );
    Ok(InsertionInfo {
        point: key,
        kind: plan.kind,
        triangles_created: created.len(),
        stats,
    })
}

/// Vertices of `triangles` and of the triangles across their sides.
///
/// A point within the tolerance of an existing vertex that location did not
/// report directly lies next to one of these.
fn neighborhood<T: CoordinateScalar>(mesh: &Mesh<T>, triangles: &[TriangleKey]) -> SmallBuffer<PointKey, 16> {
    let mut keys = SmallBuffer::<PointKey, 16>::new();
    let mut push = |key: PointKey| {
        if !keys.contains(&key) {
            keys.push(key);
        }
    };
    for &triangle_key in triangles {
        let Some(triangle) = mesh.triangle(triangle_key) else {
            continue;
        };
        triangle.points().iter().copied().for_each(&mut push);
        for &edge in triangle.edges() {
            let neighbor = mesh
                .edge(edge)
                .and_then(|record| record.neighbor_of(triangle_key).ok().flatten())
                .and_then(|neighbor| mesh.triangle(neighbor));
            if let Some(neighbor) = neighbor {
                neighbor.points().iter().copied().for_each(&mut push);
            }
        }
    }
    keys
}

fn ensure_not_near<T: CoordinateScalar>(
    mesh: &Mesh<T>,
    point: &Point<T>,
    candidates: &[PointKey],
) -> Result<(), InsertionError> {
    let tolerance = mesh.config().tolerance;
    for &key in candidates {
        if point_at(mesh, key)?.distance(point) <= tolerance {
            return Err(InsertionError::DuplicatePoint { existing: key });
        }
    }
    Ok(())
}

fn point_at<T: CoordinateScalar>(mesh: &Mesh<T>, key: PointKey) -> Result<Point<T>, InsertionError> {
    mesh.point(key)
        .copied()
        .ok_or(InsertionError::Triangle(TriangleError::MissingPoint { point_key: key }))
}
