//! Geometric predicates for planar triangulation.
//!
//! Two predicates drive the whole engine:
//!
//! - [`orient2d`] / [`orientation`]: which side of a directed line a point is on.
//!   Used for winding normalization, point location and hull visibility.
//! - [`incircle`] / [`in_circle`]: whether a point lies inside the circumcircle
//!   of a triangle. Used as the legalization oracle for edge flips.
//!
//! Both come in a raw form returning the signed determinant and a classified
//! form applying a tolerance.

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Represents the position of a point relative to a circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InCircle {
    /// The point is outside the circumcircle
    OUTSIDE,
    /// The point is on the circumcircle (within numerical tolerance)
    BOUNDARY,
    /// The point is inside the circumcircle
    INSIDE,
}

impl std::fmt::Display for InCircle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Represents the orientation of a point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clockwise turn (determinant < 0)
    NEGATIVE,
    /// Collinear within tolerance
    DEGENERATE,
    /// Counter-clockwise turn (determinant > 0)
    POSITIVE,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Twice the signed area of the triangle `a, b, c`.
///
/// This is the 2D cross product of `(b - a)` and `(c - a)`: positive when `c`
/// lies to the left of the directed line `a → b`, negative to the right, zero
/// when the three points are collinear.
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::point::Point;
/// use planar_delaunay::geometry::predicates::orient2d;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// assert!(orient2d(&a, &b, &Point::new(0.0, 1.0)) > 0.0);
/// assert!(orient2d(&a, &b, &Point::new(0.0, -1.0)) < 0.0);
/// assert_eq!(orient2d(&a, &b, &Point::new(2.0, 0.0)), 0.0);
/// ```
#[inline]
#[must_use]
pub fn orient2d<T: CoordinateScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T {
    (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
}

/// Signed distance from `p` to the line through `a` and `b`.
///
/// Positive on the left of `a → b`. Returns zero when `a == b`.
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::point::Point;
/// use planar_delaunay::geometry::predicates::signed_distance_to_line;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(2.0, 0.0);
/// assert_eq!(signed_distance_to_line(&a, &b, &Point::new(1.0, 3.0)), 3.0);
/// assert_eq!(signed_distance_to_line(&a, &b, &Point::new(1.0, -0.5)), -0.5);
/// ```
#[inline]
#[must_use]
pub fn signed_distance_to_line<T: CoordinateScalar>(a: &Point<T>, b: &Point<T>, p: &Point<T>) -> T {
    let length = a.distance(b);
    if length <= T::zero() {
        return T::zero();
    }
    orient2d(a, b, p) / length
}

/// Classify the orientation of `a, b, c` with a distance tolerance.
///
/// The triple is [`Orientation::DEGENERATE`] when its smallest altitude
/// (twice the area over the longest side) is at most `tolerance`, which makes
/// the test independent of vertex order.
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::point::Point;
/// use planar_delaunay::geometry::predicates::{orientation, Orientation};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let c = Point::new(0.0, 1.0);
/// assert_eq!(orientation(&a, &b, &c, 1e-10), Orientation::POSITIVE);
/// assert_eq!(orientation(&a, &c, &b, 1e-10), Orientation::NEGATIVE);
/// assert_eq!(
///     orientation(&a, &b, &Point::new(5.0, 1e-12), 1e-10),
///     Orientation::DEGENERATE
/// );
/// ```
#[must_use]
pub fn orientation<T: CoordinateScalar>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
    tolerance: T,
) -> Orientation {
    let det = orient2d(a, b, c);
    let longest = a.distance(b).max(b.distance(c)).max(c.distance(a));
    if longest <= T::zero() || det.abs() <= tolerance * longest {
        Orientation::DEGENERATE
    } else if det > T::zero() {
        Orientation::POSITIVE
    } else {
        Orientation::NEGATIVE
    }
}

/// Raw in-circle determinant for the counter-clockwise triangle `a, b, c`.
///
/// ```text
/// | ax-dx  ay-dy  (ax-dx)²+(ay-dy)² |
/// | bx-dx  by-dy  (bx-dx)²+(by-dy)² |
/// | cx-dx  cy-dy  (cx-dx)²+(cy-dy)² |
/// ```
///
/// Positive iff `d` lies inside the circumcircle when `a, b, c` is
/// counter-clockwise. Returns the determinant together with its permanent
/// (the same expansion over absolute values), which bounds the rounding
/// error and is used to scale tolerances.
#[must_use]
pub fn incircle<T: CoordinateScalar>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
    d: &Point<T>,
) -> (T, T) {
    let adx = a.x() - d.x();
    let ady = a.y() - d.y();
    let bdx = b.x() - d.x();
    let bdy = b.y() - d.y();
    let cdx = c.x() - d.x();
    let cdy = c.y() - d.y();

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    let bc = bdx * cdy - cdx * bdy;
    let ca = cdx * ady - adx * cdy;
    let ab = adx * bdy - bdx * ady;

    let det = alift * bc + blift * ca + clift * ab;
    let permanent = alift * ((bdx * cdy).abs() + (cdx * bdy).abs())
        + blift * ((cdx * ady).abs() + (adx * cdy).abs())
        + clift * ((adx * bdy).abs() + (bdx * ady).abs());

    (det, permanent)
}

/// Classify `d` against the circumcircle of `a, b, c`.
///
/// The triangle may have either winding; the determinant sign is normalised
/// by the orientation of `a, b, c` first. A determinant within
/// `relative_tolerance * permanent` of zero is [`InCircle::BOUNDARY`], as is
/// any query against a triangle with zero area.
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::point::Point;
/// use planar_delaunay::geometry::predicates::{in_circle, InCircle};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let c = Point::new(0.0, 1.0);
///
/// assert_eq!(in_circle(&a, &b, &c, &Point::new(0.5, 0.5), 1e-12), InCircle::INSIDE);
/// assert_eq!(in_circle(&a, &c, &b, &Point::new(0.5, 0.5), 1e-12), InCircle::INSIDE);
/// assert_eq!(in_circle(&a, &b, &c, &Point::new(1.0, 1.0), 1e-12), InCircle::BOUNDARY);
/// assert_eq!(in_circle(&a, &b, &c, &Point::new(3.0, 3.0), 1e-12), InCircle::OUTSIDE);
/// ```
#[must_use]
pub fn in_circle<T: CoordinateScalar>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
    d: &Point<T>,
    relative_tolerance: T,
) -> InCircle {
    let winding = orient2d(a, b, c);
    if winding == T::zero() {
        return InCircle::BOUNDARY;
    }

    let (det, permanent) = incircle(a, b, c, d);
    let det = if winding > T::zero() { det } else { -det };

    if det.abs() <= relative_tolerance * permanent {
        InCircle::BOUNDARY
    } else if det > T::zero() {
        InCircle::INSIDE
    } else {
        InCircle::OUTSIDE
    }
}
