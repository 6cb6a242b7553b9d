//! Circumcircle and area computations for triangles.

use crate::geometry::point::Point;
use crate::geometry::predicates::orient2d;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Errors from circumcircle computations.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum CircumcenterError {
    /// The three points are collinear, so no circumcircle exists.
    #[error("Cannot compute circumcircle of a degenerate (collinear) triangle")]
    DegenerateTriangle,
}

/// The circle passing through the three vertices of a triangle.
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::point::Point;
/// use planar_delaunay::geometry::util::Circumcircle;
///
/// let circle = Circumcircle::from_points(
///     &Point::new(0.0, 0.0),
///     &Point::new(2.0, 0.0),
///     &Point::new(0.0, 2.0),
/// )
/// .unwrap();
/// assert_eq!(circle.center, Point::new(1.0, 1.0));
/// assert!((circle.radius - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circumcircle<T: CoordinateScalar> {
    /// Center of the circle.
    pub center: Point<T>,
    /// Radius of the circle.
    pub radius: T,
}

impl<T: CoordinateScalar> Circumcircle<T> {
    /// Computes the circumcircle of `a, b, c`.
    ///
    /// # Errors
    ///
    /// Returns [`CircumcenterError::DegenerateTriangle`] for collinear input.
    pub fn from_points(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Result<Self, CircumcenterError> {
        let center = circumcenter(a, b, c)?;
        Ok(Self {
            center,
            radius: center.distance(a),
        })
    }

    /// Whether `point` lies strictly inside the circle, by distance comparison.
    #[must_use]
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.center.distance(point) < self.radius
    }
}

/// Circumcenter of the triangle `a, b, c`.
///
/// Coordinates are taken relative to `a` before solving the perpendicular
/// bisector system, which keeps magnitudes small for translated inputs.
///
/// # Errors
///
/// Returns [`CircumcenterError::DegenerateTriangle`] when the points are
/// exactly collinear.
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::point::Point;
/// use planar_delaunay::geometry::util::circumcenter;
///
/// let center = circumcenter(
///     &Point::new(0.0, 0.0),
///     &Point::new(4.0, 0.0),
///     &Point::new(0.0, 2.0),
/// )
/// .unwrap();
/// assert_eq!(center, Point::new(2.0, 1.0));
/// ```
pub fn circumcenter<T: CoordinateScalar>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
) -> Result<Point<T>, CircumcenterError> {
    let bx = b.x() - a.x();
    let by = b.y() - a.y();
    let cx = c.x() - a.x();
    let cy = c.y() - a.y();

    let two = T::one() + T::one();
    let d = two * (bx * cy - by * cx);
    if d == T::zero() || !d.is_finite() {
        return Err(CircumcenterError::DegenerateTriangle);
    }

    let b_len = bx * bx + by * by;
    let c_len = cx * cx + cy * cy;
    let ux = (cy * b_len - by * c_len) / d;
    let uy = (bx * c_len - cx * b_len) / d;

    Ok(Point::new(a.x() + ux, a.y() + uy))
}

/// Circumradius of the triangle `a, b, c`.
///
/// # Errors
///
/// Returns [`CircumcenterError::DegenerateTriangle`] for collinear input.
pub fn circumradius<T: CoordinateScalar>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
) -> Result<T, CircumcenterError> {
    Ok(circumcenter(a, b, c)?.distance(a))
}

/// Signed area of the triangle `a, b, c` (positive when counter-clockwise).
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::point::Point;
/// use planar_delaunay::geometry::util::signed_area;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(2.0, 0.0);
/// let c = Point::new(0.0, 2.0);
/// assert_eq!(signed_area(&a, &b, &c), 2.0);
/// assert_eq!(signed_area(&a, &c, &b), -2.0);
/// ```
#[must_use]
pub fn signed_area<T: CoordinateScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T {
    orient2d(a, b, c) / (T::one() + T::one())
}
