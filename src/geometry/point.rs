//! Immutable planar points.
//!
//! A [`Point`] only carries coordinates. Identity inside a mesh is the
//! [`PointKey`](crate::core::mesh::PointKey) under which the mesh stores it, so
//! two points with equal coordinates are still distinct entities until the
//! mesh rejects one of them as a duplicate.

#![forbid(unsafe_code)]

use crate::geometry::traits::coordinate::{CoordinateScalar, CoordinateValidationError};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// A point in the plane with coordinates of scalar type `T`.
///
/// Points are immutable once created: the coordinate fields are private and
/// only exposed through accessors.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::geometry::point::Point;
///
/// let p = Point::new(1.0, 2.0);
/// assert_eq!(p.x(), 1.0);
/// assert_eq!(p.y(), 2.0);
/// assert_eq!(p.coords(), [1.0, 2.0]);
/// ```
pub struct Point<T>
where
    T: CoordinateScalar,
{
    x: T,
    y: T,
}

impl<T> Point<T>
where
    T: CoordinateScalar,
{
    /// Creates a point from its two coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> T {
        self.y
    }

    /// Both coordinates as an array.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planar_delaunay::geometry::point::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.distance_squared(&b), 25.0);
    /// assert_eq!(a.distance(&b), 5.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> T {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Self) -> T {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Checks that both coordinates are finite.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateValidationError::InvalidCoordinate`] for the first
    /// NaN or infinite coordinate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planar_delaunay::geometry::point::Point;
    ///
    /// assert!(Point::new(1.0, 2.0).validate().is_ok());
    /// assert!(Point::new(1.0, f64::NAN).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoordinateValidationError> {
        for (coordinate_index, value) in self.coords().iter().enumerate() {
            if !value.is_finite_generic() {
                return Err(CoordinateValidationError::InvalidCoordinate {
                    coordinate_index,
                    coordinate_value: format!("{value:?}"),
                });
            }
        }
        Ok(())
    }
}

impl<T: CoordinateScalar> From<[T; 2]> for Point<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: CoordinateScalar> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: CoordinateScalar> From<Point<T>> for [T; 2] {
    #[inline]
    fn from(point: Point<T>) -> Self {
        point.coords()
    }
}

impl<T: CoordinateScalar> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_conversions_roundtrip() {
        let p: Point<f64> = [1.5, -2.0].into();
        assert_eq!(p, Point::from((1.5, -2.0)));
        let coords: [f64; 2] = p.into();
        assert_eq!(coords, [1.5, -2.0]);
    }

    #[test]
    fn point_distance() {
        let a = Point::new(1.0_f32, 1.0);
        let b = Point::new(4.0_f32, 5.0);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(b.distance_squared(&a), 25.0);
    }

    #[test]
    fn point_validate_reports_index() {
        let err = Point::new(0.0, f64::INFINITY).validate().unwrap_err();
        assert!(matches!(
            err,
            CoordinateValidationError::InvalidCoordinate {
                coordinate_index: 1,
                ..
            }
        ));
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "(1, 2.5)");
    }
}
