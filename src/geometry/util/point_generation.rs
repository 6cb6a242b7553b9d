//! Point generators for tests, benchmarks and demos.

use rand::Rng;
use rand::SeedableRng;
use rand::distr::uniform::SampleUniform;

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Errors from the point generators.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum RandomPointGenerationError {
    /// The coordinate range is empty or inverted.
    #[error("Invalid coordinate range: min {min} must be less than max {max}")]
    InvalidRange {
        /// Lower bound, formatted.
        min: String,
        /// Upper bound, formatted.
        max: String,
    },
    /// A grid was requested with zero points per axis.
    #[error("Invalid point count: {n_points}")]
    InvalidPointCount {
        /// Requested count.
        n_points: usize,
    },
}

fn check_range<T: CoordinateScalar>(range: (T, T)) -> Result<(), RandomPointGenerationError> {
    if range.0 >= range.1 || !range.0.is_finite() || !range.1.is_finite() {
        return Err(RandomPointGenerationError::InvalidRange {
            min: format!("{:?}", range.0),
            max: format!("{:?}", range.1),
        });
    }
    Ok(())
}

fn sample_points<T, R>(rng: &mut R, n_points: usize, range: (T, T)) -> Vec<Point<T>>
where
    T: CoordinateScalar + SampleUniform,
    R: Rng,
{
    (0..n_points)
        .map(|_| {
            Point::new(
                rng.random_range(range.0..range.1),
                rng.random_range(range.0..range.1),
            )
        })
        .collect()
}

/// Generate `n_points` uniformly random points in `[min, max)²`.
///
/// # Errors
///
/// Returns [`RandomPointGenerationError::InvalidRange`] if `min >= max`.
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::util::generate_random_points;
///
/// let points = generate_random_points::<f64>(100, (-1.0, 1.0)).unwrap();
/// assert_eq!(points.len(), 100);
/// assert!(generate_random_points::<f64>(10, (1.0, -1.0)).is_err());
/// ```
pub fn generate_random_points<T: CoordinateScalar + SampleUniform>(
    n_points: usize,
    range: (T, T),
) -> Result<Vec<Point<T>>, RandomPointGenerationError> {
    check_range(range)?;
    let mut rng = rand::rng();
    Ok(sample_points(&mut rng, n_points, range))
}

/// Generate random points with a seeded RNG for reproducible results.
///
/// # Errors
///
/// Returns [`RandomPointGenerationError::InvalidRange`] if `min >= max`.
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::util::generate_random_points_seeded;
///
/// let a = generate_random_points_seeded::<f64>(50, (0.0, 10.0), 42).unwrap();
/// let b = generate_random_points_seeded::<f64>(50, (0.0, 10.0), 42).unwrap();
/// assert_eq!(a, b);
///
/// let c = generate_random_points_seeded::<f64>(50, (0.0, 10.0), 7).unwrap();
/// assert_ne!(a, c);
/// ```
pub fn generate_random_points_seeded<T: CoordinateScalar + SampleUniform>(
    n_points: usize,
    range: (T, T),
    seed: u64,
) -> Result<Vec<Point<T>>, RandomPointGenerationError> {
    check_range(range)?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Ok(sample_points(&mut rng, n_points, range))
}

/// Generate a regular `points_per_axis × points_per_axis` grid.
///
/// Grids are maximally cocircular, which makes them a good stress input for
/// the in-circle tolerance.
///
/// # Errors
///
/// Returns [`RandomPointGenerationError::InvalidPointCount`] if
/// `points_per_axis` is zero.
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::util::generate_grid_points;
///
/// let grid = generate_grid_points::<f64>(4, 1.0, [0.0, 0.0]).unwrap();
/// assert_eq!(grid.len(), 16);
/// ```
pub fn generate_grid_points<T: CoordinateScalar>(
    points_per_axis: usize,
    spacing: T,
    offset: [T; 2],
) -> Result<Vec<Point<T>>, RandomPointGenerationError> {
    if points_per_axis == 0 {
        return Err(RandomPointGenerationError::InvalidPointCount { n_points: 0 });
    }

    let mut points = Vec::with_capacity(points_per_axis * points_per_axis);
    let mut y = offset[1];
    for _ in 0..points_per_axis {
        let mut x = offset[0];
        for _ in 0..points_per_axis {
            points.push(Point::new(x, y));
            x = x + spacing;
        }
        y = y + spacing;
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_points_stay_in_range() {
        let points = generate_random_points_seeded::<f64>(200, (-5.0, 5.0), 1).unwrap();
        assert!(
            points
                .iter()
                .all(|p| (-5.0..5.0).contains(&p.x()) && (-5.0..5.0).contains(&p.y()))
        );
    }

    #[test]
    fn random_points_f32() {
        let points = generate_random_points::<f32>(10, (0.0, 1.0)).unwrap();
        assert_eq!(points.len(), 10);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        assert!(matches!(
            generate_random_points_seeded::<f64>(5, (2.0, 2.0), 0),
            Err(RandomPointGenerationError::InvalidRange { .. })
        ));
        assert!(generate_random_points::<f64>(5, (f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn grid_layout() {
        let grid = generate_grid_points::<f64>(3, 2.0, [1.0, -1.0]).unwrap();
        assert_eq!(grid.len(), 9);
        assert_eq!(grid[0], Point::new(1.0, -1.0));
        assert_eq!(grid[8], Point::new(5.0, 3.0));
        assert_eq!(
            generate_grid_points::<f64>(0, 1.0, [0.0, 0.0]),
            Err(RandomPointGenerationError::InvalidPointCount { n_points: 0 })
        );
    }
}
