//! Shared types for the tracksimp simplification engine.

use serde::{Deserialize, Serialize};

/// A 2D point in Cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        crate::distance::square_distance(self.x, self.y, other.x, other.y)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered sequence of points forming a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline(Vec<Point>);

impl Polyline {
    /// Create a new polyline from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the polyline has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the polyline.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the polyline and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parameters for a simplification run.
///
/// The defaults match what the track-serving code uses for raw GPS
/// samples: a tolerance of `1e-5` decimal degrees with the radial
/// pre-pass disabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyConfig {
    /// Maximum allowed deviation, in the same units the accessor returns.
    ///
    /// Must be non-negative and not NaN. `f64::INFINITY` is accepted and
    /// collapses every input to its two endpoints.
    pub tolerance: f64,

    /// `true` runs Douglas-Peucker only. `false` runs the radial-distance
    /// pre-pass first, which is faster on dense input but may drop points
    /// Douglas-Peucker alone would keep.
    pub highest_quality: bool,
}

impl SimplifyConfig {
    /// Default tolerance: roughly one metre of latitude, in degrees.
    pub const DEFAULT_TOLERANCE: f64 = 1e-5;

    /// Default quality flag.
    pub const DEFAULT_HIGHEST_QUALITY: bool = true;

    /// Create a config with the given tolerance and quality flag.
    #[must_use]
    pub const fn new(tolerance: f64, highest_quality: bool) -> Self {
        Self {
            tolerance,
            highest_quality,
        }
    }

    /// Check that the tolerance is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidTolerance`] if the tolerance is
    /// negative or NaN.
    pub fn validate(&self) -> Result<(), SimplifyError> {
        validate_tolerance(self.tolerance)
    }
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE, Self::DEFAULT_HIGHEST_QUALITY)
    }
}

/// Reject tolerances that would make every distance comparison false.
pub(crate) fn validate_tolerance(tolerance: f64) -> Result<(), SimplifyError> {
    // NaN fails the comparison too.
    if tolerance >= 0.0 {
        Ok(())
    } else {
        Err(SimplifyError::InvalidTolerance(tolerance))
    }
}

/// Errors that can occur during simplification.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SimplifyError {
    /// The tolerance was negative or NaN.
    #[error("tolerance must be a non-negative number, got {0}")]
    InvalidTolerance(f64),
}
