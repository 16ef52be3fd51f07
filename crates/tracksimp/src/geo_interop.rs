//! Simplification of [`geo`] geometries.
//!
//! `geo` ships its own Ramer-Douglas-Peucker, but it has no radial
//! pre-pass and no way to recover which input vertices survived. These
//! helpers run the tracksimp engine over `geo` coordinates instead.

use geo::{Coord, LineString};

use crate::accessor::PointAccessor;
use crate::simplify::Simplifier;
use crate::types::{Point, SimplifyConfig, SimplifyError};

/// Accessor for [`geo::Coord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordAccessor;

impl PointAccessor<Coord<f64>> for CoordAccessor {
    fn x(&self, point: &Coord<f64>) -> f64 {
        point.x
    }

    fn y(&self, point: &Coord<f64>) -> f64 {
        point.y
    }
}

impl From<Point> for Coord<f64> {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Coord<f64>> for Point {
    fn from(c: Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

/// Simplify a [`LineString`].
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidTolerance`] if the configured
/// tolerance is negative or NaN.
pub fn simplify_line_string(
    line: &LineString<f64>,
    config: &SimplifyConfig,
) -> Result<LineString<f64>, SimplifyError> {
    let simplified = Simplifier::new(CoordAccessor).simplify_with_config(&line.0, config)?;
    Ok(LineString::new(simplified.into_owned()))
}

/// Indices of the [`LineString`] vertices kept by simplification.
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidTolerance`] if the configured
/// tolerance is negative or NaN.
pub fn simplify_line_string_indices(
    line: &LineString<f64>,
    config: &SimplifyConfig,
) -> Result<Vec<usize>, SimplifyError> {
    Simplifier::new(CoordAccessor).simplify_indices(&line.0, config.tolerance, config.highest_quality)
}
