//! Polyline simplification entry points.
//!
//! [`Simplifier`] binds a [`PointAccessor`] and runs the two passes in
//! order: the optional radial-distance filter, then Douglas-Peucker.
//! Both passes compare squared distances against the squared tolerance,
//! which is computed once per call.

use std::borrow::Cow;

use crate::accessor::{Accessors, AccessorsWithEq, Cartesian, PointAccessor};
use crate::douglas_peucker::{douglas_peucker_indices, douglas_peucker_subset};
use crate::radial::radial_distance_indices;
use crate::types::{Polyline, SimplifyConfig, SimplifyError, validate_tolerance};

/// One of the two simplification passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    Radial,
    DouglasPeucker,
}

/// Wraps each pass a [`Simplifier`] runs.
///
/// `run` returns the indices the pass retained; implementations must
/// return them unchanged.
pub(crate) trait PassObserver {
    fn observe(
        &mut self,
        pass: Pass,
        points_before: usize,
        run: impl FnOnce() -> Vec<usize>,
    ) -> Vec<usize>;
}

impl PassObserver for () {
    fn observe(
        &mut self,
        _pass: Pass,
        _points_before: usize,
        run: impl FnOnce() -> Vec<usize>,
    ) -> Vec<usize> {
        run()
    }
}

/// Generic polyline simplifier.
///
/// Holds no state besides its accessor, so a single instance can be
/// shared freely and reused for any number of inputs.
///
/// # Example
///
/// ```
/// use tracksimp::Simplifier;
///
/// #[derive(Clone)]
/// struct Fix {
///     lat: f64,
///     lon: f64,
/// }
///
/// let track = vec![
///     Fix { lat: 0.0, lon: 0.0 },
///     Fix { lat: 0.0, lon: 1.0 },
///     Fix { lat: 0.0, lon: 2.0 },
/// ];
///
/// let simplifier = Simplifier::from_fns(|f: &Fix| f.lon, |f: &Fix| f.lat);
/// let kept = simplifier.simplify_indices(&track, 0.1, true).unwrap();
/// assert_eq!(kept, vec![0, 2]);
///
/// // `simplify` hands back the records themselves, which needs `Clone`.
/// let simplified = simplifier.simplify(&track, 0.1, true).unwrap();
/// assert_eq!(simplified.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simplifier<A> {
    accessor: A,
}

impl<A> Simplifier<A> {
    /// Create a simplifier reading coordinates through `accessor`.
    pub const fn new(accessor: A) -> Self {
        Self { accessor }
    }

    /// The accessor this simplifier reads coordinates through.
    pub const fn accessor(&self) -> &A {
        &self.accessor
    }
}

impl<X, Y> Simplifier<Accessors<X, Y>> {
    /// Create a simplifier from an x-extractor and a y-extractor.
    ///
    /// Endpoint equality compares both coordinates exactly.
    pub const fn from_fns(x: X, y: Y) -> Self {
        Self::new(Accessors::new(x, y))
    }
}

impl<X, Y, E> Simplifier<AccessorsWithEq<X, Y, E>> {
    /// Create a simplifier from coordinate extractors and an endpoint
    /// equality predicate.
    pub fn from_fns_with_equality(x: X, y: Y, equal: E) -> Self {
        Self::new(Accessors::new(x, y).with_equality(equal))
    }
}

impl<A> Simplifier<A> {
    /// Indices of the points that survive simplification, ascending.
    ///
    /// Inputs of two points or fewer yield every index. Otherwise index 0
    /// is always present, and so is the last index unless the radial pass
    /// found the final point equal to an earlier retained one.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidTolerance`] if `tolerance` is
    /// negative or NaN. The check happens before any other work.
    pub fn simplify_indices<T>(
        &self,
        points: &[T],
        tolerance: f64,
        highest_quality: bool,
    ) -> Result<Vec<usize>, SimplifyError>
    where
        A: PointAccessor<T>,
    {
        self.simplify_indices_observed(points, tolerance, highest_quality, &mut ())
    }

    /// [`simplify_indices`](Self::simplify_indices), handing each pass to
    /// `observer` as it runs.
    pub(crate) fn simplify_indices_observed<T, O>(
        &self,
        points: &[T],
        tolerance: f64,
        highest_quality: bool,
        observer: &mut O,
    ) -> Result<Vec<usize>, SimplifyError>
    where
        A: PointAccessor<T>,
        O: PassObserver,
    {
        validate_tolerance(tolerance)?;

        if points.len() <= 2 {
            return Ok((0..points.len()).collect());
        }

        let sq_tolerance = tolerance * tolerance;
        let accessor = &self.accessor;

        let kept = if highest_quality {
            observer.observe(Pass::DouglasPeucker, points.len(), || {
                douglas_peucker_indices(points, sq_tolerance, accessor)
            })
        } else {
            let filtered = observer.observe(Pass::Radial, points.len(), || {
                radial_distance_indices(points, sq_tolerance, accessor)
            });
            log::trace!(
                "radial pass kept {} of {} points",
                filtered.len(),
                points.len()
            );
            observer.observe(Pass::DouglasPeucker, filtered.len(), || {
                douglas_peucker_subset(points, &filtered, sq_tolerance, accessor)
            })
        };

        log::debug!(
            "simplified {} points to {} (tolerance {tolerance}, highest_quality {highest_quality})",
            points.len(),
            kept.len()
        );

        Ok(kept)
    }

    /// Simplify `points`, preserving their order.
    ///
    /// `tolerance` is the maximum deviation allowed, in the units the
    /// accessor returns. With `highest_quality` set only Douglas-Peucker
    /// runs; otherwise the radial-distance filter runs first, which is
    /// faster on dense input at some cost in fidelity.
    ///
    /// Inputs of two points or fewer are returned as-is without copying.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidTolerance`] if `tolerance` is
    /// negative or NaN.
    pub fn simplify<'a, T>(
        &self,
        points: &'a [T],
        tolerance: f64,
        highest_quality: bool,
    ) -> Result<Cow<'a, [T]>, SimplifyError>
    where
        A: PointAccessor<T>,
        T: Clone,
    {
        let kept = self.simplify_indices(points, tolerance, highest_quality)?;

        if kept.len() == points.len() {
            return Ok(Cow::Borrowed(points));
        }

        Ok(Cow::Owned(
            kept.into_iter().map(|i| points[i].clone()).collect(),
        ))
    }

    /// [`simplify`](Self::simplify) with parameters taken from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidTolerance`] if the configured
    /// tolerance is negative or NaN.
    pub fn simplify_with_config<'a, T>(
        &self,
        points: &'a [T],
        config: &SimplifyConfig,
    ) -> Result<Cow<'a, [T]>, SimplifyError>
    where
        A: PointAccessor<T>,
        T: Clone,
    {
        self.simplify(points, config.tolerance, config.highest_quality)
    }
}

/// Simplify a single [`Polyline`].
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidTolerance`] if the configured
/// tolerance is negative or NaN.
pub fn simplify_polyline(
    polyline: &Polyline,
    config: &SimplifyConfig,
) -> Result<Polyline, SimplifyError> {
    let simplified = Simplifier::new(Cartesian).simplify_with_config(polyline.points(), config)?;
    Ok(Polyline::new(simplified.into_owned()))
}

/// Simplify several polylines independently with the same parameters.
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidTolerance`] if the configured
/// tolerance is negative or NaN.
pub fn simplify_polylines(
    polylines: &[Polyline],
    config: &SimplifyConfig,
) -> Result<Vec<Polyline>, SimplifyError> {
    config.validate()?;
    polylines
        .iter()
        .map(|pl| simplify_polyline(pl, config))
        .collect()
}
