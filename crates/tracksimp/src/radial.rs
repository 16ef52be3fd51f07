//! Radial-distance pre-pass.
//!
//! An O(n) filter that drops every point lying within the tolerance of
//! the last *retained* point. It looks only at point-to-point proximity,
//! not at segment geometry, so it is not shape-faithful on its own. It
//! runs ahead of Douglas-Peucker when speed matters more than fidelity.

use crate::accessor::PointAccessor;
use crate::distance::point_distance;

/// Indices of the points that survive the radial-distance filter.
///
/// Point 0 is always kept. A later point is kept when its squared
/// distance to the previously kept point exceeds `sq_tolerance`. After
/// the scan the final input point is appended unless it was already kept
/// or `accessor` reports it equal to the last kept point, so the output
/// ends on the input's last location. The returned indices are strictly
/// increasing.
///
/// Returns an empty vector for empty input.
pub fn radial_distance_indices<T, A>(points: &[T], sq_tolerance: f64, accessor: &A) -> Vec<usize>
where
    A: PointAccessor<T> + ?Sized,
{
    let Some(last) = points.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut kept = vec![0];
    let mut prev = 0;

    for (i, point) in points.iter().enumerate().skip(1) {
        if point_distance(accessor, point, &points[prev]) > sq_tolerance {
            kept.push(i);
            prev = i;
        }
    }

    if prev != last && !accessor.equal(&points[prev], &points[last]) {
        kept.push(last);
    }

    kept
}
