//! Squared distance primitives.
//!
//! Every comparison in the engine happens in squared-distance space, so
//! none of these functions take a square root.

use crate::accessor::PointAccessor;

/// Squared Euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn square_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

/// Squared distance from `(x0, y0)` to the segment `(x1, y1) -> (x2, y2)`.
///
/// The reference point is the projection of `(x0, y0)` onto the segment,
/// clamped to the endpoints. A zero-length segment degenerates to the
/// point-to-point distance from `(x0, y0)` to `(x1, y1)`.
///
/// Products and sums are rounded separately (no fused multiply-add);
/// mirror-image inputs give bit-identical results.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn square_segment_distance(x0: f64, y0: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;

    let (mut rx, mut ry) = (x1, y1);

    if dx != 0.0 || dy != 0.0 {
        let t = ((x0 - x1) * dx + (y0 - y1) * dy) / (dx * dx + dy * dy);

        if t > 1.0 {
            rx = x2;
            ry = y2;
        } else if t > 0.0 {
            rx = x1 + dx * t;
            ry = y1 + dy * t;
        }
    }

    square_distance(x0, y0, rx, ry)
}

/// Squared distance between two points, read through `accessor`.
pub(crate) fn point_distance<T, A>(accessor: &A, a: &T, b: &T) -> f64
where
    A: PointAccessor<T> + ?Sized,
    T: ?Sized,
{
    square_distance(accessor.x(a), accessor.y(a), accessor.x(b), accessor.y(b))
}

/// Squared distance from `p0` to the segment `p1 -> p2`, read through
/// `accessor`.
pub(crate) fn segment_distance<T, A>(accessor: &A, p0: &T, p1: &T, p2: &T) -> f64
where
    A: PointAccessor<T> + ?Sized,
    T: ?Sized,
{
    square_segment_distance(
        accessor.x(p0),
        accessor.y(p0),
        accessor.x(p1),
        accessor.y(p1),
        accessor.x(p2),
        accessor.y(p2),
    )
}
