//! Coordinate access for arbitrary point types.
//!
//! The engine never constructs or inspects a point directly. It reads
//! coordinates and compares endpoints through a [`PointAccessor`], so any
//! record type can be simplified without first being copied into a
//! dedicated point struct.

use crate::types::Point;

/// Capability for reading planar coordinates out of a `T`.
///
/// Implementations must be pure: the same point must always yield the
/// same coordinates, and no call may have observable side effects.
pub trait PointAccessor<T: ?Sized> {
    /// Horizontal coordinate of `point`.
    fn x(&self, point: &T) -> f64;

    /// Vertical coordinate of `point`.
    fn y(&self, point: &T) -> f64;

    /// Whether `a` and `b` denote the same location.
    ///
    /// Only consulted by the radial-distance pass to decide whether the
    /// trailing input point duplicates the last retained one. The default
    /// compares both coordinates exactly.
    #[allow(clippy::float_cmp)]
    fn equal(&self, a: &T, b: &T) -> bool {
        self.x(a) == self.x(b) && self.y(a) == self.y(b)
    }
}

impl<T: ?Sized, A: PointAccessor<T> + ?Sized> PointAccessor<T> for &A {
    fn x(&self, point: &T) -> f64 {
        (**self).x(point)
    }

    fn y(&self, point: &T) -> f64 {
        (**self).y(point)
    }

    fn equal(&self, a: &T, b: &T) -> bool {
        (**self).equal(a, b)
    }
}

/// Accessor built from a pair of coordinate closures.
///
/// Endpoint equality falls back to exact coordinate comparison. Use
/// [`Accessors::with_equality`] to supply a custom predicate.
#[derive(Debug, Clone, Copy)]
pub struct Accessors<X, Y> {
    x: X,
    y: Y,
}

impl<X, Y> Accessors<X, Y> {
    /// Wrap an x-extractor and a y-extractor.
    pub const fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }

    /// Attach a custom equality predicate.
    pub fn with_equality<E>(self, equal: E) -> AccessorsWithEq<X, Y, E> {
        AccessorsWithEq {
            x: self.x,
            y: self.y,
            equal,
        }
    }
}

impl<T, X, Y> PointAccessor<T> for Accessors<X, Y>
where
    T: ?Sized,
    X: Fn(&T) -> f64,
    Y: Fn(&T) -> f64,
{
    fn x(&self, point: &T) -> f64 {
        (self.x)(point)
    }

    fn y(&self, point: &T) -> f64 {
        (self.y)(point)
    }
}

/// Accessor built from coordinate closures plus an equality closure.
#[derive(Debug, Clone, Copy)]
pub struct AccessorsWithEq<X, Y, E> {
    x: X,
    y: Y,
    equal: E,
}

impl<T, X, Y, E> PointAccessor<T> for AccessorsWithEq<X, Y, E>
where
    T: ?Sized,
    X: Fn(&T) -> f64,
    Y: Fn(&T) -> f64,
    E: Fn(&T, &T) -> bool,
{
    fn x(&self, point: &T) -> f64 {
        (self.x)(point)
    }

    fn y(&self, point: &T) -> f64 {
        (self.y)(point)
    }

    fn equal(&self, a: &T, b: &T) -> bool {
        (self.equal)(a, b)
    }
}

/// Accessor for plain Cartesian point representations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cartesian;

impl PointAccessor<Point> for Cartesian {
    fn x(&self, point: &Point) -> f64 {
        point.x
    }

    fn y(&self, point: &Point) -> f64 {
        point.y
    }
}

impl PointAccessor<(f64, f64)> for Cartesian {
    fn x(&self, point: &(f64, f64)) -> f64 {
        point.0
    }

    fn y(&self, point: &(f64, f64)) -> f64 {
        point.1
    }
}

impl PointAccessor<[f64; 2]> for Cartesian {
    fn x(&self, point: &[f64; 2]) -> f64 {
        point[0]
    }

    fn y(&self, point: &[f64; 2]) -> f64 {
        point[1]
    }
}
