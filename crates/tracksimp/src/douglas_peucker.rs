//! Douglas-Peucker reduction with an explicit work stack.
//!
//! For every retained sub-chain, no interior point deviates from the
//! segment between the sub-chain's endpoints by more than the tolerance.
//!
//! The classic formulation recurses once per split. GPS tracks can hold
//! hundreds of thousands of samples and a badly unbalanced track would
//! recurse that deep, so pending sub-chains live on a heap-allocated
//! stack instead of the call stack.

use crate::accessor::PointAccessor;
use crate::distance::segment_distance;

/// A sub-chain `first..=last` still waiting to be examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Range {
    first: usize,
    last: usize,
}

/// Indices of the points retained by Douglas-Peucker, in ascending order.
///
/// The first and last indices are always retained. Inputs with two
/// points or fewer are returned whole.
pub fn douglas_peucker_indices<T, A>(points: &[T], sq_tolerance: f64, accessor: &A) -> Vec<usize>
where
    A: PointAccessor<T> + ?Sized,
{
    reduce(points.len(), |i| &points[i], sq_tolerance, accessor)
}

/// Douglas-Peucker over a subset of `points` selected by `subset`.
///
/// `subset` must be strictly increasing. The returned indices refer to
/// `points`, not to positions within `subset`.
pub(crate) fn douglas_peucker_subset<T, A>(
    points: &[T],
    subset: &[usize],
    sq_tolerance: f64,
    accessor: &A,
) -> Vec<usize>
where
    A: PointAccessor<T> + ?Sized,
{
    reduce(subset.len(), |i| &points[subset[i]], sq_tolerance, accessor)
        .into_iter()
        .map(|pos| subset[pos])
        .collect()
}

/// Core reduction over `len` points fetched through `at`.
///
/// Returns positions in `0..len`.
fn reduce<'a, T, A, F>(len: usize, at: F, sq_tolerance: f64, accessor: &A) -> Vec<usize>
where
    T: 'a,
    A: PointAccessor<T> + ?Sized,
    F: Fn(usize) -> &'a T,
{
    if len <= 2 {
        return (0..len).collect();
    }

    let mut kept = vec![false; len];
    kept[0] = true;
    kept[len - 1] = true;

    let mut stack = vec![Range {
        first: 0,
        last: len - 1,
    }];

    while let Some(Range { first, last }) = stack.pop() {
        if let Some(index) = farthest_beyond(first, last, &at, sq_tolerance, accessor) {
            kept[index] = true;
            stack.push(Range {
                first,
                last: index,
            });
            stack.push(Range { first: index, last });
        }
    }

    log::trace!(
        "douglas-peucker kept {} of {len} points",
        kept.iter().filter(|&&k| k).count()
    );

    kept.iter()
        .enumerate()
        .filter_map(|(i, &k)| k.then_some(i))
        .collect()
}

/// The interior index of `first..=last` farthest from the segment
/// `first -> last`, if its squared distance exceeds `sq_tolerance`.
///
/// Ties go to the lowest index. NaN distances never win.
fn farthest_beyond<'a, T, A, F>(
    first: usize,
    last: usize,
    at: &F,
    sq_tolerance: f64,
    accessor: &A,
) -> Option<usize>
where
    T: 'a,
    A: PointAccessor<T> + ?Sized,
    F: Fn(usize) -> &'a T,
{
    let start = at(first);
    let end = at(last);

    let mut max_sq_dist = 0.0;
    let mut index = None;

    for i in (first + 1)..last {
        let sq_dist = segment_distance(accessor, at(i), start, end);
        if sq_dist > max_sq_dist {
            index = Some(i);
            max_sq_dist = sq_dist;
        }
    }

    index.filter(|_| max_sq_dist > sq_tolerance)
}
