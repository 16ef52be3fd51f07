//! Integration tests: shape guarantees of the simplifier on synthetic tracks.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use geo::line_measures::Distance;
use geo::{Closest, ClosestPoint, Euclidean, Line};
use tracksimp::{
    Cartesian, Location, Point, Simplifier, SimplifyConfig, simplify_track,
    simplify_with_diagnostics,
};

/// A winding walk with deterministic wobble, `n` samples long.
fn winding_track(n: usize) -> Vec<Point> {
    let mut heading = 0.0_f64;
    let mut p = Point::new(0.0, 0.0);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64;
        heading += 0.3 * (t * 0.11).sin() + 0.05 * (t * 1.7).cos();
        let step = 1.0 + 0.5 * (t * 0.53).sin();
        p = Point::new(p.x + step * heading.cos(), p.y + step * heading.sin());
        out.push(p);
    }
    out
}

/// Distance from `p` to the segment `a -> b`, computed with `geo`.
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let line = Line::new(geo::Coord::from(a), geo::Coord::from(b));
    let query = geo::Point::new(p.x, p.y);
    let nearest: geo::Coord<f64> = match line.closest_point(&query) {
        Closest::Intersection(c) | Closest::SinglePoint(c) => c.into(),
        Closest::Indeterminate => line.start,
    };
    Euclidean.distance(&query, &geo::Point::from(nearest))
}

const TOLERANCES: [f64; 5] = [0.0, 0.05, 0.3, 1.0, 4.0];

#[test]
fn endpoints_preserved_and_length_never_grows() {
    let track = winding_track(500);
    let simplifier = Simplifier::new(Cartesian);
    for tolerance in TOLERANCES {
        for hq in [true, false] {
            let out = simplifier.simplify(&track, tolerance, hq).unwrap();
            assert!(out.len() <= track.len());
            assert_eq!(out.first(), track.first());
            assert_eq!(out.last(), track.last());
        }
    }
}

#[test]
fn output_is_an_ordered_subsequence() {
    let track = winding_track(300);
    let simplifier = Simplifier::new(Cartesian);
    for hq in [true, false] {
        let kept = simplifier.simplify_indices(&track, 0.3, hq).unwrap();
        assert!(kept.windows(2).all(|w| w[0] < w[1]));
        let out = simplifier.simplify(&track, 0.3, hq).unwrap();
        let expected: Vec<Point> = kept.iter().map(|&i| track[i]).collect();
        assert_eq!(out.as_ref(), expected.as_slice());
    }
}

#[test]
fn larger_tolerance_keeps_a_subset() {
    let track = winding_track(800);
    let simplifier = Simplifier::new(Cartesian);
    let mut previous = simplifier.simplify_indices(&track, 0.0, true).unwrap();
    for tolerance in &TOLERANCES[1..] {
        let kept = simplifier.simplify_indices(&track, *tolerance, true).unwrap();
        assert!(kept.len() <= previous.len(), "tolerance {tolerance}");
        assert!(kept.iter().all(|i| previous.binary_search(i).is_ok()));
        previous = kept;
    }
}

#[test]
fn dropped_points_stay_within_tolerance() {
    let track = winding_track(1000);
    let simplifier = Simplifier::new(Cartesian);
    for tolerance in &TOLERANCES[1..] {
        let kept = simplifier.simplify_indices(&track, *tolerance, true).unwrap();
        for pair in kept.windows(2) {
            let (a, b) = (track[pair[0]], track[pair[1]]);
            for p in &track[pair[0] + 1..pair[1]] {
                let d = segment_distance(*p, a, b);
                assert!(
                    d <= tolerance + 1e-9,
                    "point {p:?} is {d} from segment {a:?}-{b:?}, tolerance {tolerance}"
                );
            }
        }
    }
}

#[test]
fn sparse_input_fast_path_matches_highest_quality() {
    // Every step is at least 0.5, so a tolerance of 0.4 lets the radial
    // pass through untouched.
    let track = winding_track(400);
    assert!(track.windows(2).all(|w| w[0].distance(w[1]) > 0.4));
    let simplifier = Simplifier::new(Cartesian);
    let hq = simplifier.simplify_indices(&track, 0.4, true).unwrap();
    let fast = simplifier.simplify_indices(&track, 0.4, false).unwrap();
    assert_eq!(hq, fast);
}

#[test]
fn fast_path_never_keeps_more_than_the_radial_pass_allows() {
    let mut track = winding_track(200);
    // Densify: insert a midpoint after every sample.
    track = track
        .windows(2)
        .flat_map(|w| {
            [
                w[0],
                Point::new((w[0].x + w[1].x) / 2.0, (w[0].y + w[1].y) / 2.0),
            ]
        })
        .chain(track.last().copied())
        .collect();
    let (out, diag) = simplify_with_diagnostics(
        &Simplifier::new(Cartesian),
        &track,
        &SimplifyConfig::new(0.6, false),
        &NoClock,
    )
    .unwrap();
    let radial = diag.radial.expect("radial pass ran");
    assert!(radial.points_after < track.len());
    assert!(out.len() <= radial.points_after);
}

#[test]
fn gps_track_with_default_tolerance() {
    // Northbound square wave, jogging ~8 m east and back every 100
    // samples, one sample per 1e-5 degrees of latitude.
    let track: Vec<Location> = (0..2000)
        .map(|i| {
            let lat = 46.0 + f64::from(i) * 1e-5;
            let lon = 7.0 + if i % 200 < 100 { 0.0 } else { 1e-4 };
            Location::new(lat, lon)
        })
        .collect();
    let out = simplify_track(&track, &SimplifyConfig::default()).unwrap();
    assert!(out.len() < track.len() / 10);
    assert_eq!(out.first(), track.first());
    assert_eq!(out.last(), track.last());
}

/// Clock that never advances.
struct NoClock;

impl tracksimp::Clock for NoClock {
    type Instant = ();

    fn now(&self) {}

    fn elapsed(&self, _since: &()) -> std::time::Duration {
        std::time::Duration::ZERO
    }
}
