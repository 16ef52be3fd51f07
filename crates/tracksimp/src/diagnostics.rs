//! Simplification diagnostics: timing and point counts for each pass.
//!
//! The library performs no I/O, so wall-clock time comes from a caller
//! supplied [`Clock`]. The CLI backs it with [`std::time::Instant`].
//!
//! Durations are serialized as fractional seconds (`f64`) for JSON
//! compatibility, since `std::time::Duration` does not implement serde
//! traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::accessor::PointAccessor;
use crate::simplify::{Pass, PassObserver, Simplifier};
use crate::types::{SimplifyConfig, SimplifyError};

/// Source of monotonic timestamps.
pub trait Clock {
    /// Opaque timestamp type.
    type Instant;

    /// Capture the current time.
    fn now(&self) -> Self::Instant;

    /// Time elapsed since `since`.
    fn elapsed(&self, since: &Self::Instant) -> Duration;
}

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Diagnostics collected from a single simplification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifyDiagnostics {
    /// Tolerance the run used.
    pub tolerance: f64,
    /// Whether the radial pre-pass was skipped.
    pub highest_quality: bool,
    /// Radial-distance pass (only when `highest_quality == false` and the
    /// input had more than two points).
    pub radial: Option<PassDiagnostics>,
    /// Douglas-Peucker pass (absent for inputs of two points or fewer).
    pub douglas_peucker: Option<PassDiagnostics>,
    /// Total wall-clock duration (seconds).
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
    /// Points handed to the simplifier.
    pub input_points: usize,
    /// Points returned.
    pub output_points: usize,
}

/// Diagnostics for a single pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassDiagnostics {
    /// Wall-clock duration of this pass (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Points entering the pass.
    pub points_before: usize,
    /// Points leaving the pass.
    pub points_after: usize,
}

impl SimplifyDiagnostics {
    /// Fraction of input points removed: `1.0 - (output / input)`.
    ///
    /// Zero for empty input.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn reduction_ratio(&self) -> f64 {
        if self.input_points == 0 {
            0.0
        } else {
            1.0 - self.output_points as f64 / self.input_points as f64
        }
    }

    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Simplification Diagnostics\n{}", "=".repeat(60)));
        lines.push(format!(
            "Tolerance: {}  |  Mode: {}",
            self.tolerance,
            if self.highest_quality {
                "highest quality"
            } else {
                "radial + douglas-peucker"
            },
        ));
        lines.push(format!(
            "Total duration: {:.3}ms",
            duration_ms(self.total_duration),
        ));
        lines.push(String::new());

        lines.push(format!(
            "{:<24} {:>10} {:>10}  {}",
            "Pass", "Duration", "% Total", "Points"
        ));
        lines.push("-".repeat(70));

        let total_ms = duration_ms(self.total_duration);

        let passes = [
            ("Radial Distance", self.radial.as_ref()),
            ("Douglas-Peucker", self.douglas_peucker.as_ref()),
        ];

        for (name, pass) in passes {
            let Some(pass) = pass else {
                lines.push(format!("{name:<24} {:>10}", "skipped"));
                continue;
            };
            let ms = duration_ms(pass.duration);
            let pct = if total_ms > 0.0 {
                ms / total_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!(
                "{name:<24} {ms:>8.3}ms {pct:>9.1}%  {}->{}",
                pass.points_before, pass.points_after,
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Points: {} -> {} ({:.1}% reduction)",
            self.input_points,
            self.output_points,
            self.reduction_ratio() * 100.0,
        ));

        lines.join("\n")
    }
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Run a simplification while timing each pass.
///
/// Produces exactly the output of
/// [`Simplifier::simplify_with_config`] for the same arguments.
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidTolerance`] if the configured
/// tolerance is negative or NaN.
pub fn simplify_with_diagnostics<A, T, C>(
    simplifier: &Simplifier<A>,
    points: &[T],
    config: &SimplifyConfig,
    clock: &C,
) -> Result<(Vec<T>, SimplifyDiagnostics), SimplifyError>
where
    A: PointAccessor<T>,
    T: Clone,
    C: Clock,
{
    let start = clock.now();
    let mut timer = PassTimer {
        clock,
        radial: None,
        douglas_peucker: None,
    };

    let kept = simplifier.simplify_indices_observed(
        points,
        config.tolerance,
        config.highest_quality,
        &mut timer,
    )?;

    let output: Vec<T> = kept.into_iter().map(|i| points[i].clone()).collect();

    let diagnostics = SimplifyDiagnostics {
        tolerance: config.tolerance,
        highest_quality: config.highest_quality,
        radial: timer.radial,
        douglas_peucker: timer.douglas_peucker,
        total_duration: clock.elapsed(&start),
        input_points: points.len(),
        output_points: output.len(),
    };

    Ok((output, diagnostics))
}

/// Records the duration and point counts of each pass.
struct PassTimer<'c, C> {
    clock: &'c C,
    radial: Option<PassDiagnostics>,
    douglas_peucker: Option<PassDiagnostics>,
}

impl<C: Clock> PassObserver for PassTimer<'_, C> {
    fn observe(
        &mut self,
        pass: Pass,
        points_before: usize,
        run: impl FnOnce() -> Vec<usize>,
    ) -> Vec<usize> {
        let t = self.clock.now();
        let kept = run();
        let record = PassDiagnostics {
            duration: self.clock.elapsed(&t),
            points_before,
            points_after: kept.len(),
        };
        match pass {
            Pass::Radial => self.radial = Some(record),
            Pass::DouglasPeucker => self.douglas_peucker = Some(record),
        }
        kept
    }
}
