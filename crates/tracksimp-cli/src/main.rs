//! tracksimp: simplify JSON track files from the command line.
//!
//! Reads a JSON array of GPS fixes (or planar points), simplifies it, and
//! writes the retained samples back out as JSON. Optional per-pass
//! diagnostics help with tuning the tolerance and deciding whether the
//! radial pre-pass is worth its fidelity cost.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin tracksimp -- [OPTIONS] <INPUT>
//! ```
//!
//! Set `RUST_LOG=debug` to see the library's own log output.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod input;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use tracksimp::diagnostics::Clock;
use tracksimp::{SimplifyConfig, SimplifyDiagnostics};

use crate::input::{Dataset, Format};

/// Shape-preserving simplification for GPS tracks.
///
/// Runs Douglas-Peucker (optionally preceded by a radial-distance
/// filter) over the input and writes the retained samples as JSON.
#[derive(Parser)]
#[command(name = "tracksimp", version)]
struct Cli {
    /// Path to the input JSON file.
    input: PathBuf,

    /// Layout of the input file.
    #[arg(long, value_enum, default_value_t = Format::Track)]
    format: Format,

    /// Maximum deviation, in input coordinate units (degrees for tracks).
    #[arg(long, default_value_t = SimplifyConfig::DEFAULT_TOLERANCE, allow_negative_numbers = true)]
    tolerance: f64,

    /// Run the radial-distance pre-pass before Douglas-Peucker.
    #[arg(long)]
    fast: bool,

    /// Full simplification config as a JSON string.
    ///
    /// When provided, `--tolerance` and `--fast` are ignored.
    /// The JSON must be a valid `SimplifyConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,

    /// Write the simplified JSON here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a diagnostics report to stderr.
    #[arg(long)]
    diagnostics: bool,

    /// Print diagnostics as JSON instead of a human-readable report.
    #[arg(long, requires = "diagnostics")]
    json: bool,

    /// Number of runs for averaging.
    #[arg(long, default_value_t = 1, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    runs: usize,
}

/// Build a [`SimplifyConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and the
/// individual parameter flags are ignored.
fn config_from_cli(cli: &Cli) -> Result<SimplifyConfig, String> {
    let config = if let Some(ref json) = cli.config_json {
        serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"))?
    } else {
        SimplifyConfig::new(cli.tolerance, !cli.fast)
    };

    config.validate().map_err(|e| format!("Invalid config: {e}"))?;
    Ok(config)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let json = match std::fs::read_to_string(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    let dataset = match Dataset::parse(&json, cli.format) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "loaded {} samples from {}",
        dataset.len(),
        cli.input.display()
    );

    let mut all_diagnostics = Vec::with_capacity(cli.runs);
    let mut simplified = None;

    for run in 0..cli.runs {
        match dataset.simplify(&config, &StdClock) {
            Ok((out, diagnostics)) => {
                if cli.diagnostics {
                    if cli.runs > 1 {
                        eprintln!("--- Run {}/{} ---", run + 1, cli.runs);
                    }
                    if let Err(msg) = print_diagnostics(&diagnostics, cli.json) {
                        eprintln!("{msg}");
                        return ExitCode::FAILURE;
                    }
                }
                all_diagnostics.push(diagnostics);
                simplified.get_or_insert(out);
            }
            Err(e) => {
                eprintln!("Simplification error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if cli.runs > 1 {
        print_multi_run_summary(&all_diagnostics);
    }

    let Some(simplified) = simplified else {
        return ExitCode::FAILURE;
    };

    let out_json = match simplified.to_json_pretty() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.output {
        Some(ref path) => match std::fs::write(path, &out_json) {
            Ok(()) => {
                eprintln!(
                    "Wrote {} of {} samples to {}",
                    simplified.len(),
                    dataset.len(),
                    path.display(),
                );
            }
            Err(e) => {
                eprintln!("Error writing {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => println!("{out_json}"),
    }

    ExitCode::SUCCESS
}

/// Print one run's diagnostics to stderr.
fn print_diagnostics(diagnostics: &SimplifyDiagnostics, json: bool) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(diagnostics)
            .map_err(|e| format!("Error serializing diagnostics: {e}"))?;
        eprintln!("{text}");
    } else {
        eprintln!("{}", diagnostics.report());
    }
    Ok(())
}

/// [`Clock`] implementation backed by [`std::time::Instant`].
struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, since: &Instant) -> Duration {
        since.elapsed()
    }
}

/// Print aggregated timing across multiple runs.
#[allow(clippy::cast_precision_loss)]
fn print_multi_run_summary(all_diagnostics: &[SimplifyDiagnostics]) {
    if all_diagnostics.is_empty() {
        eprintln!("Warning: no diagnostics to summarize");
        return;
    }

    let durations: Vec<f64> = all_diagnostics
        .iter()
        .map(|d| d.total_duration.as_secs_f64() * 1000.0)
        .collect();

    let min = durations.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let max = durations.iter().copied().reduce(f64::max).unwrap_or(0.0);
    let mean = durations.iter().sum::<f64>() / durations.len() as f64;

    eprintln!();
    eprintln!(
        "Summary ({} runs)\n{}",
        all_diagnostics.len(),
        "=".repeat(60),
    );
    eprintln!("Total duration: min={min:.3}ms  mean={mean:.3}ms  max={max:.3}ms");
}
