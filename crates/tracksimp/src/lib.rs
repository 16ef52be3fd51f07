//! tracksimp: shape-preserving polyline simplification (sans-IO).
//!
//! Reduces a dense, ordered sequence of 2D points (typically GPS track
//! samples) to a shorter sequence that stays within a tolerance of the
//! original path:
//!
//! 1. Optional radial-distance filter (fast, lossy pre-pass)
//! 2. Douglas-Peucker reduction (exact, iterative)
//!
//! The engine is generic over the point type. Coordinates and endpoint
//! equality are read through a [`PointAccessor`], so callers keep their
//! own records and get the retained records back in their original
//! order.
//!
//! This crate has **no I/O dependencies**. File handling lives in the
//! `tracksimp-cli` crate.
//!
//! ```
//! use tracksimp::{Cartesian, Point, Simplifier};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(2.0, 5.0),
//!     Point::new(3.0, 0.0),
//!     Point::new(4.0, 0.0),
//! ];
//!
//! let simplified = Simplifier::new(Cartesian).simplify(&points, 1.0, true)?;
//! assert_eq!(
//!     simplified.as_ref(),
//!     &[Point::new(0.0, 0.0), Point::new(2.0, 5.0), Point::new(4.0, 0.0)],
//! );
//! # Ok::<(), tracksimp::SimplifyError>(())
//! ```

pub mod accessor;
pub mod diagnostics;
pub mod distance;
pub mod douglas_peucker;
pub mod geo_interop;
pub mod radial;
pub mod simplify;
pub mod track;
pub mod types;

pub use accessor::{Accessors, AccessorsWithEq, Cartesian, PointAccessor};
pub use diagnostics::{Clock, PassDiagnostics, SimplifyDiagnostics, simplify_with_diagnostics};
pub use geo_interop::{CoordAccessor, simplify_line_string, simplify_line_string_indices};
pub use simplify::{Simplifier, simplify_polyline, simplify_polylines};
pub use track::{Location, LonLat, simplify_track, simplify_track_default};
pub use types::{Point, Polyline, SimplifyConfig, SimplifyError};
