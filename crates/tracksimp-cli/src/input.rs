//! JSON track files: parsing, simplification dispatch, and output.

use clap::ValueEnum;
use tracksimp::diagnostics::Clock;
use tracksimp::{
    Cartesian, Location, LonLat, Point, Simplifier, SimplifyConfig, SimplifyDiagnostics,
    SimplifyError, simplify_with_diagnostics,
};

/// Layout of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Array of recorded GPS fixes (`latitude`, `longitude`, ...).
    Track,
    /// Array of planar `{ "x": .., "y": .. }` points.
    Points,
}

/// A parsed input file.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    /// GPS fixes, simplified in longitude/latitude space.
    Track(Vec<Location>),
    /// Planar points.
    Points(Vec<Point>),
}

impl Dataset {
    /// Parse `json` according to `format`.
    pub fn parse(json: &str, format: Format) -> Result<Self, serde_json::Error> {
        Ok(match format {
            Format::Track => Self::Track(serde_json::from_str(json)?),
            Format::Points => Self::Points(serde_json::from_str(json)?),
        })
    }

    /// Number of samples.
    pub const fn len(&self) -> usize {
        match self {
            Self::Track(v) => v.len(),
            Self::Points(v) => v.len(),
        }
    }

    /// Simplify with the accessor matching the dataset kind.
    pub fn simplify<C: Clock>(
        &self,
        config: &SimplifyConfig,
        clock: &C,
    ) -> Result<(Self, SimplifyDiagnostics), SimplifyError> {
        match self {
            Self::Track(locations) => {
                let (out, diag) =
                    simplify_with_diagnostics(&Simplifier::new(LonLat), locations, config, clock)?;
                Ok((Self::Track(out), diag))
            }
            Self::Points(points) => {
                let (out, diag) =
                    simplify_with_diagnostics(&Simplifier::new(Cartesian), points, config, clock)?;
                Ok((Self::Points(out), diag))
            }
        }
    }

    /// Serialize back to pretty-printed JSON in the input's layout.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Track(v) => serde_json::to_string_pretty(v),
            Self::Points(v) => serde_json::to_string_pretty(v),
        }
    }
}
