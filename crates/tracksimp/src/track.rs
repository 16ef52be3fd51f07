//! GPS track samples and their simplification.
//!
//! A [`Location`] is one fix as recorded by a phone during an activity.
//! Tracks are simplified directly in decimal degrees: longitude is the
//! x axis and latitude the y axis, with no projection in between.

use serde::{Deserialize, Serialize};

use crate::accessor::PointAccessor;
use crate::simplify::Simplifier;
use crate::types::{SimplifyConfig, SimplifyError};

/// One recorded GPS fix.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Horizontal accuracy radius in metres.
    #[serde(default)]
    pub accuracy: f32,
    /// Altitude in metres.
    #[serde(default)]
    pub altitude: f32,
    /// Vertical accuracy in metres, when the device reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude_accuracy: Option<f32>,
    /// Heading in degrees.
    #[serde(default)]
    pub bearing: f32,
    /// Heading accuracy in degrees, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing_accuracy: Option<f32>,
    /// Ground speed in metres per second.
    #[serde(default)]
    pub speed: f32,
    /// Speed accuracy in metres per second, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_accuracy: Option<f32>,
    /// Sample time as reported by the device.
    #[serde(default)]
    pub timestamp: f64,
}

impl Location {
    /// Create a fix with only a position set.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Self::default()
        }
    }
}

/// Accessor mapping longitude to x and latitude to y.
///
/// Two fixes are equal when both coordinates match exactly, regardless
/// of their other fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LonLat;

impl PointAccessor<Location> for LonLat {
    fn x(&self, point: &Location) -> f64 {
        point.longitude
    }

    fn y(&self, point: &Location) -> f64 {
        point.latitude
    }
}

/// Simplify a recorded track.
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidTolerance`] if the configured
/// tolerance is negative or NaN.
pub fn simplify_track(
    locations: &[Location],
    config: &SimplifyConfig,
) -> Result<Vec<Location>, SimplifyError> {
    Ok(Simplifier::new(LonLat)
        .simplify_with_config(locations, config)?
        .into_owned())
}

/// Simplify a recorded track with [`SimplifyConfig::default`].
///
/// # Errors
///
/// Never fails with the default configuration; the `Result` mirrors
/// [`simplify_track`].
pub fn simplify_track_default(locations: &[Location]) -> Result<Vec<Location>, SimplifyError> {
    simplify_track(locations, &SimplifyConfig::default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "latitude": 46.5,
            "longitude": 7.9,
            "accuracy": 4.0,
            "altitude": 2050.0,
            "altitudeAccuracy": 3.0,
            "bearing": 90.0,
            "speed": 5.5,
            "timestamp": 1700000000.0
        }"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert!((loc.latitude - 46.5).abs() < f64::EPSILON);
        assert_eq!(loc.altitude_accuracy, Some(3.0));
        assert_eq!(loc.bearing_accuracy, None);
    }

    #[test]
    fn omits_absent_optional_fields() {
        let json = serde_json::to_string(&Location::new(1.0, 2.0)).unwrap();
        assert!(!json.contains("speedAccuracy"));
        assert!(json.contains("\"longitude\":2.0"));
    }

    #[test]
    fn lon_lat_axes() {
        let loc = Location::new(46.5, 7.9);
        assert!((LonLat.x(&loc) - 7.9).abs() < f64::EPSILON);
        assert!((LonLat.y(&loc) - 46.5).abs() < f64::EPSILON);
    }

    #[test]
    fn equality_ignores_metadata() {
        let a = Location {
            speed: 3.0,
            ..Location::new(46.5, 7.9)
        };
        let b = Location {
            speed: 9.0,
            ..Location::new(46.5, 7.9)
        };
        assert!(LonLat.equal(&a, &b));
    }

    #[test]
    fn straight_walk_collapses_to_endpoints() {
        // Heading due east along a parallel, one sample every ~7 metres.
        let track: Vec<Location> = (0..50)
            .map(|i| Location {
                timestamp: f64::from(i),
                ..Location::new(46.5, 7.9 + f64::from(i) * 1e-4)
            })
            .collect();
        let simplified = simplify_track_default(&track).unwrap();
        assert_eq!(simplified.len(), 2);
        assert_eq!(simplified[0], track[0]);
        assert_eq!(simplified[1], track[49]);
    }

    #[test]
    fn corner_is_kept() {
        let track = vec![
            Location::new(46.5000, 7.9000),
            Location::new(46.5000, 7.9005),
            Location::new(46.5000, 7.9010),
            Location::new(46.5005, 7.9010),
            Location::new(46.5010, 7.9010),
        ];
        let simplified = simplify_track_default(&track).unwrap();
        assert_eq!(
            simplified,
            vec![track[0], track[2], track[4]],
        );
    }

    #[test]
    fn short_track_returned_whole() {
        let track = vec![Location::new(1.0, 1.0), Location::new(1.0, 1.0)];
        assert_eq!(simplify_track_default(&track).unwrap(), track);
    }

    #[test]
    fn absent_track_passes_through() {
        let track: Option<Vec<Location>> = None;
        let simplified = track
            .as_deref()
            .map(simplify_track_default)
            .transpose()
            .unwrap();
        assert!(simplified.is_none());
    }

    #[test]
    fn invalid_tolerance_reported() {
        let track = vec![Location::new(1.0, 1.0); 3];
        let result = simplify_track(&track, &SimplifyConfig::new(-1e-5, true));
        assert!(matches!(result, Err(SimplifyError::InvalidTolerance(_))));
    }
}
