use std::fmt::Display;

use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Slack factor used when none is configured.
pub const DEFAULT_MAX_DIST_FACTOR: f64 = 1.25;

/// Defines how the rotation of an ellipse is derived from its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bearing {
    /// Initial great-circle bearing.
    #[default]
    Spherical,
    /// `atan2(dlon, dlat)` on raw degrees. Only usable for short spans.
    Planar,
}

impl Display for Bearing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spherical => write!(f, "spherical bearing"),
            Self::Planar => write!(f, "planar bearing"),
        }
    }
}

impl Bearing {
    /// Compass bearing in degrees from `from` to `to`, in `[-180, 180)`.
    ///
    /// Coordinates are (lon, lat).
    pub fn between(&self, from: Coord, to: Coord) -> f64 {
        let degrees = match self {
            Self::Spherical => {
                let (lat_1, lat_2) = (from.y.to_radians(), to.y.to_radians());
                let delta_lon = (to.x - from.x).to_radians();

                let y = delta_lon.sin() * lat_2.cos();
                let x = lat_1.cos() * lat_2.sin() - lat_1.sin() * lat_2.cos() * delta_lon.cos();
                y.atan2(x).to_degrees()
            }
            Self::Planar => (to.x - from.x).atan2(to.y - from.y).to_degrees(),
        };

        let bearing = (degrees + 360.) % 360.;
        if bearing >= 180. {
            bearing - 360.
        } else {
            bearing
        }
    }
}

/// User supplied settings of the ellipse overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseParams {
    /// Multiplier on the shortest-path distance bounding the detour length.
    pub max_dist_factor: f64,
    pub bearing: Bearing,
}

impl Default for EllipseParams {
    fn default() -> Self {
        Self {
            max_dist_factor: DEFAULT_MAX_DIST_FACTOR,
            bearing: Bearing::default(),
        }
    }
}

impl EllipseParams {
    pub fn new(max_dist_factor: f64) -> Self {
        Self {
            max_dist_factor,
            ..Default::default()
        }
    }

    pub fn with_bearing(mut self, bearing: Bearing) -> Self {
        self.bearing = bearing;
        self
    }

    /// Rejects slack factors below 1, NaN included.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.max_dist_factor >= 1. {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidSlackFactor(self.max_dist_factor))
        }
    }
}
