use std::{error::Error, fmt::Display};

use geozero::error::GeozeroError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    /// The slack factor must be at least 1, otherwise no ellipse exists.
    InvalidSlackFactor(f64),
}

impl Error for ConfigurationError {}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSlackFactor(factor) => {
                write!(f, "invalid slack factor {}, expected a value >= 1", factor)
            }
        }
    }
}

#[derive(Debug)]
pub enum OverlayError {
    Configuration(ConfigurationError),
    MalformedPath { points: usize },
    Input(GeozeroError),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl Error for OverlayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::MalformedPath { .. } => None,
            Self::Input(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl Display for OverlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "configuration error: {}", err),
            Self::MalformedPath { points } => write!(
                f,
                "malformed path: need at least two coordinates, got {}",
                points
            ),
            Self::Input(err) => write!(f, "could not read geojson: {}", err),
            Self::Json(err) => write!(f, "invalid json: {}", err),
            Self::Io(err) => write!(f, "{}", err),
        }
    }
}

impl From<ConfigurationError> for OverlayError {
    fn from(value: ConfigurationError) -> Self {
        Self::Configuration(value)
    }
}

impl From<GeozeroError> for OverlayError {
    fn from(value: GeozeroError) -> Self {
        Self::Input(value)
    }
}

impl From<serde_json::Error> for OverlayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<std::io::Error> for OverlayError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
