//! Custom error types for distance and coordinate handling
//!
//! The math core is total and never returns these. They come from the
//! edges of the crate: parsing text, loading settings and running commands.

use std::fmt;
use std::io;

/// Error types for geodist
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Distance text could not be parsed
    InvalidDistance(String),
    /// Unit name or abbreviation not recognised
    UnknownUnit(String),
    /// Coordinate text could not be parsed
    InvalidCoordinate(String),
    /// Latitude or longitude is NaN or infinite
    NonFiniteCoordinate { lat: f64, lng: f64 },
    /// Settings file is malformed
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::InvalidDistance(s) => write!(f, "Invalid distance: '{}'", s),
            GeoError::UnknownUnit(s) => write!(f, "Unknown unit: '{}'", s),
            GeoError::InvalidCoordinate(s) => write!(f, "Invalid coordinate: {}", s),
            GeoError::NonFiniteCoordinate { lat, lng } => {
                write!(f, "Coordinate must be finite, got lat={}, lng={}", lat, lng)
            }
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

/// Result type for geodist operations
pub type GeoResult<T> = Result<T, GeoError>;
