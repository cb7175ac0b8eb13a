//! Custom error types for coordinate conversion and KML export

use std::fmt;
use std::io;
use std::string::FromUtf8Error;

/// Errors raised by geowlan operations
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Export was requested for an empty point collection
    EmptyExport,
    /// XML serialization failed
    XmlError(String),
    /// Calibration file is missing a coefficient or holds a bad value
    InvalidCalibration(String),
    /// A record in a point file could not be read
    InvalidPointRecord { index: usize, reason: String },
    /// A coordinate argument could not be parsed
    InvalidCoordinate(String),
    /// A strict export found validation issues
    ValidationFailed(Vec<String>),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::EmptyExport => write!(f, "No points to export"),
            GeoError::XmlError(msg) => write!(f, "XML error: {}", msg),
            GeoError::InvalidCalibration(msg) => write!(f, "Invalid calibration: {}", msg),
            GeoError::InvalidPointRecord { index, reason } => {
                write!(f, "Invalid point record at index {}: {}", index, reason)
            }
            GeoError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            GeoError::ValidationFailed(errors) => write!(f, "Validation failed: {}", errors.join("; ")),
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

impl From<quick_xml::Error> for GeoError {
    fn from(error: quick_xml::Error) -> Self {
        GeoError::XmlError(error.to_string())
    }
}

impl From<FromUtf8Error> for GeoError {
    fn from(error: FromUtf8Error) -> Self {
        GeoError::XmlError(format!("document is not valid UTF-8: {}", error))
    }
}

impl From<toml::de::Error> for GeoError {
    fn from(error: toml::de::Error) -> Self {
        GeoError::GenericError(format!("Failed to parse TOML: {}", error))
    }
}

/// Result type for geowlan operations
pub type GeoResult<T> = Result<T, GeoError>;
