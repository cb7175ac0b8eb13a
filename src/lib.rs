pub mod errors;
pub mod utils;
pub mod coordinate;
pub mod points;
pub mod kml;
pub mod commands;
pub mod api;

pub use crate::api::GeoWlan;

pub use errors::{GeoError, GeoResult};
pub use coordinate::{Calibration, CoordinateTransform, GlobalCoordinate, LocalCoordinate};
pub use points::{GeoPoint, SpatialPointValidator, ValidationIssue, ValidationResult};
pub use kml::{KmlExporter, KmlFile, SkipPolicy};
