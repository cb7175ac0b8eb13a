//! Point records, validation and loading
//!
//! Points are the unit of export: each carries an id, a display name, local
//! grid coordinates (possibly missing) and an operational status.

mod loader;
mod point;
mod validator;

pub use self::loader::{load_points, load_points_from_str};
pub use self::point::GeoPoint;
pub use self::validator::{SpatialPointValidator, ValidationIssue, ValidationResult};
