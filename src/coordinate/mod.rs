//! Coordinate handling for the site survey grid
//!
//! This module provides the local and geographic coordinate types, the
//! per-site calibration, and the affine transform between the two systems.

mod calibration;
mod point;
mod transform;

// Re-export key types
pub use self::calibration::{AffineCoefficients, Calibration, DEFAULT_SITE_NAME};
pub use self::point::{GlobalCoordinate, LocalCoordinate};
pub use self::transform::CoordinateTransform;
