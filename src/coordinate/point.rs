//! Coordinate value types for the local survey grid and WGS84

use std::fmt;

/// A position on the site's local planar survey grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalCoordinate {
    /// Easting on the local grid
    pub x: f64,
    /// Northing on the local grid
    pub y: f64,
}

impl LocalCoordinate {
    /// Create a new local grid coordinate
    pub fn new(x: f64, y: f64) -> Self {
        LocalCoordinate { x, y }
    }
}

impl fmt::Display for LocalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}", self.x, self.y)
    }
}

/// A geographic position in decimal degrees.
///
/// Never persisted; always derived from a [`LocalCoordinate`] through a
/// [`CoordinateTransform`](super::CoordinateTransform).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalCoordinate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl GlobalCoordinate {
    /// Create a new geographic coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        GlobalCoordinate { lat, lng }
    }

    /// Format as a KML `<coordinates>` tuple.
    ///
    /// KML orders values as longitude, latitude, altitude.
    pub fn to_kml_tuple(&self) -> String {
        format!("{:.6},{:.6},0", self.lng, self.lat)
    }

    /// Check that both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl fmt::Display for GlobalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat: {:.6}, Lng: {:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kml_tuple_puts_longitude_first() {
        let coord = GlobalCoordinate::new(-22.5, -68.25);
        assert_eq!(coord.to_kml_tuple(), "-68.250000,-22.500000,0");
    }

    #[test]
    fn display_rounds_to_six_places() {
        let coord = GlobalCoordinate::new(-22.123456789, -68.987654321);
        assert_eq!(coord.to_string(), "Lat: -22.123457, Lng: -68.987654");
    }

    #[test]
    fn non_finite_components_are_detected() {
        assert!(!GlobalCoordinate::new(f64::NAN, 0.0).is_finite());
        assert!(!GlobalCoordinate::new(0.0, f64::INFINITY).is_finite());
        assert!(GlobalCoordinate::new(1.0, 2.0).is_finite());
    }
}
