//! Surveyed point records

use crate::coordinate::LocalCoordinate;

/// A named point on the local survey grid, as supplied by the data layer.
///
/// Records may be partially populated: a point that has not been surveyed
/// yet carries no coordinates, and malformed rows may lack an id.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    /// Unique identifier; `None` or `0` marks a malformed record
    pub id: Option<i64>,
    /// Display name
    pub name: String,
    /// Local grid easting
    pub x: Option<f64>,
    /// Local grid northing
    pub y: Option<f64>,
    /// Operational status, only affects export styling
    pub enabled: Option<bool>,
}

impl GeoPoint {
    /// Create a fully surveyed, enabled point
    pub fn new(id: i64, name: &str, x: f64, y: f64) -> Self {
        GeoPoint {
            id: Some(id),
            name: name.to_string(),
            x: Some(x),
            y: Some(y),
            enabled: Some(true),
        }
    }

    /// Create a point that has not been surveyed yet
    pub fn unsurveyed(id: i64, name: &str) -> Self {
        GeoPoint {
            id: Some(id),
            name: name.to_string(),
            x: None,
            y: None,
            enabled: None,
        }
    }

    /// Set the operational status
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Whether the point is operational; unknown status counts as disabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Both local coordinates, if present
    pub fn local(&self) -> Option<LocalCoordinate> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(LocalCoordinate::new(x, y)),
            _ => None,
        }
    }

    /// Id for display, empty when missing
    pub fn id_label(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surveyed_point_exposes_local_coordinate() {
        let point = GeoPoint::new(7, "AP-07", 12.5, -3.0);
        assert_eq!(point.local(), Some(LocalCoordinate::new(12.5, -3.0)));
        assert!(point.is_enabled());
    }

    #[test]
    fn unsurveyed_point_has_no_coordinate_and_is_disabled() {
        let point = GeoPoint::unsurveyed(8, "AP-08");
        assert_eq!(point.local(), None);
        assert!(!point.is_enabled());
        assert_eq!(point.id_label(), "8");
    }

    #[test]
    fn half_surveyed_point_has_no_coordinate() {
        let mut point = GeoPoint::new(9, "AP-09", 1.0, 2.0).with_enabled(false);
        point.y = None;
        assert_eq!(point.local(), None);
        assert!(!point.is_enabled());
    }
}
