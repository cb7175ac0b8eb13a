//! Coordinate transformation between the local survey grid and WGS84

use log::trace;

use super::calibration::Calibration;
use super::point::{GlobalCoordinate, LocalCoordinate};

/// Bidirectional affine transform for one calibrated site.
///
/// Neither direction validates its input. Points far from the calibration
/// anchor are extrapolated, and NaN or infinite inputs come back as
/// non-finite outputs.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTransform {
    calibration: Calibration,
}

impl CoordinateTransform {
    /// Create a transform for the given calibration
    pub fn new(calibration: Calibration) -> Self {
        CoordinateTransform { calibration }
    }

    /// The calibration this transform was built with
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Convert a local grid position to latitude/longitude
    pub fn local_to_global(&self, x: f64, y: f64) -> GlobalCoordinate {
        let (lat, lng) = self.calibration.forward().apply(x, y);
        trace!("local ({}, {}) -> global ({}, {})", x, y, lat, lng);
        GlobalCoordinate::new(lat, lng)
    }

    /// Convert latitude/longitude to a local grid position
    pub fn global_to_local(&self, lat: f64, lng: f64) -> LocalCoordinate {
        let (x, y) = self.calibration.inverse().apply(lat, lng);
        trace!("global ({}, {}) -> local ({}, {})", lat, lng, x, y);
        LocalCoordinate::new(x, y)
    }

    /// Geographic position of the local grid origin
    pub fn anchor(&self) -> GlobalCoordinate {
        let forward = self.calibration.forward();
        GlobalCoordinate::new(forward.t1, forward.t2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> CoordinateTransform {
        CoordinateTransform::default()
    }

    #[test]
    fn origin_maps_exactly_to_anchor() {
        let t = transform();
        let origin = t.local_to_global(0.0, 0.0);
        assert_eq!(origin.lat, Calibration::SITE_FORWARD.t1);
        assert_eq!(origin.lng, Calibration::SITE_FORWARD.t2);
        assert_eq!(origin, t.anchor());
    }

    #[test]
    fn round_trip_near_anchor_is_close() {
        let t = transform();
        for &(x, y) in &[(0.0, 0.0), (100.0, 200.0), (1500.0, -800.0), (-3000.0, 2500.0)] {
            let global = t.local_to_global(x, y);
            let back = t.global_to_local(global.lat, global.lng);
            assert!((back.x - x).abs() < 0.05, "x drifted for ({}, {}): {}", x, y, back.x);
            assert!((back.y - y).abs() < 0.05, "y drifted for ({}, {}): {}", x, y, back.y);
        }
    }

    #[test]
    fn offset_from_anchor_is_linear() {
        let t = transform();
        let origin = t.local_to_global(0.0, 0.0);
        let offset = |x: f64, y: f64| {
            let g = t.local_to_global(x, y);
            (g.lat - origin.lat, g.lng - origin.lng)
        };

        let (x1, y1, x2, y2) = (250.0, -410.5, 1320.25, 77.0);
        let sum = offset(x1 + x2, y1 + y2);
        let a = offset(x1, y1);
        let b = offset(x2, y2);

        assert!((sum.0 - (a.0 + b.0)).abs() < 1e-9);
        assert!((sum.1 - (a.1 + b.1)).abs() < 1e-9);
    }

    #[test]
    fn scaling_is_linear() {
        let t = transform();
        let origin = t.local_to_global(0.0, 0.0);
        let single = t.local_to_global(10.0, 20.0);
        let triple = t.local_to_global(30.0, 60.0);

        assert!(((triple.lat - origin.lat) - 3.0 * (single.lat - origin.lat)).abs() < 1e-9);
        assert!(((triple.lng - origin.lng) - 3.0 * (single.lng - origin.lng)).abs() < 1e-9);
    }

    #[test]
    fn non_finite_input_propagates() {
        let t = transform();
        assert!(t.local_to_global(f64::NAN, 0.0).lat.is_nan());
        assert!(!t.local_to_global(f64::INFINITY, 0.0).is_finite());
        assert!(t.global_to_local(f64::NAN, -68.9).x.is_nan());
    }

    #[test]
    fn grid_north_points_north() {
        let t = transform();
        let origin = t.local_to_global(0.0, 0.0);
        let north = t.local_to_global(0.0, 1000.0);
        let east = t.local_to_global(1000.0, 0.0);
        assert!(north.lat > origin.lat);
        assert!(east.lng > origin.lng);
    }

    #[test]
    fn custom_calibration_is_used() {
        let calibration = Calibration::from_str(
            "[forward]\na1 = 0.0\na2 = 1.0\nlat0 = 10.0\nb1 = 1.0\nb2 = 0.0\nlng0 = 20.0\n\
             [inverse]\nc1 = 0.0\nc2 = 1.0\nx0 = -20.0\nd1 = 1.0\nd2 = 0.0\ny0 = -10.0\n",
        )
        .unwrap();
        let t = CoordinateTransform::new(calibration);
        assert_eq!(t.local_to_global(2.0, 3.0), GlobalCoordinate::new(13.0, 22.0));
        assert_eq!(t.global_to_local(13.0, 22.0), LocalCoordinate::new(2.0, 3.0));
    }
}
