use std::path::{Path, PathBuf};

use log::info;

use crate::coordinate::{Calibration, CoordinateTransform, GlobalCoordinate, LocalCoordinate};
use crate::errors::{GeoError, GeoResult};
use crate::kml::{KmlExporter, KmlFile, SkipPolicy};
use crate::points::{self, GeoPoint, SpatialPointValidator, ValidationResult};

/// Main interface to the geowlan library
///
/// Bundles the site transform, the validator and the KML exporter so callers
/// can go from point records to a saved KML file in one place.
#[derive(Debug, Clone, Default)]
pub struct GeoWlan {
    exporter: KmlExporter,
    validator: SpatialPointValidator,
}

impl GeoWlan {
    /// Create an instance using the compiled-in site calibration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an instance for a specific calibration
    pub fn with_calibration(calibration: Calibration) -> Self {
        GeoWlan {
            exporter: KmlExporter::new(CoordinateTransform::new(calibration)),
            validator: SpatialPointValidator::new(),
        }
    }

    /// Create an instance from a calibration TOML file
    ///
    /// # Arguments
    /// * `path` - Path to a file with `[forward]` and `[inverse]` sections
    pub fn from_calibration_file<P: AsRef<Path>>(path: P) -> GeoResult<Self> {
        let calibration = Calibration::from_file(path)?;
        info!("Using calibration for site '{}'", calibration.site());
        Ok(Self::with_calibration(calibration))
    }

    /// Change how the exporter treats missing or zero coordinates
    pub fn with_skip_policy(mut self, skip_policy: SkipPolicy) -> Self {
        self.exporter = self.exporter.with_skip_policy(skip_policy);
        self
    }

    /// The site transform in use
    pub fn transform(&self) -> &CoordinateTransform {
        self.exporter.transform()
    }

    /// Convert a local grid position to latitude/longitude
    pub fn local_to_global(&self, x: f64, y: f64) -> GlobalCoordinate {
        self.transform().local_to_global(x, y)
    }

    /// Convert latitude/longitude to a local grid position
    pub fn global_to_local(&self, lat: f64, lng: f64) -> LocalCoordinate {
        self.transform().global_to_local(lat, lng)
    }

    /// Load point records from a TOML file
    pub fn load_points<P: AsRef<Path>>(&self, path: P) -> GeoResult<Vec<GeoPoint>> {
        points::load_points(path)
    }

    /// Check a point collection before export
    pub fn validate(&self, points: &[GeoPoint]) -> ValidationResult {
        self.validator.validate(points)
    }

    /// Render points to a KML string
    pub fn render_kml(&self, points: &[GeoPoint]) -> GeoResult<String> {
        self.exporter.render(points)
    }

    /// Render points into a KML file artifact without touching the disk
    pub fn export_kml(&self, points: &[GeoPoint], filename: Option<&str>) -> GeoResult<KmlFile> {
        self.exporter.export(points, filename)
    }

    /// Validate first, then export; any validation issue aborts the export
    pub fn export_kml_strict(&self, points: &[GeoPoint], filename: Option<&str>) -> GeoResult<KmlFile> {
        let result = self.validate(points);
        if !result.is_valid() {
            return Err(GeoError::ValidationFailed(result.errors()));
        }
        self.export_kml(points, filename)
    }

    /// Export points and save the file into `dir`
    ///
    /// # Returns
    /// Path of the written file
    pub fn export_kml_to<P: AsRef<Path>>(&self, points: &[GeoPoint], filename: Option<&str>, dir: P) -> GeoResult<PathBuf> {
        let file = self.export_kml(points, filename)?;
        file.save_to(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_export_reports_validation_errors() {
        let api = GeoWlan::new();
        let result = api.export_kml_strict(&[GeoPoint::unsurveyed(1, "AP-01")], None);
        match result {
            Err(GeoError::ValidationFailed(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn strict_export_of_empty_input_fails_validation_first() {
        let result = GeoWlan::new().export_kml_strict(&[], None);
        assert!(matches!(result, Err(GeoError::ValidationFailed(_))));
    }

    #[test]
    fn lax_export_skips_unsurveyed_points() {
        let api = GeoWlan::new();
        let points = vec![GeoPoint::unsurveyed(1, "AP-01"), GeoPoint::new(2, "AP-02", 5.0, 5.0)];
        let file = api.export_kml(&points, None).unwrap();
        assert_eq!(file.placemark_count(), 1);
        assert_eq!(file.skipped_count(), 1);
    }

    #[test]
    fn keep_zero_policy_reaches_exporter() {
        let api = GeoWlan::new().with_skip_policy(SkipPolicy::KeepZero);
        let file = api.export_kml(&[GeoPoint::new(1, "origin", 0.0, 0.0)], None).unwrap();
        assert_eq!(file.placemark_count(), 1);
    }

    #[test]
    fn export_to_directory_writes_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = GeoWlan::new()
            .export_kml_to(&[GeoPoint::new(1, "AP-01", 5.0, 5.0)], None, dir.path())
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "geowlan_points.kml");
        assert!(std::fs::read_to_string(path).unwrap().contains("<Placemark>"));
    }
}
