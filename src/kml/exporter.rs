//! KML export of point collections
//!
//! The exporter is a single pass: reject an empty collection, drop points
//! without usable coordinates, transform the rest to WGS84 and serialize one
//! placemark per retained point, in input order. It does not run the
//! [`SpatialPointValidator`](crate::points::SpatialPointValidator); callers
//! wanting detailed diagnostics validate first.

use log::{debug, info, warn};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::document::{KmlDocument, Placemark};
use super::file::{KmlFile, DEFAULT_KML_FILENAME};
use super::style::PinStyle;
use crate::coordinate::{CoordinateTransform, GlobalCoordinate, LocalCoordinate};
use crate::errors::{GeoError, GeoResult};
use crate::points::GeoPoint;

/// Folder holding the exported placemarks
pub const FOLDER_NAME: &str = "Points";

/// Which coordinate values count as missing when filtering points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Missing, zero and non-finite values are all skipped.
    ///
    /// A point surveyed exactly on a grid axis is dropped under this policy.
    #[default]
    ZeroIsMissing,
    /// Only missing and non-finite values are skipped; zero is a real coordinate
    KeepZero,
}

impl SkipPolicy {
    fn is_usable(&self, value: Option<f64>) -> bool {
        match (self, value) {
            (_, None) => false,
            (SkipPolicy::ZeroIsMissing, Some(v)) => v.is_finite() && v != 0.0,
            (SkipPolicy::KeepZero, Some(v)) => v.is_finite(),
        }
    }

    /// Local coordinate of a point, or `None` if it should be skipped
    pub fn coordinate_of(&self, point: &GeoPoint) -> Option<LocalCoordinate> {
        if self.is_usable(point.x) && self.is_usable(point.y) {
            point.local()
        } else {
            None
        }
    }
}

/// Renders point collections as KML documents
#[derive(Debug, Clone, Default)]
pub struct KmlExporter {
    transform: CoordinateTransform,
    skip_policy: SkipPolicy,
}

impl KmlExporter {
    /// Create an exporter using the given transform
    pub fn new(transform: CoordinateTransform) -> Self {
        KmlExporter {
            transform,
            skip_policy: SkipPolicy::default(),
        }
    }

    /// Use a different policy for missing coordinates
    pub fn with_skip_policy(mut self, skip_policy: SkipPolicy) -> Self {
        self.skip_policy = skip_policy;
        self
    }

    /// The transform used for placemark positions
    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// How points with missing coordinates are treated
    pub fn skip_policy(&self) -> SkipPolicy {
        self.skip_policy
    }

    /// Export points as a KML file named `filename`, or
    /// [`DEFAULT_KML_FILENAME`] when none is given.
    ///
    /// # Errors
    /// [`GeoError::EmptyExport`] when `points` is empty. Nothing is rendered
    /// in that case.
    pub fn export(&self, points: &[GeoPoint], filename: Option<&str>) -> GeoResult<KmlFile> {
        self.export_at(points, filename, OffsetDateTime::now_utc())
    }

    /// Same as [`export`](Self::export) with an explicit generation time
    pub fn export_at(&self, points: &[GeoPoint], filename: Option<&str>, generated_at: OffsetDateTime) -> GeoResult<KmlFile> {
        let document = self.build_document(points, generated_at)?;
        let placemark_count = document.placemarks.len();
        let contents = document.to_xml()?;
        let filename = filename.unwrap_or(DEFAULT_KML_FILENAME);

        info!("Exported {} of {} points to {}", placemark_count, points.len(), filename);
        Ok(KmlFile::new(filename, contents, points.len(), placemark_count))
    }

    /// Render points to a KML string
    pub fn render(&self, points: &[GeoPoint]) -> GeoResult<String> {
        self.render_at(points, OffsetDateTime::now_utc())
    }

    /// Render points to a KML string with an explicit generation time
    pub fn render_at(&self, points: &[GeoPoint], generated_at: OffsetDateTime) -> GeoResult<String> {
        self.build_document(points, generated_at)?.to_xml()
    }

    /// Build the document model without serializing it
    pub fn build_document(&self, points: &[GeoPoint], generated_at: OffsetDateTime) -> GeoResult<KmlDocument> {
        if points.is_empty() {
            return Err(GeoError::EmptyExport);
        }

        let mut placemarks = Vec::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            let Some(local) = self.skip_policy.coordinate_of(point) else {
                warn!("Skipping point at index {} ('{}'): missing coordinates", index, point.name);
                continue;
            };

            let global = self.transform.local_to_global(local.x, local.y);
            debug!("Point '{}' at {} -> {}", point.name, local, global);
            placemarks.push(self.placemark(point, local, global));
        }

        let timestamp = generated_at
            .format(&Rfc3339)
            .map_err(|e| GeoError::GenericError(format!("Failed to format export timestamp: {}", e)))?;

        Ok(KmlDocument {
            name: format!("{} - Points", self.transform.calibration().site()),
            description: format!("Exported on: {}<br/>Total Points: {}", timestamp, points.len()),
            folder_name: FOLDER_NAME.to_string(),
            placemarks,
        })
    }

    fn placemark(&self, point: &GeoPoint, local: LocalCoordinate, global: GlobalCoordinate) -> Placemark {
        let style = PinStyle::for_status(point.is_enabled());
        let description = format!(
            "<b>ID:</b> {}<br/>\
             <b>Local Coordinates:</b> {}<br/>\
             <b>Global Coordinates:</b> {}<br/>\
             <b>Status:</b> {}",
            point.id_label(),
            local,
            global,
            style.status_label(),
        );

        Placemark {
            name: point.name.clone(),
            description,
            coordinate: global,
            style,
        }
    }
}
