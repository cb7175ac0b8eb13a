//! Pre-export validation of point collections
//!
//! The validator is a strict gate meant for user feedback: it collects every
//! problem in the batch instead of stopping at the first one. It is separate
//! from the exporter's own filter, which silently skips points without
//! coordinates rather than failing.

use std::fmt;

use log::{debug, warn};

use super::point::GeoPoint;

/// A single problem found in a point collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The collection is empty
    NoPoints,
    /// The point has no id, or a zero id
    MissingId { index: usize },
    /// The point name is empty after trimming
    MissingName { index: usize },
    /// X is missing or not a finite number
    InvalidX { index: usize },
    /// Y is missing or not a finite number
    InvalidY { index: usize },
}

impl ValidationIssue {
    /// Index of the offending point, if the issue concerns one point
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationIssue::NoPoints => None,
            ValidationIssue::MissingId { index }
            | ValidationIssue::MissingName { index }
            | ValidationIssue::InvalidX { index }
            | ValidationIssue::InvalidY { index } => Some(*index),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::NoPoints => write!(f, "No points provided for export"),
            ValidationIssue::MissingId { index } => write!(f, "Point at index {} is missing an ID", index),
            ValidationIssue::MissingName { index } => write!(f, "Point at index {} is missing a name", index),
            ValidationIssue::InvalidX { index } => write!(f, "Point at index {} has invalid X coordinate", index),
            ValidationIssue::InvalidY { index } => write!(f, "Point at index {} has invalid Y coordinate", index),
        }
    }
}

/// Outcome of validating a point collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// True iff no issues were found
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues in the order they were found
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Human readable messages, one per issue
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.to_string()).collect()
    }
}

/// Checks point collections before export
#[derive(Debug, Clone, Copy, Default)]
pub struct SpatialPointValidator;

impl SpatialPointValidator {
    /// Create a new validator
    pub fn new() -> Self {
        SpatialPointValidator
    }

    /// Validate a collection of points.
    ///
    /// An empty collection yields a single `NoPoints` issue. Otherwise each
    /// point is checked for id, name, x and y, in that order, and every
    /// violation is recorded.
    pub fn validate(&self, points: &[GeoPoint]) -> ValidationResult {
        if points.is_empty() {
            warn!("Validation failed: no points provided");
            return ValidationResult { issues: vec![ValidationIssue::NoPoints] };
        }

        let mut issues = Vec::new();
        for (index, point) in points.iter().enumerate() {
            if !matches!(point.id, Some(id) if id != 0) {
                issues.push(ValidationIssue::MissingId { index });
            }
            if point.name.trim().is_empty() {
                issues.push(ValidationIssue::MissingName { index });
            }
            if !is_finite_coordinate(point.x) {
                issues.push(ValidationIssue::InvalidX { index });
            }
            if !is_finite_coordinate(point.y) {
                issues.push(ValidationIssue::InvalidY { index });
            }
        }

        if issues.is_empty() {
            debug!("Validated {} points without issues", points.len());
        } else {
            warn!("Validation found {} issue(s) in {} points", issues.len(), points.len());
        }

        ValidationResult { issues }
    }
}

fn is_finite_coordinate(value: Option<f64>) -> bool {
    value.map_or(false, f64::is_finite)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> SpatialPointValidator {
        SpatialPointValidator::new()
    }

    #[test]
    fn empty_collection_has_single_top_level_error() {
        let result = validator().validate(&[]);
        assert!(!result.is_valid());
        assert_eq!(result.issues(), &[ValidationIssue::NoPoints]);
        assert_eq!(result.errors(), vec!["No points provided for export".to_string()]);
        assert_eq!(result.issues()[0].index(), None);
    }

    #[test]
    fn valid_points_pass() {
        let points = vec![
            GeoPoint::new(1, "AP-01", 10.0, 20.0),
            GeoPoint::new(2, "AP-02", 0.0, -5.5).with_enabled(false),
        ];
        let result = validator().validate(&points);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn collects_one_error_per_offending_point() {
        let mut no_id = GeoPoint::new(1, "AP-01", 10.0, 20.0);
        no_id.id = None;
        let no_name = GeoPoint::new(2, "   ", 10.0, 20.0);
        let mut no_x = GeoPoint::new(3, "AP-03", 10.0, 20.0);
        no_x.x = None;

        let result = validator().validate(&[no_id, no_name, no_x]);
        assert!(!result.is_valid());
        assert_eq!(
            result.errors(),
            vec![
                "Point at index 0 is missing an ID".to_string(),
                "Point at index 1 is missing a name".to_string(),
                "Point at index 2 has invalid X coordinate".to_string(),
            ]
        );
    }

    #[test]
    fn checks_within_a_point_follow_id_name_x_y_order() {
        let broken = GeoPoint {
            id: Some(0),
            name: String::new(),
            x: Some(f64::NAN),
            y: Some(f64::INFINITY),
            enabled: None,
        };
        let result = validator().validate(&[broken]);
        assert_eq!(
            result.issues(),
            &[
                ValidationIssue::MissingId { index: 0 },
                ValidationIssue::MissingName { index: 0 },
                ValidationIssue::InvalidX { index: 0 },
                ValidationIssue::InvalidY { index: 0 },
            ]
        );
    }

    #[test]
    fn unsurveyed_point_fails_both_coordinates() {
        let result = validator().validate(&[GeoPoint::unsurveyed(4, "AP-04")]);
        assert_eq!(
            result.errors(),
            vec![
                "Point at index 0 has invalid X coordinate".to_string(),
                "Point at index 0 has invalid Y coordinate".to_string(),
            ]
        );
    }
}
