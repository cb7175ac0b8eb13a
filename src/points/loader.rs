//! Loading point collections from TOML files
//!
//! Point files hold an array of `[[points]]` tables:
//!
//! ```toml
//! [[points]]
//! id = 1
//! name = "AP-01"
//! x = 1250.5
//! y = -310.0
//! enabled = true
//! ```
//!
//! Optional fields that are absent or of the wrong type load as `None`, so
//! partially surveyed records survive loading and are judged later by the
//! validator or the exporter.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use super::point::GeoPoint;
use crate::errors::{GeoError, GeoResult};
use crate::utils::toml_utils::value_as_f64;

/// Parse points from TOML content
pub fn load_points_from_str(content: &str) -> GeoResult<Vec<GeoPoint>> {
    let toml_value: toml::Value = content.parse()?;

    let records = toml_value
        .get("points")
        .and_then(|v| v.as_array())
        .ok_or_else(|| GeoError::GenericError("Point file has no [[points]] array".to_string()))?;

    let points = records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_record(index, record))
        .collect::<GeoResult<Vec<_>>>()?;

    debug!("Loaded {} point records", points.len());
    Ok(points)
}

/// Load points from a TOML file
pub fn load_points<P: AsRef<Path>>(path: P) -> GeoResult<Vec<GeoPoint>> {
    let path = path.as_ref();
    debug!("Reading points from {}", path.display());
    let content = fs::read_to_string(path)?;
    load_points_from_str(&content)
}

fn parse_record(index: usize, record: &toml::Value) -> GeoResult<GeoPoint> {
    let table = record.as_table().ok_or_else(|| GeoError::InvalidPointRecord {
        index,
        reason: "expected a table".to_string(),
    })?;

    let id = table.get("id").and_then(|v| v.as_integer());
    if id.is_none() {
        warn!("Point record {} has no integer id", index);
    }

    Ok(GeoPoint {
        id,
        name: table
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        x: table.get("x").and_then(value_as_f64),
        y: table.get("y").and_then(value_as_f64),
        enabled: table.get("enabled").and_then(|v| v.as_bool()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_complete_and_partial_records() {
        let content = r#"
[[points]]
id = 1
name = "AP-01"
x = 1250.5
y = -310
enabled = true

[[points]]
id = 2
name = "AP-02"
"#;
        let points = load_points_from_str(content).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], GeoPoint::new(1, "AP-01", 1250.5, -310.0));
        assert_eq!(points[1], GeoPoint::unsurveyed(2, "AP-02"));
    }

    #[test]
    fn wrongly_typed_fields_load_as_missing() {
        let content = r#"
[[points]]
id = "seven"
name = 7
x = "north"
enabled = "yes"
"#;
        let points = load_points_from_str(content).unwrap();
        assert_eq!(points[0].id, None);
        assert_eq!(points[0].name, "");
        assert_eq!(points[0].x, None);
        assert_eq!(points[0].enabled, None);
    }

    #[test]
    fn missing_points_array_is_an_error() {
        let result = load_points_from_str("title = \"nothing here\"\n");
        assert!(matches!(result, Err(GeoError::GenericError(_))));
    }

    #[test]
    fn non_table_record_is_reported_with_index() {
        let result = load_points_from_str("points = [1, 2]\n");
        match result {
            Err(GeoError::InvalidPointRecord { index, .. }) => assert_eq!(index, 0),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(load_points_from_str("[[points]\nid = 1").is_err());
    }

    #[test]
    fn empty_points_array_loads_empty() {
        let points = load_points_from_str("points = []\n").unwrap();
        assert!(points.is_empty());
    }
}
