//! Site calibration for the local grid <-> WGS84 affine transforms
//!
//! A calibration holds two independently fitted affine maps: the forward map
//! from local grid (x, y) to (lat, lng), and the companion inverse map. The
//! two come from the same survey fit but are not exact matrix inverses of
//! each other, so round trips are only approximately idempotent.

use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::{GeoError, GeoResult};
use crate::utils::toml_utils::value_as_f64;

/// Name used when a calibration does not label its site
pub const DEFAULT_SITE_NAME: &str = "GeoWLAN site grid";

/// Coefficients of a 2D affine map `out = M * in + t`
///
/// ```text
/// out1 = m11 * in1 + m12 * in2 + t1
/// out2 = m21 * in1 + m22 * in2 + t2
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineCoefficients {
    pub m11: f64,
    pub m12: f64,
    pub t1: f64,
    pub m21: f64,
    pub m22: f64,
    pub t2: f64,
}

impl AffineCoefficients {
    /// Create a set of affine coefficients
    pub const fn new(m11: f64, m12: f64, t1: f64, m21: f64, m22: f64, t2: f64) -> Self {
        AffineCoefficients { m11, m12, t1, m21, m22, t2 }
    }

    /// Apply the map to an input pair
    pub fn apply(&self, in1: f64, in2: f64) -> (f64, f64) {
        (
            self.m11 * in1 + self.m12 * in2 + self.t1,
            self.m21 * in1 + self.m22 * in2 + self.t2,
        )
    }

    /// Determinant of the linear part
    pub fn determinant(&self) -> f64 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    fn is_finite(&self) -> bool {
        [self.m11, self.m12, self.t1, self.m21, self.m22, self.t2]
            .iter()
            .all(|c| c.is_finite())
    }
}

/// Immutable calibration of one survey site.
///
/// Built once and handed to a [`CoordinateTransform`](super::CoordinateTransform);
/// there are no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    site: String,
    forward: AffineCoefficients,
    inverse: AffineCoefficients,
}

impl Calibration {
    /// Forward map for the deployed site: `lat = a1*x + a2*y + lat0`,
    /// `lng = b1*x + b2*y + lng0`.
    pub const SITE_FORWARD: AffineCoefficients = AffineCoefficients::new(
        -2.367369e-07, 9.040618e-06, -22.305412,
        9.706291e-06, 2.541682e-07, -68.902871,
    );

    /// Inverse map for the deployed site: `x = c1*lat + c2*lng + x0`,
    /// `y = d1*lat + d2*lng + y0`.
    pub const SITE_INVERSE: AffineCoefficients = AffineCoefficients::new(
        -2894.49, 102955.4, 7029359.85,
        110536.1, 2695.981, 2651314.08,
    );

    /// Create a calibration from explicit coefficients
    pub fn new(site: &str, forward: AffineCoefficients, inverse: AffineCoefficients) -> GeoResult<Self> {
        if !forward.is_finite() {
            return Err(GeoError::InvalidCalibration("forward coefficients must be finite".to_string()));
        }
        if !inverse.is_finite() {
            return Err(GeoError::InvalidCalibration("inverse coefficients must be finite".to_string()));
        }
        if forward.determinant() == 0.0 || inverse.determinant() == 0.0 {
            return Err(GeoError::InvalidCalibration("affine map is degenerate (zero determinant)".to_string()));
        }

        Ok(Calibration {
            site: site.to_string(),
            forward,
            inverse,
        })
    }

    /// The calibration compiled in for the deployed site
    pub fn site_default() -> Self {
        Calibration {
            site: DEFAULT_SITE_NAME.to_string(),
            forward: Self::SITE_FORWARD,
            inverse: Self::SITE_INVERSE,
        }
    }

    /// Parse a calibration from TOML content
    ///
    /// Expects `[forward]` with `a1 a2 lat0 b1 b2 lng0`, `[inverse]` with
    /// `c1 c2 x0 d1 d2 y0`, and optionally `[site] name`.
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = content.parse()?;

        let site = toml_value
            .get("site")
            .and_then(|s| s.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or(DEFAULT_SITE_NAME);

        let forward = Self::parse_section(&toml_value, "forward", ["a1", "a2", "lat0", "b1", "b2", "lng0"])?;
        let inverse = Self::parse_section(&toml_value, "inverse", ["c1", "c2", "x0", "d1", "d2", "y0"])?;

        debug!("Loaded calibration for '{}': forward {:?}, inverse {:?}", site, forward, inverse);
        Self::new(site, forward, inverse)
    }

    /// Load a calibration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GeoResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    fn parse_section(toml_value: &toml::Value, section: &str, keys: [&str; 6]) -> GeoResult<AffineCoefficients> {
        let table = toml_value
            .get(section)
            .and_then(|v| v.as_table())
            .ok_or_else(|| GeoError::InvalidCalibration(format!("missing [{}] section", section)))?;

        let mut values = [0.0f64; 6];
        for (slot, key) in values.iter_mut().zip(keys.iter()) {
            let value = table
                .get(*key)
                .ok_or_else(|| GeoError::InvalidCalibration(format!("missing {}.{}", section, key)))?;
            *slot = value_as_f64(value)
                .filter(|v| v.is_finite())
                .ok_or_else(|| GeoError::InvalidCalibration(format!("{}.{} is not a finite number", section, key)))?;
        }

        Ok(AffineCoefficients::new(values[0], values[1], values[2], values[3], values[4], values[5]))
    }

    /// Human readable site label
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Local grid -> geographic coefficients
    pub fn forward(&self) -> &AffineCoefficients {
        &self.forward
    }

    /// Geographic -> local grid coefficients
    pub fn inverse(&self) -> &AffineCoefficients {
        &self.inverse
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::site_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[site]
name = "North pit"

[forward]
a1 = 0.0
a2 = 1e-5
lat0 = -20.0
b1 = 1e-5
b2 = 0
lng0 = -70.0

[inverse]
c1 = 0.0
c2 = 100000.0
x0 = 7000000.0
d1 = 100000.0
d2 = 0.0
y0 = 2000000.0
"#;

    #[test]
    fn bundled_file_matches_compiled_default() {
        let parsed = Calibration::from_str(include_str!("../../site_calibration.toml")).unwrap();
        assert_eq!(parsed.forward(), Calibration::site_default().forward());
        assert_eq!(parsed.inverse(), Calibration::site_default().inverse());
    }

    #[test]
    fn parses_site_name_and_integer_coefficients() {
        let calibration = Calibration::from_str(SAMPLE).unwrap();
        assert_eq!(calibration.site(), "North pit");
        assert_eq!(calibration.forward().m22, 0.0);
        assert_eq!(calibration.forward().t2, -70.0);
        assert_eq!(calibration.inverse().t1, 7000000.0);
    }

    #[test]
    fn missing_key_is_reported_by_name() {
        let content = SAMPLE.replace("lng0 = -70.0", "");
        match Calibration::from_str(&content) {
            Err(GeoError::InvalidCalibration(msg)) => assert_eq!(msg, "missing forward.lng0"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_section_is_rejected() {
        let content = "[forward]\na1 = 1.0\n";
        assert!(matches!(Calibration::from_str(content), Err(GeoError::InvalidCalibration(_))));
    }

    #[test]
    fn non_numeric_coefficient_is_rejected() {
        let content = SAMPLE.replace("d2 = 0.0", "d2 = \"zero\"");
        match Calibration::from_str(&content) {
            Err(GeoError::InvalidCalibration(msg)) => assert_eq!(msg, "inverse.d2 is not a finite number"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn degenerate_map_is_rejected() {
        let flat = AffineCoefficients::new(1.0, 2.0, 0.0, 2.0, 4.0, 0.0);
        let result = Calibration::new("flat", flat, Calibration::SITE_INVERSE);
        assert!(matches!(result, Err(GeoError::InvalidCalibration(_))));
    }

    #[test]
    fn apply_evaluates_affine_map() {
        let coefficients = AffineCoefficients::new(2.0, 3.0, 1.0, -1.0, 0.5, 10.0);
        assert_eq!(coefficients.apply(1.0, 2.0), (9.0, 10.0));
    }
}
