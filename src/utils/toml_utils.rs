//! TOML value helpers

/// Read a TOML number as f64, accepting both floats and integers
pub fn value_as_f64(value: &toml::Value) -> Option<f64> {
    value
        .as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
}
