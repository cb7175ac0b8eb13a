//! Coordinate utility functions
//!
//! Parsing of coordinate pairs given on the command line, either as
//! local grid `x,y` or geographic `lat,lng`.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // Two decimal numbers (optional sign, fraction and exponent) separated by
    // a comma and/or whitespace
    static ref COORDINATE_PAIR: Regex = Regex::new(
        r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*(?:,\s*|\s+)([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*$"
    ).expect("coordinate pair pattern is valid");
}

/// Parse a coordinate pair such as `"1250.5, -310"` or `"-22.3 -68.9"`
///
/// # Returns
/// The two numbers in the order given, or `InvalidCoordinate`
pub fn parse_coordinate_pair(coord_str: &str) -> GeoResult<(f64, f64)> {
    let captures = COORDINATE_PAIR.captures(coord_str).ok_or_else(|| {
        GeoError::InvalidCoordinate(format!("'{}' is not a pair of numbers like '1250.5,-310'", coord_str))
    })?;

    let first = parse_component(&captures[1])?;
    let second = parse_component(&captures[2])?;

    debug!("Parsed coordinate pair '{}' as ({}, {})", coord_str, first, second);
    Ok((first, second))
}

fn parse_component(text: &str) -> GeoResult<f64> {
    text.parse::<f64>()
        .map_err(|_| GeoError::InvalidCoordinate(format!("'{}' is not a number", text)))
}
