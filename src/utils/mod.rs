//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod logger;
pub mod coordinate_utils;
pub(crate) mod toml_utils;
pub mod xml_utils;
