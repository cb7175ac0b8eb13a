//! KML generation for Google Earth
//!
//! Point collections are mapped through the site transform and written as a
//! KML 2.2 document with one placemark per surveyed point.

mod document;
mod exporter;
mod file;
mod style;

pub use self::document::{KmlDocument, Placemark, KML_NAMESPACE};
pub use self::exporter::{KmlExporter, SkipPolicy, FOLDER_NAME};
pub use self::file::{KmlFile, DEFAULT_KML_FILENAME, KML_MIME_TYPE};
pub use self::style::PinStyle;
