//! Exported KML file artifacts

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::errors::{GeoError, GeoResult};

/// MIME type of KML documents
pub const KML_MIME_TYPE: &str = "application/vnd.google-earth.kml+xml";

/// File name used when the caller does not supply one
pub const DEFAULT_KML_FILENAME: &str = "geowlan_points.kml";

/// A rendered KML document ready to be delivered as a file
#[derive(Debug, Clone, PartialEq)]
pub struct KmlFile {
    filename: String,
    contents: String,
    input_count: usize,
    placemark_count: usize,
}

impl KmlFile {
    pub(crate) fn new(filename: &str, contents: String, input_count: usize, placemark_count: usize) -> Self {
        KmlFile {
            filename: filename.to_string(),
            contents,
            input_count,
            placemark_count,
        }
    }

    /// Name the file is delivered under
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Always [`KML_MIME_TYPE`]
    pub fn mime_type(&self) -> &'static str {
        KML_MIME_TYPE
    }

    /// The serialized document
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Number of points passed to the exporter
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Number of placemarks actually written
    pub fn placemark_count(&self) -> usize {
        self.placemark_count
    }

    /// Points dropped because their coordinates were missing
    pub fn skipped_count(&self) -> usize {
        self.input_count - self.placemark_count
    }

    /// Write the document into `dir` under its own file name.
    ///
    /// Only the final component of the file name is used, so a name like
    /// `../points.kml` still lands inside `dir`.
    pub fn save_to<P: AsRef<Path>>(&self, dir: P) -> GeoResult<PathBuf> {
        let name = Path::new(&self.filename)
            .file_name()
            .ok_or_else(|| GeoError::GenericError(format!("Invalid KML file name: '{}'", self.filename)))?;
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(name);
        self.save_as(&path)?;
        Ok(path)
    }

    /// Write the document to an explicit path
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> GeoResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        self.write_to(&mut file)?;
        file.flush()?;
        info!("Wrote {} ({} bytes) to {}", self.filename, self.contents.len(), path.display());
        Ok(())
    }

    /// Write the raw document bytes to any writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> GeoResult<()> {
        writer.write_all(self.contents.as_bytes())?;
        Ok(())
    }
}
