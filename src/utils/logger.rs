//! Logger utility for application-wide logging
//!
//! This module provides a file-backed logger that works alongside the
//! standard log crate. Commands also use it directly to keep an audit trail
//! of conversions and exports.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

use crate::kml::KmlFile;
use crate::points::ValidationResult;

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level written through the `log` facade
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Info,
        })
    }

    /// A logger that discards audit lines
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Off,
        }
    }

    /// Set the most verbose level accepted from the `log` facade
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Logs a message to the log file
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the outcome of a validation pass, one line per issue
    pub fn log_validation(&self, source: &str, result: &ValidationResult) -> io::Result<()> {
        if result.is_valid() {
            return self.log(&format!("Validation of {}: OK", source));
        }

        self.log(&format!("Validation of {}: {} issue(s)", source, result.issues().len()))?;
        for error in result.errors() {
            self.log(&format!("  {}", error))?;
        }
        Ok(())
    }

    /// Logs a summary of a KML export
    pub fn log_export(&self, file: &KmlFile) -> io::Result<()> {
        self.log(&format!(
            "Exported {}: {} placemark(s) from {} point(s), {} skipped",
            file.filename(),
            file.placemark_count(),
            file.input_count(),
            file.skipped_count()
        ))
    }

    /// Install a file logger as the global `log` backend
    pub fn init_global_logger<P: AsRef<Path>>(log_file: P, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?.with_level(level);

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
