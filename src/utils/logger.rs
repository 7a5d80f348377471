//! Logger utility for application-wide logging
//!
//! This module provides a logger that works alongside the standard log
//! crate and adds file output. Commands also use it directly to keep a
//! record of the results they produce.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use log::{Log, Record, Metadata, LevelFilter};

use crate::geo::BoundingBox;

/// File-backed logger
///
/// Clones share the same file handle, so one instance can be installed as
/// the global `log` backend while another is handed to commands.
#[derive(Clone)]
pub struct Logger {
    /// File handle for log output, `None` when logging to file is off
    file: Arc<Mutex<Option<File>>>,
    /// Most verbose level written
    level: LevelFilter,
    /// Set once a write to the log file has failed
    write_failed: Arc<AtomicBool>,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated if it exists
    /// * `level` - Most verbose level accepted from the `log` facade
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger::with_file(Some(file), level))
    }

    fn with_file(file: Option<File>, level: LevelFilter) -> Self {
        Logger {
            file: Arc::new(Mutex::new(file)),
            level,
            write_failed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Creates a logger that writes nothing to disk
    pub fn disabled(level: LevelFilter) -> Self {
        Logger::with_file(None, level)
    }

    /// Whether this logger has a file attached
    pub fn has_file(&self) -> bool {
        self.file.lock().map(|f| f.is_some()).unwrap_or(false)
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Whether a `log` record could not be written to the file
    pub fn write_failed(&self) -> bool {
        self.write_failed.load(Ordering::Relaxed)
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the corners of a bounding box, one per line
    pub fn log_bounding_box(&self, bbox: &BoundingBox) -> io::Result<()> {
        self.log("Bounding box:")?;

        let labels = ["top_left", "top_right", "bottom_left", "bottom_right"];
        for (label, corner) in labels.iter().zip(bbox.corners().iter()) {
            self.log(&format!("  {:<12} lat: {:.6}, lng: {:.6}", label, corner.lat, corner.lng))?;
        }

        Ok(())
    }

    /// Install a clone of this logger as the global `log` backend
    pub fn init_global_logger(&self) -> io::Result<()> {
        if log::set_boxed_logger(Box::new(self.clone())).is_err() {
            // Only happens when something else installed a logger first
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(self.level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            if let Err(e) = Logger::log(self, &message) {
                // Report the first failure only
                if !self.write_failed.swap(true, Ordering::Relaxed) {
                    eprintln!("Warning: failed to write to log file: {}", e);
                }
            }

            // Also echo to the console, away from command output
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Point;
    use crate::units::Distance;

    fn temp_log(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("geodist-{}-{}.log", name, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_log_writes_lines() {
        let path = temp_log("lines");
        let logger = Logger::new(&path, LevelFilter::Info).unwrap();

        logger.log("first").unwrap();
        logger.clone().log("second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_log_bounding_box() {
        let path = temp_log("bbox");
        let logger = Logger::new(&path, LevelFilter::Info).unwrap();
        let bbox = Point::new(0.0, 0.0).find_box_with_radius(Distance::miles(1.0));

        logger.log_bounding_box(&bbox).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 5);
        assert!(contents.contains("bottom_right"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_disabled_logger() {
        let logger = Logger::disabled(LevelFilter::Warn);
        assert!(!logger.has_file());
        assert!(logger.log("ignored").is_ok());
        assert_eq!(logger.level(), LevelFilter::Warn);
    }

    #[test]
    fn test_failed_write_is_recorded() {
        let path = temp_log("readonly");
        File::create(&path).unwrap();
        let read_only = File::open(&path).unwrap();
        let logger = Logger::with_file(Some(read_only), LevelFilter::Info);

        assert!(logger.log("direct").is_err());
        assert!(!logger.write_failed());

        for _ in 0..2 {
            Log::log(&logger, &Record::builder()
                .args(format_args!("lost"))
                .level(log::Level::Error)
                .build());
        }

        assert!(logger.write_failed());
        assert!(logger.clone().write_failed());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = Logger::disabled(LevelFilter::Info);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let warn = Metadata::builder().level(log::Level::Warn).build();

        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
    }
}
