//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities. Records are
//! echoed to stderr so stdout stays free for converted geometry.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level written
    level: LevelFilter,
    /// Whether records are echoed to stderr
    echo: bool,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Info,
            echo: false,
        })
    }

    /// Creates a logger that writes nowhere but still filters by level
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Off,
            echo: false,
        }
    }

    /// Set the most verbose level this logger writes
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Echo every record to stderr as well as the file
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
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

    /// Static method to initialize the global logger
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `level` - Most verbose level recorded; `Debug` under `--verbose`
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?
            .with_level(level)
            .with_echo(true);

        // Only the first call installs a logger
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

            if self.echo {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_log_writes_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wktkit.log");
        let logger = Logger::new(path.to_str().unwrap()).unwrap();

        logger.log("Conversion successful").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Conversion successful\n");
    }

    #[test]
    fn test_level_filtering() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wktkit.log");
        let logger = Logger::new(path.to_str().unwrap()).unwrap();

        let debug = Metadata::builder().level(Level::Debug).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));

        let verbose = logger.with_level(LevelFilter::Debug);
        assert!(verbose.enabled(&debug));
    }

    #[test]
    fn test_disabled_logger_accepts_messages() {
        let logger = Logger::disabled();
        assert!(logger.log("dropped").is_ok());
        assert!(!logger.enabled(&Metadata::builder().level(Level::Error).build()));
    }
}
