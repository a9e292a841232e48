//! Opt-in diagnostic logging for the client
//!
//! The library never writes to stderr unless the host application calls
//! [`Logger::init`] (or [`init_from_env`]). Request/response tracing is
//! emitted at debug level, lifecycle events at info, recoverable problems
//! at warning.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

/// Log levels, numbered with syslog priorities so comparisons read naturally
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    /// Error conditions (3)
    Error = 3,
    /// Warning conditions (4)
    Warning = 4,
    /// Informational message (6)
    Info = 6,
    /// Debug-level message (7)
    Debug = 7,
}

impl LogLevel {
    /// Get the priority number
    pub fn priority(self) -> u8 {
        self as u8
    }

    /// Get the string representation
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Get color code for terminal output
    pub fn color_code(self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[31m",   // Red
            LogLevel::Warning => "\x1b[33m", // Yellow
            LogLevel::Info => "\x1b[32m",    // Green
            LogLevel::Debug => "\x1b[37m",   // White/gray
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum log level to output
    pub min_level: LogLevel,
    /// Whether to use colors in output
    pub use_colors: bool,
    /// Whether to include timestamps
    pub include_timestamp: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            use_colors: atty::is(atty::Stream::Stderr),
            include_timestamp: true,
        }
    }
}

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

/// Logger writing to stderr
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
    min_level: AtomicU8,
}

impl Logger {
    /// Create a new logger with the given configuration
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            min_level: AtomicU8::new(config.min_level.priority()),
            config,
        }
    }

    /// Initialize the global logger
    pub fn init(config: LoggerConfig) -> Result<(), LoggerError> {
        let logger = Self::new(config);

        let mut global_logger = LOGGER.lock().map_err(|_| LoggerError::InitError)?;
        if global_logger.is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }
        *global_logger = Some(logger);

        Ok(())
    }

    /// Set the minimum log level at runtime
    pub fn set_min_level(&self, level: LogLevel) {
        self.min_level.store(level.priority(), Ordering::Relaxed);
    }

    /// Check if a log level should be output
    pub fn should_log(&self, level: LogLevel) -> bool {
        level.priority() <= self.min_level.load(Ordering::Relaxed)
    }

    /// Log a message with the given level
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.should_log(level) {
            return;
        }

        let mut output = String::new();

        if self.config.include_timestamp {
            let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S");
            output.push_str(&format!("{} ", now));
        }

        if self.config.use_colors {
            output.push_str(&format!(
                "{}[{}]\x1b[0m {}",
                level.color_code(),
                level.as_str(),
                message
            ));
        } else {
            output.push_str(&format!("[{}] {}", level.as_str(), message));
        }

        eprintln!("{}", output);
    }
}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::core::logger::log_with_level($crate::core::logger::LogLevel::Error, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::core::logger::log_with_level($crate::core::logger::LogLevel::Warning, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::core::logger::log_with_level($crate::core::logger::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::core::logger::log_with_level($crate::core::logger::LogLevel::Debug, &format!($($arg)*))
    };
}

/// Internal function to log with level
pub fn log_with_level(level: LogLevel, message: &str) {
    if let Ok(logger_guard) = LOGGER.lock() {
        if let Some(ref logger) = *logger_guard {
            logger.log(level, message);
        }
    }
}

/// Logger initialization errors
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Logger already initialized")]
    AlreadyInitialized,
    #[error("Failed to initialize logger")]
    InitError,
}

/// Initialize the logger from the `SMHW_LOG` environment variable
/// (`error`, `warn`, `info` or `debug`; unset leaves logging disabled)
pub fn init_from_env() -> Result<(), LoggerError> {
    let min_level = match std::env::var("SMHW_LOG").as_deref() {
        Ok("error") => LogLevel::Error,
        Ok("warn") | Ok("warning") => LogLevel::Warning,
        Ok("debug") | Ok("trace") => LogLevel::Debug,
        Ok(_) => LogLevel::Info,
        Err(_) => return Ok(()),
    };

    let config = LoggerConfig {
        min_level,
        ..Default::default()
    };

    Logger::init(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Info < LogLevel::Debug);
    }

    #[test]
    fn test_log_level_priority() {
        assert_eq!(LogLevel::Error.priority(), 3);
        assert_eq!(LogLevel::Info.priority(), 6);
        assert_eq!(LogLevel::Debug.priority(), 7);
    }

    #[test]
    fn test_logger_config_default() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(config.include_timestamp);
    }

    #[test]
    fn test_logger_level_filtering() {
        let config = LoggerConfig {
            min_level: LogLevel::Warning,
            ..Default::default()
        };
        let logger = Logger::new(config);

        assert!(logger.should_log(LogLevel::Error));
        assert!(logger.should_log(LogLevel::Warning));
        assert!(!logger.should_log(LogLevel::Info));
        assert!(!logger.should_log(LogLevel::Debug));
    }

    #[test]
    fn test_runtime_level_change() {
        let logger = Logger::new(LoggerConfig::default());
        assert!(!logger.should_log(LogLevel::Debug));
        logger.set_min_level(LogLevel::Debug);
        assert!(logger.should_log(LogLevel::Debug));
    }
}
