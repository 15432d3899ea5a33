//! Logging setup built on tracing and tracing-subscriber.
//!
//! Supports a console layer (optionally colored) and an optional file layer
//! with selectable output format. The log level applies to both outputs and
//! can still be refined through `RUST_LOG`-style directives in the level
//! string.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Logger error types
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The configured log level is not a valid filter directive
    #[error("Invalid log level '{0}'. Valid levels are: trace, debug, info, warn, error")]
    InvalidLevel(String),

    /// The configured file format string is unknown
    #[error("Invalid log format '{0}'. Valid formats are: full, compact, json")]
    InvalidFormat(String),

    /// Console and file output are both disabled
    #[error("At least one log output (console or file) must be enabled")]
    NoOutputEnabled,

    /// Failed to open the log file
    #[error("Failed to open log file")]
    Io(#[from] std::io::Error),

    /// Failed to install the global subscriber
    #[error("Failed to initialize logger: {0}")]
    Init(String),
}

/// Output format for the file layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Default human-readable format
    Full,
    /// Condensed single-line format
    Compact,
    /// Newline-delimited JSON
    #[default]
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Whether console output is enabled
    pub enabled: bool,
    /// Whether to use ANSI colors
    pub colored: bool,
}

impl ConsoleConfig {
    pub fn new(enabled: bool, colored: bool) -> Self {
        Self { enabled, colored }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// File output configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileConfig {
    /// Whether file output is enabled
    pub enabled: bool,
    /// Path to the log file
    pub path: PathBuf,
    /// Whether to append to an existing file
    pub append: bool,
    /// Output format for the file layer
    pub format: LogFormat,
}

impl FileConfig {
    pub fn new(enabled: bool, path: PathBuf, append: bool, format: LogFormat) -> Self {
        Self {
            enabled,
            path,
            append,
            format,
        }
    }
}

/// Runtime logger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Console output configuration
    pub console: ConsoleConfig,
    /// File output configuration
    pub file: FileConfig,
    /// Log level or filter directive string
    pub level: String,
}

impl LoggerConfig {
    /// Create a validated logger configuration.
    ///
    /// # Errors
    /// - `LoggerError::InvalidLevel` if the level string is not a valid filter
    /// - `LoggerError::NoOutputEnabled` if both outputs are disabled
    pub fn new(
        console: ConsoleConfig,
        file: FileConfig,
        level: String,
    ) -> Result<Self, LoggerError> {
        EnvFilter::try_new(&level).map_err(|_| LoggerError::InvalidLevel(level.clone()))?;

        if !console.enabled && !file.enabled {
            return Err(LoggerError::NoOutputEnabled);
        }

        Ok(Self {
            console,
            file,
            level,
        })
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
            level: "info".to_string(),
        }
    }
}

/// Install the global tracing subscriber from the given configuration.
///
/// # Errors
/// Returns an error if the log file cannot be opened or if a global
/// subscriber has already been installed.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    let filter =
        EnvFilter::try_new(&config.level).map_err(|_| LoggerError::InvalidLevel(config.level.clone()))?;

    let console_layer = config
        .console
        .enabled
        .then(|| fmt::layer().with_ansi(config.console.colored).boxed());

    let file_layer = if config.file.enabled {
        if let Some(parent) = config.file.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(config.file.append)
            .truncate(!config.file.append)
            .write(true)
            .open(&config.file.path)?;
        let writer = Arc::new(file);

        Some(match config.file.format {
            LogFormat::Full => fmt::layer().with_ansi(false).with_writer(writer).boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_ansi(false)
                .with_writer(writer)
                .boxed(),
            LogFormat::Json => fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .boxed(),
        })
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("full".parse::<LogFormat>().unwrap(), LogFormat::Full);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Full".parse::<LogFormat>().unwrap(), LogFormat::Full);
    }

    #[test]
    fn test_log_format_invalid() {
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(LoggerError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_logger_config_valid() {
        let config = LoggerConfig::new(
            ConsoleConfig::default(),
            FileConfig::default(),
            "debug".to_string(),
        )
        .expect("Should build config");
        assert_eq!(config.level, "debug");
        assert!(config.console.enabled);
    }

    #[test]
    fn test_logger_config_invalid_level() {
        let result = LoggerConfig::new(
            ConsoleConfig::default(),
            FileConfig::default(),
            "not=a=level".to_string(),
        );
        assert!(matches!(result, Err(LoggerError::InvalidLevel(_))));
    }

    #[test]
    fn test_logger_config_no_output() {
        let result = LoggerConfig::new(
            ConsoleConfig::new(false, false),
            FileConfig::default(),
            "info".to_string(),
        );
        assert!(matches!(result, Err(LoggerError::NoOutputEnabled)));
    }

    #[test]
    fn test_logger_config_default() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.console.enabled);
        assert!(!config.file.enabled);
        assert_eq!(config.file.format, LogFormat::Json);
    }
}
