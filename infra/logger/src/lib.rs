//! # Logger
//!
//! A centralized logging utility for the project.
//! It provides a unified way to configure console and file logging with
//! rotation, non-blocking I/O, and environment-based filtering.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"fgate=debug"`); `RUST_LOG` still overrides the plain level.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use fgate_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl LoggerBuilder {
    fn new(name: String) -> Self {
        Self {
            name,
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }

    /// Enables console logging.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `"fgate=debug"`).
    ///
    /// Invalid filters cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Sets the directory for rolling log files.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Configures the log file rotation strategy.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Configures the maximum number of log files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Enables JSON output for the file layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. **Note:** the handle contains a [`WorkerGuard`]
    /// that must be kept alive for the duration of the program so that
    /// non-blocking logs are flushed correctly.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already
    /// been set, [`LoggerError::InvalidConfiguration`] for invalid builder
    /// settings, and [`LoggerError::Appender`] if the rolling file appender
    /// cannot be created.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be at least 1".into(),
                context: None,
            });
        }
        if !self.console && self.path.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        let env_filter = match &self.env_filter {
            Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
                LoggerError::InvalidConfiguration {
                    message: e.to_string().into(),
                    context: Some("Invalid env filter".into()),
                }
            })?,
            None => EnvFilter::builder().with_default_directive(self.level.into()).from_env_lossy(),
        };

        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(path) = self.path {
            fs::create_dir_all(&path).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", path.display()).into()),
            })?;

            let file_appender = RollingFileAppender::builder()
                .rotation(self.rotation)
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.max_files)
                .build(path)?;

            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);

            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            let boxed = if self.json { file_layer.json().boxed() } else { file_layer.boxed() };

            layers.push(boxed);
            Some(g)
        } else {
            None
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// This struct holds the background worker guard for the file appender.
/// Drop it only when the application is shutting down.
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a logger named `name` (used as the log file
    /// prefix).
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name.into())
    }

    /// True when a file appender (and its worker guard) is active.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}
