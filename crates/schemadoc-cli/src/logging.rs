//! Diagnostics logging for the schemadoc CLI
//!
//! Logs always go to stderr so a document written to stdout stays clean.
//! The level comes from `-v`, then the config file, then `RUST_LOG`.

use crate::config;
use crate::error::{Error, Result};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive
    pub level: String,
    pub format: LogFormat,
    pub color: bool,
    /// Thread ids and source locations, for `-vvv`
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Full,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "compact" => Some(LogFormat::Compact),
            "full" => Some(LogFormat::Full),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            color: true,
            detailed: false,
        }
    }
}

impl LoggingConfig {
    /// `-v` shows generation progress, `-vv` section ids, `-vvv` everything
    pub fn from_verbosity(verbosity: u8) -> Self {
        let (level, format, detailed) = match verbosity {
            0 => ("warn", LogFormat::Compact, false),
            1 => ("info", LogFormat::Compact, false),
            2 => ("debug", LogFormat::Compact, false),
            _ => ("trace", LogFormat::Full, true),
        };
        Self {
            level: level.to_string(),
            format,
            detailed,
            ..Self::default()
        }
    }

    /// Apply the `logging` section of the configuration file
    ///
    /// The file level only applies when no `-v` was given.
    pub fn merge_with_file(&mut self, file: &config::LoggingConfig, verbosity: u8) {
        if verbosity == 0 {
            if let Some(level) = &file.level {
                self.level = level.clone();
            }
        }
        self.set_format(&file.format);
    }

    /// `RUST_LOG` and `SCHEMADOC_LOG_FORMAT` win over everything else
    pub fn merge_with_env(&mut self) {
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }
        if let Ok(format) = std::env::var("SCHEMADOC_LOG_FORMAT") {
            self.set_format(&format);
        }
    }

    fn set_format(&mut self, value: &str) {
        match LogFormat::parse(value) {
            Some(format) => self.format = format,
            None => tracing::warn!("Unknown log format '{}', keeping {:?}", value, self.format),
        }
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.level)
            .map_err(|e| Error::config(format!("Invalid log level '{}': {}", self.level, e)))
    }
}

/// Install the global subscriber
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = config.env_filter()?;
    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_thread_ids(config.detailed)
        .with_file(config.detailed)
        .with_line_number(config.detailed);
    let layer = match config.format {
        LogFormat::Compact => base.with_ansi(config.color).compact().boxed(),
        LogFormat::Full => base.with_ansi(config.color).boxed(),
        LogFormat::Json => base.with_ansi(false).json().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| Error::config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(config = ?config, "Logging initialized");
    Ok(())
}

pub mod timing {
    use std::time::Instant;
    use tracing::{field, Span};

    /// Records `duration_ms` on its span when dropped
    pub struct Timer {
        start: Instant,
        span: Span,
    }

    impl Timer {
        pub fn new(operation: &str) -> Self {
            Self::with_details(operation, "")
        }

        pub fn with_details(operation: &str, details: &str) -> Self {
            Self {
                start: Instant::now(),
                span: tracing::info_span!(
                    "operation",
                    operation = operation,
                    details = details,
                    duration_ms = field::Empty,
                ),
            }
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let elapsed = self.start.elapsed().as_millis() as u64;
            self.span.record("duration_ms", elapsed);
            self.span.in_scope(|| tracing::debug!(duration_ms = elapsed, "Finished"));
        }
    }
}
