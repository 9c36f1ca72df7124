//! Structured logging setup.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// Minimum level for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Equivalent `tracing` filter.
    pub fn as_filter(&self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Errors from logging setup.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid filter directive {directive:?}: {reason}")]
    InvalidDirective { directive: String, reason: String },

    #[error("Global subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Logging configuration.
///
/// Filters come only from here; the environment is never consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Extra `target=level` directives, e.g. `folio_contact=debug`.
    pub directives: Vec<String>,
    /// Include the event target in each line.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            directives: Vec::new(),
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Human-readable output at debug level.
    pub fn development() -> Self {
        Self::default()
            .with_level(LogLevel::Debug)
            .with_format(LogFormat::Human)
    }

    /// Set the default level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Add a per-target directive.
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// Build the filter: the default level plus every directive.
    pub fn filter(&self) -> Result<EnvFilter, LoggingError> {
        let mut filter = EnvFilter::builder()
            .with_default_directive(self.level.as_filter().into())
            .parse("")
            .map_err(|e| LoggingError::InvalidDirective {
                directive: String::new(),
                reason: e.to_string(),
            })?;

        for raw in &self.directives {
            let directive = raw
                .parse::<Directive>()
                .map_err(|e| LoggingError::InvalidDirective {
                    directive: raw.clone(),
                    reason: e.to_string(),
                })?;
            filter = filter.add_directive(directive);
        }

        Ok(filter)
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Fails if a subscriber is already installed; callers that may run more
/// than once per process can ignore `AlreadyInstalled`.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = config.filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.with_ansi(false).try_init(),
    };

    result.map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))?;
    tracing::debug!(level = %config.level, format = ?config.format, "logging initialised");
    Ok(())
}
