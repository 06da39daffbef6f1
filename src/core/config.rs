//! Configuration management for seqfill
//!
//! Settings come from defaults, then an optional TOML file, then `SF_*`
//! environment variables. The binary applies command line flags last.

use crate::core::error::{Error, Result};
use crate::core::types::ElementType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// File read by [`Config::load`] when present in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "seqfill.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to generate
    pub sequence: SequenceConfig,

    /// How to print it
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Metrics and monitoring
    pub metrics: MetricsConfig,
}

/// Sequence generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Integer type of each element
    pub element_type: ElementType,

    /// Value at index 0
    pub start: i64,

    /// Number of elements
    pub length: usize,

    /// Upper bound accepted for `length`
    pub max_length: usize,
}

/// Output rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Separator between values in text output
    pub separator: String,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Values joined by the separator
    #[default]
    Text,
    /// A JSON array
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log line format
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// Single line per event
    #[default]
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Metrics configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Dump Prometheus metrics after a run
    pub enabled: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            element_type: ElementType::I32,
            start: 0,
            length: crate::sequence::FOUR as usize,
            max_length: 16 * 1024 * 1024, // 16M elements
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            separator: " ".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    /// Level name trimmed and lowercased
    pub fn normalized_level(&self) -> String {
        self.level.trim().to_ascii_lowercase()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::config(format!(
                "Invalid output format: {}. Valid options: text, json",
                s
            ))),
        }
    }
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(Error::config(format!(
                "Invalid log format: {}. Valid options: pretty, compact, json",
                s
            ))),
        }
    }
}

impl Config {
    /// Load configuration from `seqfill.toml` (when present) and the
    /// environment, then validate it.
    ///
    /// Callers that layer further overrides on top should use
    /// [`Config::resolve`] and call [`Config::validate`] themselves.
    pub fn load() -> Result<Self> {
        let config = Self::resolve(None, Path::new(DEFAULT_CONFIG_FILE), |key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from a file and `SF_*` overrides without
    /// validating it.
    ///
    /// An explicit `path` must exist and parse. Otherwise `default_file` is
    /// read only if it exists, and defaults are used when it does not.
    pub fn resolve<F>(path: Option<&Path>, default_file: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if default_file.exists() => Self::from_file(default_file)?,
            None => Config::default(),
        };

        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents)?;
        debug!(?path, "loaded config file");
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `SF_*` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Sequence overrides
        if let Some(length) = lookup("SF_LENGTH") {
            self.sequence.length = length.trim().parse()
                .map_err(|e| Error::config(format!("Invalid SF_LENGTH: {}", e)))?;
        }

        if let Some(start) = lookup("SF_START") {
            self.sequence.start = start.trim().parse()
                .map_err(|e| Error::config(format!("Invalid SF_START: {}", e)))?;
        }

        if let Some(element_type) = lookup("SF_ELEMENT_TYPE") {
            self.sequence.element_type = element_type.parse()
                .map_err(|e| Error::config(format!("Invalid SF_ELEMENT_TYPE: {}", e)))?;
        }

        // Output overrides
        if let Some(format) = lookup("SF_OUTPUT_FORMAT") {
            self.output.format = format.parse()?;
        }

        if let Some(separator) = lookup("SF_SEPARATOR") {
            self.output.separator = separator;
        }

        // Logging overrides
        if let Some(level) = lookup("SF_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = lookup("SF_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }

        if let Some(enabled) = lookup("SF_METRICS") {
            self.metrics.enabled = parse_flag(&enabled)
                .ok_or_else(|| Error::config(format!("Invalid SF_METRICS: {}", enabled)))?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.sequence.max_length == 0 {
            return Err(Error::config("max_length must be at least 1"));
        }

        if self.sequence.length > self.sequence.max_length {
            return Err(Error::config(format!(
                "Sequence length {} exceeds max_length {}",
                self.sequence.length, self.sequence.max_length
            )));
        }

        match self.logging.normalized_level().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(Error::config(format!("Invalid log level: {}", self.logging.level))),
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
