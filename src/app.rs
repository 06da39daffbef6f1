//! Application runner
//!
//! Ties configuration, generation, metrics, and rendering together for the
//! command line front-end.

use crate::core::config::{Config, OutputFormat};
use crate::core::{Result, Sequence};
use crate::sequence::get_four;
use crate::system::metrics::Metrics;
use crate::time_operation;
use tracing::{info, instrument};

/// Result of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// Rendered sequence
    pub body: String,
    /// Number of elements generated
    pub elements: usize,
}

/// Central application state
pub struct App {
    /// Application configuration
    pub config: Config,
}

impl App {
    /// Create an app from an already validated configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate and render the configured sequence
    #[instrument(skip(self), fields(
        element_type = %self.config.sequence.element_type,
        start = self.config.sequence.start,
        length = self.config.sequence.length,
    ))]
    pub fn run(&self) -> Result<Output> {
        let seq_config = &self.config.sequence;
        let metrics = Metrics::global();

        let generated = time_operation!(
            metrics.fill_duration,
            Sequence::generate(seq_config.element_type, seq_config.start, seq_config.length)
        );
        metrics.record_fill(seq_config.length, generated.is_ok());
        let sequence = generated?;

        let body = sequence.render(&self.config.output)?;
        info!(elements = sequence.len(), "sequence generated");

        Ok(Output {
            body,
            elements: sequence.len(),
        })
    }

    /// Render the constant in the configured output format
    pub fn four(&self) -> String {
        match self.config.output.format {
            OutputFormat::Text => get_four().to_string(),
            OutputFormat::Json => serde_json::json!(get_four()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ElementType, Error};

    #[test]
    fn test_default_run_prints_first_four_indices() {
        let app = App::new(Config::default());
        let output = app.run().unwrap();
        assert_eq!(output.body, "0 1 2 3");
        assert_eq!(output.elements, 4);
    }

    #[test]
    fn test_run_json_with_start() {
        let mut config = Config::default();
        config.sequence.element_type = ElementType::I64;
        config.sequence.start = -2;
        config.sequence.length = 3;
        config.output.format = OutputFormat::Json;

        let output = App::new(config).run().unwrap();
        assert_eq!(output.body, "[-2,-1,0]");
    }

    #[test]
    fn test_run_overflow_counts_failure() {
        let mut config = Config::default();
        config.sequence.element_type = ElementType::U8;
        config.sequence.length = 1000;

        let failures = Metrics::global().fill_failures.get();
        let err = App::new(config).run().unwrap_err();
        assert!(matches!(err, Error::Overflow { .. }));
        assert!(Metrics::global().fill_failures.get() > failures);
    }

    #[test]
    fn test_four_in_each_format() {
        let mut config = Config::default();
        assert_eq!(App::new(config.clone()).four(), "4");

        config.output.format = OutputFormat::Json;
        assert_eq!(App::new(config).four(), "4");
    }
}
