//! Error types and handling for seqfill
//!
//! This module defines the single error type used throughout the crate.

use thiserror::Error;

use crate::core::types::ElementType;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for seqfill
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested sequence does not fit in its element type
    #[error("Sequence overflow: {length} {element_type} values starting at {start} exceed the type's range")]
    Overflow {
        /// Element type of the sequence
        element_type: ElementType,
        /// First value of the sequence
        start: String,
        /// Number of elements requested
        length: usize,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML config parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Prometheus metrics errors
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Check if this error was caused by what the caller asked for,
    /// as opposed to the environment the tool runs in
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::Overflow { .. } | Error::InvalidInput(_) | Error::Toml(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message_names_type_and_length() {
        let err = Error::Overflow {
            element_type: ElementType::I8,
            start: "0".to_string(),
            length: 129,
        };
        let msg = err.to_string();
        assert!(msg.contains("129"));
        assert!(msg.contains("i8"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::config("bad").is_client_error());
        assert!(Error::invalid_input("bad").is_client_error());

        let io = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(!io.is_client_error());
    }
}
