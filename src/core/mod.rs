//! Core types and foundations
//!
//! Error handling, configuration, and the runtime-typed sequence that the
//! application layer works with.

pub mod types;
pub mod error;
pub mod config;

// Re-export commonly used items
pub use types::{ElementType, Sequence};
pub use error::{Error, Result};
pub use config::Config;
