//! seqfill - index-filled integer sequences
//!
//! The crate is built around two operations: [`get_four`], which returns the
//! constant `4`, and [`fill_sequence`], which overwrites a slice so that
//! every element equals its index. Around them sit a runtime-typed
//! [`Sequence`], configuration, logging, and metrics for the `seqfill`
//! command line tool.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;
pub mod sequence;

// Application and system modules
pub mod app;
pub mod system;

// Re-export commonly used items for convenience
pub use crate::core::{Config, ElementType, Error, Result, Sequence};
pub use sequence::{fill_from, fill_sequence, get_four, sequence, sequence_from, SequenceValue, FOUR};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging and metrics for a run
pub fn init(config: &Config) -> Result<()> {
    system::init_logging(&config.logging)?;

    tracing::info!("Initializing {} v{}", NAME, VERSION);

    system::metrics::init_registry();

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_root_exports_both_sequence_constructors() {
        assert_eq!(crate::sequence::<u8>(3).unwrap(), vec![0, 1, 2]);
        assert_eq!(crate::sequence_from::<u8>(3, 5).unwrap(), vec![5, 6, 7]);
    }
}
