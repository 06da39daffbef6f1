//! Sequence operations
//!
//! The constant accessor and the in-place index fills, the two operations
//! everything else in the crate is built around.

pub mod constant;
pub mod fill;

pub use constant::{get_four, FOUR};
pub use fill::{fill_from, fill_sequence, sequence, sequence_from, SequenceValue};
