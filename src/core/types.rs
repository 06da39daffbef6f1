//! Core type definitions for seqfill
//!
//! [`ElementType`] names an integer type at runtime and [`Sequence`] holds a
//! generated sequence of whichever type was asked for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::config::{OutputConfig, OutputFormat};
use crate::core::error::{Error, Result};
use crate::sequence::fill::sequence_from;

/// Integer type of a sequence's elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    #[default]
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
}

impl ElementType {
    /// Every supported element type
    pub const ALL: [ElementType; 10] = [
        ElementType::I8,
        ElementType::I16,
        ElementType::I32,
        ElementType::I64,
        ElementType::Isize,
        ElementType::U8,
        ElementType::U16,
        ElementType::U32,
        ElementType::U64,
        ElementType::Usize,
    ];

    /// Rust name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::I8 => "i8",
            ElementType::I16 => "i16",
            ElementType::I32 => "i32",
            ElementType::I64 => "i64",
            ElementType::Isize => "isize",
            ElementType::U8 => "u8",
            ElementType::U16 => "u16",
            ElementType::U32 => "u32",
            ElementType::U64 => "u64",
            ElementType::Usize => "usize",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        ElementType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == lowered)
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "Unknown element type: {}. Valid options: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize",
                    s
                ))
            })
    }
}

/// An owned sequence whose element type is chosen at runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sequence {
    /// `i8` values
    I8(Vec<i8>),
    /// `i16` values
    I16(Vec<i16>),
    /// `i32` values
    I32(Vec<i32>),
    /// `i64` values
    I64(Vec<i64>),
    /// `isize` values
    Isize(Vec<isize>),
    /// `u8` values
    U8(Vec<u8>),
    /// `u16` values
    U16(Vec<u16>),
    /// `u32` values
    U32(Vec<u32>),
    /// `u64` values
    U64(Vec<u64>),
    /// `usize` values
    Usize(Vec<usize>),
}

macro_rules! with_values {
    ($seq:expr, $values:ident => $body:expr) => {
        match $seq {
            Sequence::I8($values) => $body,
            Sequence::I16($values) => $body,
            Sequence::I32($values) => $body,
            Sequence::I64($values) => $body,
            Sequence::Isize($values) => $body,
            Sequence::U8($values) => $body,
            Sequence::U16($values) => $body,
            Sequence::U32($values) => $body,
            Sequence::U64($values) => $body,
            Sequence::Usize($values) => $body,
        }
    };
}

macro_rules! generate_as {
    ($variant:ident, $ty:ty, $element_type:expr, $start:expr, $length:expr) => {{
        let start = <$ty>::try_from($start).map_err(|_| {
            Error::invalid_input(format!(
                "Start value {} does not fit in {}",
                $start, $element_type
            ))
        })?;
        Sequence::$variant(sequence_from::<$ty>($length, start)?)
    }};
}

impl Sequence {
    /// Build `length` values of `element_type` counting up from `start`
    pub fn generate(element_type: ElementType, start: i64, length: usize) -> Result<Self> {
        let sequence = match element_type {
            ElementType::I8 => generate_as!(I8, i8, element_type, start, length),
            ElementType::I16 => generate_as!(I16, i16, element_type, start, length),
            ElementType::I32 => generate_as!(I32, i32, element_type, start, length),
            ElementType::I64 => generate_as!(I64, i64, element_type, start, length),
            ElementType::Isize => generate_as!(Isize, isize, element_type, start, length),
            ElementType::U8 => generate_as!(U8, u8, element_type, start, length),
            ElementType::U16 => generate_as!(U16, u16, element_type, start, length),
            ElementType::U32 => generate_as!(U32, u32, element_type, start, length),
            ElementType::U64 => generate_as!(U64, u64, element_type, start, length),
            ElementType::Usize => generate_as!(Usize, usize, element_type, start, length),
        };
        Ok(sequence)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        with_values!(self, values => values.len())
    }

    /// Whether the sequence has no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runtime element type
    pub fn element_type(&self) -> ElementType {
        match self {
            Sequence::I8(_) => ElementType::I8,
            Sequence::I16(_) => ElementType::I16,
            Sequence::I32(_) => ElementType::I32,
            Sequence::I64(_) => ElementType::I64,
            Sequence::Isize(_) => ElementType::Isize,
            Sequence::U8(_) => ElementType::U8,
            Sequence::U16(_) => ElementType::U16,
            Sequence::U32(_) => ElementType::U32,
            Sequence::U64(_) => ElementType::U64,
            Sequence::Usize(_) => ElementType::Usize,
        }
    }

    /// Render the values for output
    pub fn render(&self, output: &OutputConfig) -> Result<String> {
        match output.format {
            OutputFormat::Text => Ok(with_values!(self, values => join_values(values, &output.separator))),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

fn join_values<T: ToString>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
