//! Errors raised when validating orthography tables.

use thiserror::Error;

/// A malformed orthography table.
///
/// The tables shipped with this crate are checked at compile time, so this
/// error is only produced for tables supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OrthographyError {
    #[error("orthography table is empty")]
    Empty,

    #[error("range marker at slot {offset} is missing its bounds")]
    DanglingSentinel { offset: usize },

    #[error("inverted range {lower:#06x}..={upper:#06x} at slot {offset}")]
    InvertedRange {
        offset: usize,
        lower: u32,
        upper: u32,
    },

    #[error("value {value:#x} at slot {offset} is not a Unicode code point")]
    InvalidCodepoint { offset: usize, value: u32 },

    #[error("declared size {declared} exceeds the {actual} slots available")]
    SizeMismatch { declared: usize, actual: usize },
}
