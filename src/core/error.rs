//! Construction errors.
//!
//! Path transitions never fail (a rejected candidate is a normal outcome),
//! so the only fallible operations are the ones that build an engine.

use thiserror::Error;

use super::color::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid size must be between 1 and {max}, got {actual}")]
    InvalidGridSize { actual: usize, max: usize },

    #[error("Color count must be at least 1")]
    NoColors,

    #[error("Layout must have {expected} rows, got {actual}")]
    LayoutRowCount { expected: usize, actual: usize },

    #[error("Layout row {row} must have {expected} columns, got {actual}")]
    LayoutRowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Layout color {color} at ({x}, {y}) is outside 0..{num_colors}")]
    LayoutColorOutOfRange {
        x: usize,
        y: usize,
        color: Color,
        num_colors: u8,
    },
}
