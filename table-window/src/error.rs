use core::fmt;

/// A rejected viewport configuration.
///
/// Row height and viewport height are divisors/extents of the windowing math; a zero value has
/// no meaningful window, so it is refused up front instead of producing degenerate output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `row_height` was zero.
    ZeroRowHeight,
    /// `viewport_height` was zero.
    ZeroViewportHeight,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRowHeight => f.write_str("row height must be greater than zero"),
            Self::ZeroViewportHeight => f.write_str("viewport height must be greater than zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// A [`crate::Window`] that does not describe the dataset it was applied to.
///
/// These are programmer errors (a stale window, or a window computed with a different row
/// height). Debug builds assert before returning them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// `window.total_height` differs from `rows.len() * row_height`.
    HeightMismatch { expected: u64, actual: u64 },
    /// The window's index range reaches past the end of the dataset.
    IndexOutOfBounds {
        start_index: usize,
        end_index: usize,
        len: usize,
    },
    /// Leading offset plus materialized rows exceed the total height.
    SpacerUnderflow {
        total_height: u64,
        leading_offset: u64,
        rows_height: u64,
    },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::HeightMismatch { expected, actual } => write!(
                f,
                "window total height {actual} does not match dataset height {expected}"
            ),
            Self::IndexOutOfBounds {
                start_index,
                end_index,
                len,
            } => write!(
                f,
                "window range {start_index}..={end_index} is out of bounds for {len} rows"
            ),
            Self::SpacerUnderflow {
                total_height,
                leading_offset,
                rows_height,
            } => write!(
                f,
                "negative trailing spacer (total={total_height}, leading={leading_offset}, rows={rows_height})"
            ),
        }
    }
}

impl core::error::Error for SliceError {}
