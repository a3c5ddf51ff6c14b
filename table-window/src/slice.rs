use core::num::NonZeroU32;

use crate::window::total_height;
use crate::{RowKey, SliceError, Spacer, TableRow, Window};

/// The body of a windowed table: either a placeholder for an empty dataset, or the
/// materialized rows framed by their spacers.
#[derive(Debug, PartialEq, Eq)]
pub enum TableBody<'a, T> {
    /// The dataset is empty; render a single full-width placeholder row and no spacers.
    Placeholder,
    Rows(RowSlice<'a, T>),
}

impl<T> Clone for TableBody<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TableBody<'_, T> {}

impl<'a, T> TableBody<'a, T> {
    pub fn rows(&self) -> Option<&RowSlice<'a, T>> {
        match self {
            Self::Placeholder => None,
            Self::Rows(slice) => Some(slice),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// A contiguous run of dataset rows plus the space above and below it.
///
/// `leading_spacer` and `trailing_spacer` are `None` when their height would be zero, so a
/// renderer never emits zero-height elements. Together with the rows they add up to the full
/// scrollable height of the dataset.
#[derive(Debug, PartialEq, Eq)]
pub struct RowSlice<'a, T> {
    pub first_index: usize,
    pub rows: &'a [T],
    pub row_height: NonZeroU32,
    pub leading_spacer: Option<Spacer>,
    pub trailing_spacer: Option<Spacer>,
}

impl<T> Clone for RowSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowSlice<'_, T> {}

impl<'a, T> RowSlice<'a, T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn leading_height(&self) -> u64 {
        self.leading_spacer.map_or(0, |s| s.height())
    }

    pub fn trailing_height(&self) -> u64 {
        self.trailing_spacer.map_or(0, |s| s.height())
    }

    /// Iterates rows with their dataset index, in dataset order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &'a T)> + use<'a, T> {
        let first = self.first_index;
        self.rows
            .iter()
            .enumerate()
            .map(move |(i, row)| (first + i, row))
    }

    /// Iterates rows with their key and dataset index, without allocations.
    pub fn for_each_keyed(&self, mut f: impl FnMut(RowKey, usize, &'a T))
    where
        T: TableRow,
    {
        for (index, row) in self.iter() {
            f(row.row_key(), index, row);
        }
    }
}

/// Slices `rows` down to `window` and computes the spacers around the slice.
///
/// `window` must have been computed for `rows.len()` items and the same `row_height`; a window
/// that does not describe `rows` is a programmer error. Debug builds assert, release builds
/// return a [`SliceError`] instead of clamping the mismatch away.
pub fn render_slice<'a, T>(
    rows: &'a [T],
    window: &Window,
    row_height: NonZeroU32,
) -> Result<TableBody<'a, T>, SliceError> {
    let expected = total_height(rows.len(), row_height);
    if window.total_height != expected {
        vwarn!(
            expected,
            actual = window.total_height,
            "render_slice: window does not match dataset height"
        );
        debug_assert!(
            window.total_height == expected,
            "render_slice: window height mismatch (window={}, dataset={expected})",
            window.total_height
        );
        return Err(SliceError::HeightMismatch {
            expected,
            actual: window.total_height,
        });
    }

    if rows.is_empty() {
        return Ok(TableBody::Placeholder);
    }

    let Some(visible) = rows.get(window.start_index..=window.end_index) else {
        vwarn!(
            start_index = window.start_index,
            end_index = window.end_index,
            len = rows.len(),
            "render_slice: window range out of bounds"
        );
        debug_assert!(
            window.end_index < rows.len() && window.start_index <= window.end_index,
            "render_slice: window range out of bounds ({}..={}, len={})",
            window.start_index,
            window.end_index,
            rows.len()
        );
        return Err(SliceError::IndexOutOfBounds {
            start_index: window.start_index,
            end_index: window.end_index,
            len: rows.len(),
        });
    };

    let rows_height = total_height(visible.len(), row_height);
    let Some(trailing) = window
        .total_height
        .checked_sub(window.leading_offset)
        .and_then(|rest| rest.checked_sub(rows_height))
    else {
        vwarn!(
            total_height = window.total_height,
            leading_offset = window.leading_offset,
            rows_height,
            "render_slice: negative trailing spacer"
        );
        debug_assert!(
            window.leading_offset.saturating_add(rows_height) <= window.total_height,
            "render_slice: negative trailing spacer (total={}, leading={}, rows={rows_height})",
            window.total_height,
            window.leading_offset
        );
        return Err(SliceError::SpacerUnderflow {
            total_height: window.total_height,
            leading_offset: window.leading_offset,
            rows_height,
        });
    };

    Ok(TableBody::Rows(RowSlice {
        first_index: window.start_index,
        rows: visible,
        row_height,
        leading_spacer: Spacer::new(window.leading_offset),
        trailing_spacer: Spacer::new(trailing),
    }))
}
