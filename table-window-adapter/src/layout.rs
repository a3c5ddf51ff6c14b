use alloc::string::String;
use alloc::vec::Vec;

use crate::Column;

/// Minimum width of a column that has no fixed width.
pub const DEFAULT_MIN_COLUMN_WIDTH: u32 = 120;

/// How wide a column wants to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnExtent {
    Fixed(u32),
    /// An equal share (`1 / of`) of the table width.
    Share { of: usize },
}

/// Width constraints of a single column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnLayout {
    pub extent: ColumnExtent,
    pub min_width: u32,
    pub max_width: Option<u32>,
}

impl ColumnLayout {
    /// Layout of a column among `column_count` columns.
    ///
    /// A fixed width pins min and max to the same value; otherwise the column takes an equal
    /// share with a [`DEFAULT_MIN_COLUMN_WIDTH`] floor and no ceiling.
    pub fn new(width: Option<u32>, column_count: usize) -> Self {
        match width {
            Some(w) => Self {
                extent: ColumnExtent::Fixed(w),
                min_width: w,
                max_width: Some(w),
            },
            None => Self {
                extent: ColumnExtent::Share {
                    of: column_count.max(1),
                },
                min_width: DEFAULT_MIN_COLUMN_WIDTH,
                max_width: None,
            },
        }
    }

    /// Resolves the layout against the available table width.
    pub fn resolve(&self, available_width: u32) -> u32 {
        let preferred = match self.extent {
            ColumnExtent::Fixed(w) => w,
            ColumnExtent::Share { of } => {
                let of = u32::try_from(of).unwrap_or(u32::MAX);
                available_width / of
            }
        };
        let width = preferred.max(self.min_width);
        match self.max_width {
            Some(max) => width.min(max),
            None => width,
        }
    }
}

/// One header cell, in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub layout: ColumnLayout,
}

/// Builds the header row for `columns`.
pub fn header_cells<T>(columns: &[Column<T>]) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|c| HeaderCell {
            key: c.key.clone(),
            title: c.header.clone(),
            layout: ColumnLayout::new(c.width, columns.len()),
        })
        .collect()
}

/// Resolves every column's width against `available_width`.
pub fn resolve_widths<T>(columns: &[Column<T>], available_width: u32) -> Vec<u32> {
    columns
        .iter()
        .map(|c| ColumnLayout::new(c.width, columns.len()).resolve(available_width))
        .collect()
}
