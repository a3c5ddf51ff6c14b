use alloc::string::String;
use alloc::vec::Vec;

use table_window::{RowKey, Spacer, TableBody, TableRow};

use crate::{Column, HeaderCell, header_cells};

/// Text of the placeholder row shown for an empty dataset.
pub const EMPTY_PLACEHOLDER: &str = "No data available";

/// A content-free row that stands in for unmaterialized rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacerRow {
    pub height: u64,
    /// Spacers span every column.
    pub column_span: usize,
}

impl SpacerRow {
    fn from_spacer(spacer: Option<Spacer>, column_span: usize) -> Option<Self> {
        spacer.map(|s| Self {
            height: s.height(),
            column_span,
        })
    }
}

/// A materialized row with its cells formatted in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedRow {
    pub key: RowKey,
    /// Index of the row in the dataset.
    pub index: usize,
    pub height: u32,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameBody {
    /// A single full-width row in place of spacers and rows.
    Placeholder {
        message: String,
        column_span: usize,
    },
    Rows {
        leading_spacer: Option<SpacerRow>,
        rows: Vec<RenderedRow>,
        trailing_spacer: Option<SpacerRow>,
    },
}

/// Everything a presentation layer needs to draw one frame of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableFrame {
    pub header: Vec<HeaderCell>,
    pub body: FrameBody,
    /// Size of the whole dataset, for informational display.
    pub total_rows: usize,
}

impl TableFrame {
    /// Builds a frame from a sliced body. Only the materialized rows are formatted.
    pub fn build<T: TableRow>(
        body: TableBody<'_, T>,
        columns: &[Column<T>],
        total_rows: usize,
    ) -> Self {
        let span = columns.len();
        let body = match body {
            TableBody::Placeholder => FrameBody::Placeholder {
                message: String::from(EMPTY_PLACEHOLDER),
                column_span: span,
            },
            TableBody::Rows(slice) => {
                let height = slice.row_height.get();
                let mut rows = Vec::with_capacity(slice.len());
                slice.for_each_keyed(|key, index, row| {
                    rows.push(RenderedRow {
                        key,
                        index,
                        height,
                        cells: columns.iter().map(|c| c.format_cell(row)).collect(),
                    });
                });
                FrameBody::Rows {
                    leading_spacer: SpacerRow::from_spacer(slice.leading_spacer, span),
                    rows,
                    trailing_spacer: SpacerRow::from_spacer(slice.trailing_spacer, span),
                }
            }
        };

        Self {
            header: header_cells(columns),
            body,
            total_rows,
        }
    }

    /// Materialized rows; empty for the placeholder.
    pub fn rows(&self) -> &[RenderedRow] {
        match &self.body {
            FrameBody::Placeholder { .. } => &[],
            FrameBody::Rows { rows, .. } => rows,
        }
    }

    /// Sum of spacer and row heights; equals the dataset's total height for a rows body.
    pub fn content_height(&self) -> u64 {
        match &self.body {
            FrameBody::Placeholder { .. } => 0,
            FrameBody::Rows {
                leading_spacer,
                rows,
                trailing_spacer,
            } => {
                let spacers = leading_spacer.map_or(0, |s| s.height)
                    + trailing_spacer.map_or(0, |s| s.height);
                rows.iter().fold(spacers, |acc, r| acc.saturating_add(r.height as u64))
            }
        }
    }
}
