//! Adapter utilities for the `table-window` crate.
//!
//! The `table-window` crate only computes which rows to materialize and how much space to leave
//! around them. This crate adds the framework-neutral pieces a table widget needs on top:
//!
//! - Column definitions with per-column cell formatting
//! - Column width layout and the header row
//! - A controller that owns rows, columns and scroll state and produces draw-ready frames
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod column;
mod controller;
mod frame;
mod layout;


pub use column::{CellAccessor, CellFormatter, CellValue, Column};
pub use controller::TableController;
pub use frame::{EMPTY_PLACEHOLDER, FrameBody, RenderedRow, SpacerRow, TableFrame};
pub use layout::{
    ColumnExtent, ColumnLayout, DEFAULT_MIN_COLUMN_WIDTH, HeaderCell, header_cells,
    resolve_widths,
};
