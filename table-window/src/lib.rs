//! A headless row-windowing engine for large fixed-row-height tables.
//!
//! For column definitions, header layout and a scroll controller, see the
//! `table-window-adapter` crate.
//!
//! Only the rows around the viewport are materialized: the engine turns
//! `(total_items, row_height, viewport_height, scroll_offset, overscan)` into a [`Window`] (a
//! contiguous, overscanned index range plus the total and leading heights), and the slice
//! renderer turns a window into the borrowed row slice and the two spacers that keep the
//! scrollable region at its full height.
//!
//! Both steps are pure and O(1) in the dataset size, so an adapter can recompute them on every
//! scroll event. A UI layer is expected to provide:
//! - the viewport (container) height
//! - the current scroll offset
//! - the dataset
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod key;
mod slice;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, SliceError};
pub use key::{RowKey, TableRow};
pub use slice::{RowSlice, TableBody, render_slice};
pub use state::{
    DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT, ScrollState, ViewportState,
};
pub use types::{Align, Spacer};
pub use window::{Window, clamp_scroll_offset, compute_window, max_scroll_offset, total_height};
