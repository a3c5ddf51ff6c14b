use core::num::NonZeroU32;
use core::ops::Range;

use crate::{ScrollState, ViewportState};

/// The materialized index range of a table plus the offsets needed to place it.
///
/// A window is a derived value: it is recomputed from scratch on every scroll or configuration
/// change and never updated incrementally.
///
/// Invariants (upheld by [`compute_window`]):
/// - `start_index <= end_index < total_items` whenever `total_items > 0`
/// - `total_height == total_items * row_height`
/// - `leading_offset == start_index * row_height`
/// - all fields are `0` for an empty dataset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // inclusive
    pub total_height: u64,
    pub leading_offset: u64,
}

impl Window {
    /// The window of an empty dataset.
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
        total_height: 0,
        leading_offset: 0,
    };

    /// Computes the window for `total_items` rows under a validated viewport configuration.
    pub fn compute(total_items: usize, viewport: &ViewportState, scroll: ScrollState) -> Self {
        compute_window(
            total_items,
            viewport.row_height(),
            viewport.viewport_height(),
            scroll.offset,
            viewport.overscan(),
        )
    }

    /// Returns `true` for the window of an empty dataset.
    pub fn is_empty(&self) -> bool {
        self.total_height == 0
    }

    /// Number of rows the window materializes.
    ///
    /// An inverted window (`start_index > end_index`, only reachable by building one by hand)
    /// materializes nothing.
    pub fn row_count(&self) -> usize {
        self.indices().len()
    }

    /// Dataset indexes covered by the window (half-open); empty for an empty dataset.
    pub fn indices(&self) -> Range<usize> {
        if self.is_empty() || self.start_index > self.end_index {
            return 0..0;
        }
        self.start_index..self.end_index.saturating_add(1)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

/// Computes the window of rows to materialize.
///
/// - `viewport_height` may be `0` (nothing strictly visible; only overscan is materialized).
/// - `scroll_offset` past the maximum scroll offset (e.g. after the dataset shrank or the
///   viewport grew) is clamped, never an error.
/// - Overscan extends each edge from the unextended visible start, and each edge is clamped to
///   the dataset bounds independently, so hitting one boundary never shrinks the other margin.
///
/// The cost is O(1) in `total_items`.
pub fn compute_window(
    total_items: usize,
    row_height: NonZeroU32,
    viewport_height: u32,
    scroll_offset: u64,
    overscan: usize,
) -> Window {
    if total_items == 0 {
        return Window::EMPTY;
    }

    let row = row_height.get() as u64;
    let total_height = total_height(total_items, row_height);
    let offset = clamp_scroll_offset(total_items, row_height, viewport_height, scroll_offset);

    let visible_count = (viewport_height as u64).div_ceil(row) as usize;
    let last = total_items - 1;
    // `offset / row` can only reach `total_items` when the viewport is empty.
    let raw_start = ((offset / row) as usize).min(last);

    let start_index = raw_start.saturating_sub(overscan);
    let raw_end = raw_start.saturating_add(visible_count);
    let end_index = raw_end.saturating_add(overscan).min(last);

    let window = Window {
        start_index,
        end_index,
        total_height,
        leading_offset: row_start(start_index, row_height),
    };
    vtrace!(
        total_items,
        scroll_offset,
        start_index,
        end_index,
        "compute_window"
    );
    window
}

/// Total scrollable height of `total_items` rows.
pub fn total_height(total_items: usize, row_height: NonZeroU32) -> u64 {
    (total_items as u64).saturating_mul(row_height.get() as u64)
}

/// Largest meaningful scroll offset: the point where the last row touches the viewport bottom.
pub fn max_scroll_offset(total_items: usize, row_height: NonZeroU32, viewport_height: u32) -> u64 {
    total_height(total_items, row_height).saturating_sub(viewport_height as u64)
}

pub fn clamp_scroll_offset(
    total_items: usize,
    row_height: NonZeroU32,
    viewport_height: u32,
    scroll_offset: u64,
) -> u64 {
    scroll_offset.min(max_scroll_offset(total_items, row_height, viewport_height))
}

pub(crate) fn row_start(index: usize, row_height: NonZeroU32) -> u64 {
    (index as u64).saturating_mul(row_height.get() as u64)
}
