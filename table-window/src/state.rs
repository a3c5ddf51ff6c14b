use core::num::NonZeroU32;

use crate::window::{clamp_scroll_offset, row_start};
use crate::{Align, ConfigError};

/// Default height of a single row.
pub const DEFAULT_ROW_HEIGHT: u32 = 40;
/// Default height of the scroll container.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 500;
/// Default number of extra rows materialized on each side of the visible range.
pub const DEFAULT_OVERSCAN: usize = 5;

const DEFAULT_ROW_HEIGHT_NZ: NonZeroU32 = match NonZeroU32::new(DEFAULT_ROW_HEIGHT) {
    Some(h) => h,
    None => panic!("DEFAULT_ROW_HEIGHT must be non-zero"),
};

/// Viewport configuration: row height, container height and overscan.
///
/// Constructors validate the configuration, so a `ViewportState` always has a non-zero row
/// height and a non-zero viewport height.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; deserialization runs
/// the same validation as [`ViewportState::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawViewportState", into = "RawViewportState")
)]
pub struct ViewportState {
    row_height: NonZeroU32,
    viewport_height: u32,
    overscan: usize,
}

impl ViewportState {
    pub fn new(
        row_height: u32,
        viewport_height: u32,
        overscan: usize,
    ) -> Result<Self, ConfigError> {
        let Some(row_height) = NonZeroU32::new(row_height) else {
            vwarn!("ViewportState: rejected zero row height");
            return Err(ConfigError::ZeroRowHeight);
        };
        if viewport_height == 0 {
            vwarn!("ViewportState: rejected zero viewport height");
            return Err(ConfigError::ZeroViewportHeight);
        }
        Ok(Self {
            row_height,
            viewport_height,
            overscan,
        })
    }

    pub fn row_height(&self) -> NonZeroU32 {
        self.row_height
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn with_row_height(self, row_height: u32) -> Result<Self, ConfigError> {
        Self::new(row_height, self.viewport_height, self.overscan)
    }

    pub fn with_viewport_height(self, viewport_height: u32) -> Result<Self, ConfigError> {
        Self::new(self.row_height.get(), viewport_height, self.overscan)
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Computes the scroll offset that brings row `index` into view.
    ///
    /// `index` is clamped to the last row and the result to the maximum scroll offset. For an
    /// empty dataset this is always `0`.
    pub fn scroll_offset_for_row(
        &self,
        total_items: usize,
        scroll: ScrollState,
        index: usize,
        align: Align,
    ) -> u64 {
        if total_items == 0 {
            return 0;
        }
        let index = index.min(total_items - 1);
        let row = self.row_height.get() as u64;
        let view = self.viewport_height as u64;
        let start = row_start(index, self.row_height);
        let end = start.saturating_add(row);

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => start.saturating_add(row / 2).saturating_sub(view / 2),
            Align::Auto => {
                let cur = clamp_scroll_offset(
                    total_items,
                    self.row_height,
                    self.viewport_height,
                    scroll.offset,
                );
                if start >= cur && end <= cur.saturating_add(view) {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        clamp_scroll_offset(total_items, self.row_height, self.viewport_height, target)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT_NZ,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawViewportState {
    row_height: u32,
    viewport_height: u32,
    overscan: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawViewportState> for ViewportState {
    type Error = ConfigError;

    fn try_from(raw: RawViewportState) -> Result<Self, Self::Error> {
        Self::new(raw.row_height, raw.viewport_height, raw.overscan)
    }
}

#[cfg(feature = "serde")]
impl From<ViewportState> for RawViewportState {
    fn from(state: ViewportState) -> Self {
        Self {
            row_height: state.row_height.get(),
            viewport_height: state.viewport_height,
            overscan: state.overscan,
        }
    }
}

/// The last scroll offset sampled from the scroll container.
///
/// The offset is stored as reported; the windowing engine clamps it when computing a window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
}

impl ScrollState {
    pub fn new(offset: u64) -> Self {
        Self { offset }
    }
}
