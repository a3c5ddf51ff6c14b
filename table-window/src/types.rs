use core::num::NonZeroU64;

/// Where a row should land in the viewport for programmatic scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Keep the current offset if the row is fully visible, otherwise scroll the least distance.
    Auto,
}

/// Unmaterialized space above or below the visible slice.
///
/// A spacer always has a non-zero height; zero-height spacers are never constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacer {
    height: NonZeroU64,
}

impl Spacer {
    /// Returns `None` for a zero height.
    pub fn new(height: u64) -> Option<Self> {
        NonZeroU64::new(height).map(|height| Self { height })
    }

    pub fn height(&self) -> u64 {
        self.height.get()
    }
}
