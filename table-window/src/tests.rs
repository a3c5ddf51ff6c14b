use crate::*;

use core::num::NonZeroU32;
use std::string::ToString;
use std::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn height(h: u32) -> NonZeroU32 {
    NonZeroU32::new(h).unwrap()
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    id: u64,
}

impl TableRow for Row {
    fn row_key(&self) -> RowKey {
        self.id
    }
}

fn rows(n: usize) -> Vec<Row> {
    (0..n).map(|i| Row { id: 10_000 + i as u64 }).collect()
}

fn viewport() -> ViewportState {
    ViewportState::new(40, 500, 5).unwrap()
}

fn expect_rows<'a, T>(body: TableBody<'a, T>) -> RowSlice<'a, T> {
    match body {
        TableBody::Rows(slice) => slice,
        TableBody::Placeholder => panic!("expected rows, got placeholder"),
    }
}

#[test]
fn first_page_window() {
    let w = compute_window(1000, height(40), 500, 0, 5);
    assert_eq!(w.start_index, 0);
    // ceil(500 / 40) = 13 visible rows, +5 overscan below.
    assert_eq!(w.end_index, 18);
    assert_eq!(w.total_height, 40_000);
    assert_eq!(w.leading_offset, 0);
    assert_eq!(w.row_count(), 19);
}

#[test]
fn mid_list_window() {
    let w = compute_window(1000, height(40), 500, 2000, 5);
    assert_eq!(w.start_index, 45);
    assert_eq!(w.end_index, 68);
    assert_eq!(w.total_height, 40_000);
    assert_eq!(w.leading_offset, 1800);

    let data = rows(1000);
    let slice = expect_rows(render_slice(&data, &w, height(40)).unwrap());
    assert_eq!(slice.first_index, 45);
    assert_eq!(slice.len(), 24);
    assert_eq!(slice.rows.first(), Some(&data[45]));
    assert_eq!(slice.rows.last(), Some(&data[68]));
    assert_eq!(slice.leading_height(), 1800);
    assert_eq!(slice.trailing_height(), 40_000 - 1800 - 24 * 40);
}

#[test]
fn empty_dataset_renders_placeholder() {
    for (offset, overscan) in [(0u64, 0usize), (123, 5), (u64::MAX, 1000)] {
        let w = compute_window(0, height(40), 500, offset, overscan);
        assert_eq!(w, Window::EMPTY);
        assert!(w.is_empty());
        assert_eq!(w.row_count(), 0);
        assert!(w.indices().is_empty());

        let data: Vec<Row> = Vec::new();
        let body = render_slice(&data, &w, height(40)).unwrap();
        assert!(body.is_placeholder());
        assert!(body.rows().is_none());
    }
}

#[test]
fn short_dataset_clamps_end_and_has_no_trailing_spacer() {
    let w = compute_window(10, height(40), 500, 0, 5);
    assert_eq!(w.start_index, 0);
    assert_eq!(w.end_index, 9);
    assert_eq!(w.total_height, 400);

    let data = rows(10);
    let slice = expect_rows(render_slice(&data, &w, height(40)).unwrap());
    assert_eq!(slice.len(), 10);
    assert_eq!(slice.leading_spacer, None);
    assert_eq!(slice.trailing_spacer, None);
    assert_eq!(slice.trailing_height(), 0);
}

#[test]
fn scroll_offset_zero_starts_at_first_row_for_any_overscan() {
    for overscan in 0..64 {
        let w = compute_window(1000, height(40), 500, 0, overscan);
        assert_eq!(w.start_index, 0, "overscan={overscan}");
        assert_eq!(w.end_index, (13 + overscan).min(999), "overscan={overscan}");
    }
}

#[test]
fn overscan_below_is_kept_when_top_is_clamped() {
    // raw start = 2; the upward margin is clamped to row 0, the downward margin stays whole.
    let w = compute_window(1000, height(40), 500, 80, 5);
    assert_eq!(w.start_index, 0);
    assert_eq!(w.end_index, 2 + 13 + 5);
}

#[test]
fn overscan_above_is_kept_when_bottom_is_clamped() {
    let max = max_scroll_offset(1000, height(40), 500);
    assert_eq!(max, 39_500);
    let w = compute_window(1000, height(40), 500, max, 5);
    // raw start = 39500 / 40 = 987
    assert_eq!(w.start_index, 982);
    assert_eq!(w.end_index, 999);
}

#[test]
fn scroll_offset_past_the_end_is_clamped() {
    let at_max = compute_window(1000, height(40), 500, 39_500, 5);
    for offset in [39_501u64, 40_000, 1_000_000, u64::MAX] {
        assert_eq!(compute_window(1000, height(40), 500, offset, 5), at_max);
    }

    // The dataset shrank under a stale offset.
    let w = compute_window(3, height(40), 500, 2000, 2);
    assert_eq!((w.start_index, w.end_index), (0, 2));
}

#[test]
fn zero_viewport_height_materializes_overscan_only() {
    let w = compute_window(100, height(10), 0, 500, 2);
    assert_eq!(w.start_index, 48);
    assert_eq!(w.end_index, 52);

    // With no viewport the max offset is the full height; the start still stays in bounds.
    let w = compute_window(10, height(40), 0, 400, 5);
    assert_eq!(w.start_index, 4);
    assert_eq!(w.end_index, 9);
}

#[test]
fn partially_visible_bottom_row_is_counted() {
    let w = compute_window(100, height(40), 41, 0, 0);
    assert_eq!(w.end_index, 2);
    let w = compute_window(100, height(40), 40, 0, 0);
    assert_eq!(w.end_index, 1);
}

#[test]
fn window_helpers() {
    let w = compute_window(1000, height(40), 500, 2000, 5);
    assert_eq!(w.indices(), 45..69);
    assert!(w.contains(45));
    assert!(w.contains(68));
    assert!(!w.contains(44));
    assert!(!w.contains(69));
    assert!(!Window::EMPTY.contains(0));

    let w2 = Window::compute(1000, &viewport(), ScrollState::new(2000));
    assert_eq!(w, w2);
}

#[test]
fn hand_built_inverted_windows_are_empty() {
    let inverted = Window {
        start_index: 5,
        end_index: 2,
        total_height: 400,
        leading_offset: 200,
    };
    assert_eq!(inverted.row_count(), 0);
    assert_eq!(inverted.indices(), 0..0);
    assert!(!inverted.contains(3));

    let huge = Window {
        start_index: 3,
        end_index: usize::MAX,
        total_height: 400,
        leading_offset: 120,
    };
    assert_eq!(huge.indices(), 3..usize::MAX);
    assert_eq!(huge.row_count(), usize::MAX - 3);

    assert_eq!(Window::EMPTY.row_count(), 0);
    assert_eq!(compute_window(1000, height(40), 500, 2000, 5).row_count(), 24);
}

#[test]
fn randomized_window_invariants() {
    let mut rng = Lcg::new(0x5eed_0001);
    for _ in 0..2_000 {
        let total_items = rng.gen_range_usize(1, 5_000);
        let row_height = height(rng.gen_range_u32(1, 80));
        let viewport_height = rng.gen_range_u32(0, 2_000);
        let overscan = rng.gen_range_usize(0, 20);
        let total = total_height(total_items, row_height);
        let scroll_offset = rng.gen_range_u64(0, total + 1_000);

        let w = compute_window(
            total_items,
            row_height,
            viewport_height,
            scroll_offset,
            overscan,
        );
        assert!(w.start_index <= w.end_index, "{w:?}");
        assert!(w.end_index < total_items, "{w:?}");
        assert_eq!(w.total_height, total_items as u64 * row_height.get() as u64);
        assert_eq!(w.leading_offset, w.start_index as u64 * row_height.get() as u64);

        // Pure: same inputs, same output.
        assert_eq!(
            w,
            compute_window(
                total_items,
                row_height,
                viewport_height,
                scroll_offset,
                overscan
            )
        );

        // Every row touching the (clamped) viewport is materialized.
        let offset = clamp_scroll_offset(total_items, row_height, viewport_height, scroll_offset);
        let first_visible = (offset / row_height.get() as u64) as usize;
        assert!(w.contains(first_visible.min(total_items - 1)), "{w:?}");
        if viewport_height > 0 {
            let bottom = offset + viewport_height as u64 - 1;
            let last_visible = ((bottom / row_height.get() as u64) as usize).min(total_items - 1);
            assert!(w.contains(last_visible), "{w:?}");
        }
    }
}

#[test]
fn randomized_monotonic_in_scroll_offset() {
    let mut rng = Lcg::new(0x5eed_0002);
    for _ in 0..200 {
        let total_items = rng.gen_range_usize(1, 2_000);
        let row_height = height(rng.gen_range_u32(1, 60));
        let viewport_height = rng.gen_range_u32(0, 1_000);
        let overscan = rng.gen_range_usize(0, 10);
        let total = total_height(total_items, row_height);

        let mut prev = compute_window(total_items, row_height, viewport_height, 0, overscan);
        let mut offset = 0u64;
        while offset <= total + 200 {
            offset += rng.gen_range_u64(1, 97);
            let w = compute_window(total_items, row_height, viewport_height, offset, overscan);
            assert!(w.start_index >= prev.start_index, "{prev:?} -> {w:?}");
            assert!(w.end_index >= prev.end_index, "{prev:?} -> {w:?}");
            prev = w;
        }
    }
}

#[test]
fn randomized_slices_fill_total_height() {
    let mut rng = Lcg::new(0x5eed_0003);
    let data = rows(3_000);
    for _ in 0..1_000 {
        let total_items = rng.gen_range_usize(1, data.len());
        let row_height = height(rng.gen_range_u32(1, 50));
        let viewport_height = rng.gen_range_u32(1, 1_500);
        let overscan = rng.gen_range_usize(0, 12);
        let scroll_offset = rng.gen_range_u64(0, total_height(total_items, row_height) + 500);

        let w = compute_window(
            total_items,
            row_height,
            viewport_height,
            scroll_offset,
            overscan,
        );
        let slice = expect_rows(render_slice(&data[..total_items], &w, row_height).unwrap());

        assert_eq!(slice.len(), w.row_count());
        let rows_height = slice.len() as u64 * row_height.get() as u64;
        assert_eq!(
            slice.leading_height() + rows_height + slice.trailing_height(),
            w.total_height
        );
        assert_eq!(slice.leading_spacer.is_some(), w.leading_offset > 0);
        for (index, row) in slice.iter() {
            assert_eq!(row, &data[index]);
        }
    }
}

#[test]
fn keyed_iteration_follows_dataset_order() {
    let data = rows(100);
    let w = compute_window(100, height(10), 50, 300, 1);
    let slice = expect_rows(render_slice(&data, &w, height(10)).unwrap());

    let mut seen = Vec::new();
    slice.for_each_keyed(|key, index, row| {
        assert_eq!(row.id, key);
        seen.push((key, index));
    });
    assert_eq!(seen.first(), Some(&(10_029, 29)));
    assert_eq!(seen.last(), Some(&(10_036, 36)));
    assert_eq!(seen.len(), slice.iter().len());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "window height mismatch")]
fn stale_window_asserts_in_debug() {
    let data = rows(10);
    let w = compute_window(20, height(40), 500, 0, 5);
    let _ = render_slice(&data, &w, height(40));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "negative trailing spacer")]
fn inconsistent_leading_offset_asserts_in_debug() {
    let data = rows(10);
    let mut w = compute_window(10, height(40), 80, 0, 0);
    w.leading_offset = 390;
    let _ = render_slice(&data, &w, height(40));
}

#[cfg(not(debug_assertions))]
#[test]
fn mismatched_windows_are_errors_in_release() {
    let data = rows(10);
    let w = compute_window(20, height(40), 500, 0, 5);
    assert_eq!(
        render_slice(&data, &w, height(40)),
        Err(SliceError::HeightMismatch {
            expected: 400,
            actual: 800
        })
    );

    let w = Window {
        start_index: 5,
        end_index: 12,
        total_height: 400,
        leading_offset: 200,
    };
    assert_eq!(
        render_slice(&data, &w, height(40)),
        Err(SliceError::IndexOutOfBounds {
            start_index: 5,
            end_index: 12,
            len: 10
        })
    );

    let mut w = compute_window(10, height(40), 80, 0, 0);
    w.leading_offset = 390;
    assert!(matches!(
        render_slice(&data, &w, height(40)),
        Err(SliceError::SpacerUnderflow { .. })
    ));
}

#[test]
fn viewport_state_validates_configuration() {
    assert_eq!(ViewportState::new(0, 500, 5), Err(ConfigError::ZeroRowHeight));
    assert_eq!(
        ViewportState::new(40, 0, 5),
        Err(ConfigError::ZeroViewportHeight)
    );

    let v = ViewportState::default();
    assert_eq!(v.row_height().get(), DEFAULT_ROW_HEIGHT);
    assert_eq!(v.viewport_height(), DEFAULT_VIEWPORT_HEIGHT);
    assert_eq!(v.overscan(), DEFAULT_OVERSCAN);
    assert_eq!(v, viewport());

    let v = v.with_overscan(0).with_viewport_height(300).unwrap();
    assert_eq!(v.overscan(), 0);
    assert_eq!(v.viewport_height(), 300);
    assert_eq!(v.with_row_height(0), Err(ConfigError::ZeroRowHeight));
    assert_eq!(
        v.with_viewport_height(0),
        Err(ConfigError::ZeroViewportHeight)
    );
}

#[test]
fn config_error_messages() {
    assert_eq!(
        ConfigError::ZeroRowHeight.to_string(),
        "row height must be greater than zero"
    );
    assert_eq!(
        SliceError::IndexOutOfBounds {
            start_index: 1,
            end_index: 4,
            len: 3
        }
        .to_string(),
        "window range 1..=4 is out of bounds for 3 rows"
    );
}

#[test]
fn scroll_offset_for_row_alignments() {
    let v = viewport();
    let top = ScrollState::default();

    assert_eq!(v.scroll_offset_for_row(1000, top, 50, Align::Start), 2000);
    assert_eq!(v.scroll_offset_for_row(1000, top, 50, Align::End), 2040 - 500);
    assert_eq!(
        v.scroll_offset_for_row(1000, top, 50, Align::Center),
        2000 + 20 - 250
    );

    // Already fully visible: keep the current offset.
    let cur = ScrollState::new(1900);
    assert_eq!(v.scroll_offset_for_row(1000, cur, 50, Align::Auto), 1900);
    // Above the viewport: align to start; below: align to end.
    assert_eq!(v.scroll_offset_for_row(1000, cur, 40, Align::Auto), 1600);
    assert_eq!(
        v.scroll_offset_for_row(1000, cur, 70, Align::Auto),
        2840 - 500
    );

    // Clamped to the last row and to the max scroll offset.
    assert_eq!(
        v.scroll_offset_for_row(1000, top, 5_000, Align::Start),
        39_500
    );
    assert_eq!(v.scroll_offset_for_row(10, top, 9, Align::Start), 0);
    assert_eq!(v.scroll_offset_for_row(0, top, 9, Align::End), 0);
}

#[test]
fn spacers_are_never_zero_height() {
    assert_eq!(Spacer::new(0), None);
    assert_eq!(Spacer::new(7).map(|s| s.height()), Some(7));
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_viewport_state_is_validated() {
    let zero_row = serde_json::from_str::<ViewportState>(
        r#"{"row_height":0,"viewport_height":500,"overscan":5}"#,
    );
    let err = zero_row.unwrap_err().to_string();
    assert!(err.contains("row height must be greater than zero"), "{err}");

    let zero_viewport = serde_json::from_str::<ViewportState>(
        r#"{"row_height":40,"viewport_height":0,"overscan":5}"#,
    );
    assert!(zero_viewport.is_err());

    let json = serde_json::to_string(&ViewportState::default()).unwrap();
    assert_eq!(
        json,
        r#"{"row_height":40,"viewport_height":500,"overscan":5}"#
    );
    let back: ViewportState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ViewportState::default());
}
