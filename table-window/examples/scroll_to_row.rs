// Example: programmatic scroll-to-row with each alignment.
use table_window::{Align, ScrollState, ViewportState, Window};

fn main() {
    let total_items = 50_000;
    let viewport = ViewportState::new(32, 480, 3).expect("valid viewport");
    let mut scroll = ScrollState::default();

    for (index, align) in [
        (12_345, Align::Start),
        (12_345, Align::Center),
        (12_345, Align::End),
        (12_350, Align::Auto),
        (49_999, Align::Start),
    ] {
        scroll.offset = viewport.scroll_offset_for_row(total_items, scroll, index, align);
        let window = Window::compute(total_items, &viewport, scroll);
        println!(
            "row {index} {align:?}: offset={} rows={}..={}",
            scroll.offset, window.start_index, window.end_index
        );
    }
}
