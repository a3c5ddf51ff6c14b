// Example: recompute the window and slice on every scroll event.
use table_window::{ScrollState, TableBody, ViewportState, Window, render_slice};

fn main() {
    let rows: Vec<u64> = (0..1_000).collect();
    let viewport = ViewportState::default();

    for offset in [0u64, 2_000, 39_500, 1_000_000] {
        let window = Window::compute(rows.len(), &viewport, ScrollState::new(offset));
        println!("scroll_offset={offset} window={window:?}");

        match render_slice(&rows, &window, viewport.row_height()) {
            Ok(TableBody::Rows(slice)) => println!(
                "  leading={} rows={}..={} trailing={}",
                slice.leading_height(),
                slice.first_index,
                slice.first_index + slice.len() - 1,
                slice.trailing_height()
            ),
            Ok(TableBody::Placeholder) => println!("  no data available"),
            Err(err) => println!("  window mismatch: {err}"),
        }
    }
}
