use alloc::vec::Vec;

use table_window::{
    Align, ConfigError, ScrollState, SliceError, TableBody, TableRow, ViewportState, Window,
    render_slice,
};

use crate::{Column, HeaderCell, TableFrame, header_cells};

/// A framework-neutral table controller: owns the dataset, the columns, the viewport
/// configuration and the last sampled scroll offset.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` whenever the scroll container reports a new offset
/// - `on_viewport_height` / `set_row_height` / `set_overscan` when the configuration changes
/// - `frame()` (or `body()`) to get what to draw
///
/// Nothing derived is cached: the [`Window`] is recomputed from the current state on every
/// query, which is O(1) in the dataset size.
#[derive(Clone, Debug)]
pub struct TableController<T> {
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    viewport: ViewportState,
    scroll: ScrollState,
}

impl<T: TableRow> TableController<T> {
    pub fn new(rows: Vec<T>, columns: Vec<Column<T>>, viewport: ViewportState) -> Self {
        vdebug!(
            rows = rows.len(),
            columns = columns.len(),
            "TableController::new"
        );
        Self {
            rows,
            columns,
            viewport,
            scroll: ScrollState::default(),
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll.offset
    }

    /// Replaces the dataset. The scroll offset is kept; the engine clamps it if the dataset shrank.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        vdebug!(
            prev = self.rows.len(),
            next = rows.len(),
            "TableController::set_rows"
        );
        self.rows = rows;
    }

    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        self.columns = columns;
    }

    /// Call this when the scroll container reports a scroll offset change.
    pub fn on_scroll(&mut self, scroll_offset: u64) {
        vtrace!(scroll_offset, "TableController::on_scroll");
        self.scroll.offset = scroll_offset;
    }

    /// Call this when the scroll container is resized.
    ///
    /// On error the previous configuration stays in place.
    pub fn on_viewport_height(&mut self, viewport_height: u32) -> Result<(), ConfigError> {
        self.viewport = self.viewport.with_viewport_height(viewport_height)?;
        Ok(())
    }

    /// On error the previous configuration stays in place.
    pub fn set_row_height(&mut self, row_height: u32) -> Result<(), ConfigError> {
        self.viewport = self.viewport.with_row_height(row_height)?;
        Ok(())
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.viewport = self.viewport.with_overscan(overscan);
    }

    pub fn set_viewport(&mut self, viewport: ViewportState) {
        vdebug!(
            row_height = viewport.row_height().get(),
            viewport_height = viewport.viewport_height(),
            overscan = viewport.overscan(),
            "TableController::set_viewport"
        );
        self.viewport = viewport;
    }

    pub fn window(&self) -> Window {
        Window::compute(self.rows.len(), &self.viewport, self.scroll)
    }

    /// Slices the dataset down to the current window.
    pub fn body(&self) -> Result<TableBody<'_, T>, SliceError> {
        render_slice(&self.rows, &self.window(), self.viewport.row_height())
    }

    pub fn header(&self) -> Vec<HeaderCell> {
        header_cells(&self.columns)
    }

    /// Builds the full frame: header, spacers, formatted rows and the total row count.
    pub fn frame(&self) -> Result<TableFrame, SliceError> {
        let body = self.body()?;
        Ok(TableFrame::build(body, &self.columns, self.rows.len()))
    }

    /// Computes a scroll-to-row target without applying it.
    pub fn scroll_to_row_offset(&self, index: usize, align: Align) -> u64 {
        self.viewport
            .scroll_offset_for_row(self.rows.len(), self.scroll, index, align)
    }

    /// Scrolls so that row `index` is in view.
    ///
    /// Returns the applied (clamped) offset; the adapter should push it to the real scroll
    /// container.
    pub fn scroll_to_row(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_row_offset(index, align);
        self.on_scroll(offset);
        offset
    }
}
