//! Table view pagination
//!
//! Pure pagination state for the data-table panel: page bounds, clamped
//! navigation, page-size changes and the display strings the table chrome
//! shows. Rendering is the host's concern; this module only answers which
//! rows are visible and what the controls should say.

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::types::{CellValue, Record, TabularDataset};

/// Pagination state for a table over the session's dataset
#[derive(Clone, Debug, PartialEq)]
pub struct TablePager {
    /// Current page (0-indexed)
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Total number of rows
    pub total_rows: usize,
}

impl TablePager {
    pub fn new(total_rows: usize) -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_rows,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.total_rows == 0 {
            1
        } else {
            self.total_rows.div_ceil(self.page_size)
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages().saturating_sub(1)
    }

    pub fn go_first(&mut self) {
        self.page = 0;
    }

    pub fn go_prev(&mut self) {
        if self.can_go_prev() {
            self.page -= 1;
        }
    }

    pub fn go_next(&mut self) {
        if self.can_go_next() {
            self.page += 1;
        }
    }

    pub fn go_last(&mut self) {
        self.page = self.total_pages().saturating_sub(1);
    }

    /// Change rows per page; must be one of [`PAGE_SIZE_OPTIONS`]
    pub fn set_page_size(&mut self, size: usize) {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return;
        }
        self.page_size = size;
        // Reset to first page when changing page size
        self.page = 0;
    }

    /// Adopt a new row count after the dataset changed, clamping the
    /// current page back into range
    pub fn sync_total(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        let last = self.total_pages().saturating_sub(1);
        if self.page > last {
            self.page = last;
        }
    }

    /// Get the range of rows to display for the current page
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.total_rows);
        start..end
    }

    /// The slice of dataset rows on the current page
    pub fn page_rows<'a>(&self, dataset: &'a TabularDataset) -> &'a [Record] {
        let range = self.visible_range();
        let rows = dataset.rows();
        let start = range.start.min(rows.len());
        let end = range.end.min(rows.len());
        &rows[start..end]
    }

    /// Whether pagination controls should be shown at all
    pub fn controls_visible(&self) -> bool {
        self.total_rows > DEFAULT_PAGE_SIZE
    }

    /// Entry summary, e.g. "Showing 1 to 10 of 42 entries"
    pub fn summary(&self) -> String {
        let range = self.visible_range();
        let from = if self.total_rows == 0 { 0 } else { range.start + 1 };
        format!(
            "Showing {} to {} of {} entries",
            from, range.end, self.total_rows
        )
    }

    /// Position label, e.g. "Page 1 of 5"
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages())
    }
}

/// Render a cell for a table body; absent cells show as a dash
pub fn cell_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Absent => "-".to_string(),
        other => other.display(),
    }
}
