//! Table viewport calculations
//!
//! Tracks which part of the scrollable region is visible. Fixed header rows
//! and columns are always drawn and are not part of these coordinates.

/// Viewport over the scrollable rows and columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableViewport {
    /// First visible scrollable row; also the scroll offset
    pub top_row: usize,
    /// First visible scrollable column
    pub left_col: usize,
    /// Number of scrollable rows that fit on screen
    pub visible_rows: usize,
}

impl TableViewport {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            top_row: 0,
            left_col: 0,
            visible_rows,
        }
    }

    /// Scroll so that `row` is visible, keeping the offset within `total_rows`
    pub fn ensure_visible(&mut self, row: usize, total_rows: usize) {
        if row < self.top_row {
            self.top_row = row;
        } else if self.visible_rows > 0 && row >= self.top_row + self.visible_rows {
            self.top_row = row + 1 - self.visible_rows;
        }

        let max_top = total_rows.saturating_sub(self.visible_rows);
        self.top_row = self.top_row.min(max_top);
    }

    /// Shift the column window, staying within `total_cols`
    pub fn scroll_horizontal(&mut self, delta: isize, total_cols: usize) {
        let max_left = total_cols.saturating_sub(1);
        self.left_col = self.left_col.saturating_add_signed(delta).min(max_left);
    }
}
