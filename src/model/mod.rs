//! Viewer model - the complete state of the table view
//!
//! Follows the Elm Architecture: only `update` mutates it, the view reads it.

pub mod status_bar;

pub use status_bar::{sync_status_bar, StatusBar};

use crate::table::{Demand, DemandController, SessionOptions, TableViewport, ViewGeometry};

/// Lines reserved below the grid for the status bar
pub const STATUS_BAR_LINES: u16 = 1;

/// Whether the event loop is waiting on a full scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Normal,
    /// Jump-to-end requested; only cancel and resize are handled
    Waiting,
}

/// The complete viewer model
#[derive(Debug, Clone)]
pub struct ViewerModel {
    /// Window over the scrollable rows and columns
    pub viewport: TableViewport,
    /// Selected row, counted from the first scrollable row
    pub selected: usize,
    pub scan: ScanMode,
    pub demand: DemandController,
    pub borders: bool,
    pub fixed_rows: usize,
    pub fixed_cols: usize,
    /// Terminal size (columns, lines)
    pub screen: (u16, u16),
    /// Rows available in the grid
    pub materialized: usize,
    /// Widest row seen so far
    pub column_count: usize,
    /// The input has been fully read or cancelled
    pub stream_closed: bool,
    pub status_bar: StatusBar,
    pub running: bool,
}

impl ViewerModel {
    pub fn new(
        options: &SessionOptions,
        borders: bool,
        read_ahead_pages: usize,
        screen: (u16, u16),
    ) -> Self {
        let mut model = Self {
            viewport: TableViewport::default(),
            selected: 0,
            scan: ScanMode::Normal,
            demand: DemandController::new(read_ahead_pages),
            borders,
            fixed_rows: options.fixed_rows,
            fixed_cols: options.fixed_cols,
            screen,
            materialized: 0,
            column_count: 0,
            stream_closed: false,
            status_bar: StatusBar::default(),
            running: true,
        };
        model.resize(screen.0, screen.1);
        model
    }

    pub fn is_waiting(&self) -> bool {
        self.scan == ScanMode::Waiting
    }

    /// Terminal lines available to the grid
    pub fn grid_height(&self) -> u16 {
        self.screen.1.saturating_sub(STATUS_BAR_LINES)
    }

    /// Logical rows, fixed ones included, that fit in the grid
    ///
    /// With borders the top edge takes a line and every row takes two.
    pub fn screen_rows(&self) -> usize {
        let height = self.grid_height() as usize;
        if self.borders {
            height.saturating_sub(1) / 2
        } else {
            height
        }
    }

    /// Scrollable rows that fit below the fixed header rows
    pub fn page_rows(&self) -> usize {
        let screen = self.screen_rows();
        screen.saturating_sub(self.fixed_rows.min(screen)).max(1)
    }

    /// Materialized rows below the fixed header rows
    pub fn scrollable_rows(&self) -> usize {
        self.materialized.saturating_sub(self.fixed_rows)
    }

    pub fn scrollable_cols(&self) -> usize {
        self.column_count.saturating_sub(self.fixed_cols)
    }

    /// Absolute index of the selected row, if any row is selectable
    pub fn selected_row(&self) -> Option<usize> {
        (self.selected < self.scrollable_rows()).then_some(self.fixed_rows + self.selected)
    }

    /// Demand matching the current viewport
    pub fn viewport_demand(&self) -> Demand {
        self.demand.target(self)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = (width, height);
        self.viewport.visible_rows = self.page_rows();
        self.viewport
            .ensure_visible(self.selected, self.scrollable_rows());
    }

    /// Take in what the materializer has produced so far
    ///
    /// Row counts only grow, so the selection never needs clamping here.
    pub fn sync_table(&mut self, materialized: usize, column_count: usize, stream_closed: bool) {
        self.materialized = self.materialized.max(materialized);
        self.column_count = self.column_count.max(column_count);
        self.stream_closed |= stream_closed;
    }

    /// Move the selection, clamped to the materialized rows
    pub fn move_selection(&mut self, delta: isize) {
        let total = self.scrollable_rows();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(total - 1);
        self.viewport.ensure_visible(self.selected, total);
    }

    pub fn page_down(&mut self) {
        self.move_selection(self.page_rows() as isize);
    }

    pub fn page_up(&mut self) {
        self.move_selection(-(self.page_rows() as isize));
    }

    pub fn jump_to_start(&mut self) {
        self.selected = 0;
        self.viewport.top_row = 0;
    }

    pub fn jump_to_last_row(&mut self) {
        let total = self.scrollable_rows();
        self.selected = total.saturating_sub(1);
        self.viewport.ensure_visible(self.selected, total);
    }

    pub fn scroll_columns(&mut self, delta: isize) {
        let total = self.scrollable_cols();
        self.viewport.scroll_horizontal(delta, total);
    }
}

impl ViewGeometry for ViewerModel {
    fn offset(&self) -> usize {
        self.viewport.top_row
    }

    fn visible_height(&self) -> usize {
        self.grid_height() as usize
    }

    fn bordered(&self) -> bool {
        self.borders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(borders: bool, height: u16) -> ViewerModel {
        ViewerModel::new(&SessionOptions::default(), borders, 1, (80, height))
    }

    #[test]
    fn test_screen_rows_account_for_borders() {
        // 25 lines: 24 for the grid, 1 top edge, 23 / 2 rows
        assert_eq!(model(true, 25).screen_rows(), 11);
        assert_eq!(model(true, 25).page_rows(), 10);
        assert_eq!(model(false, 25).screen_rows(), 24);
        assert_eq!(model(false, 25).page_rows(), 23);
    }

    #[test]
    fn test_selection_clamped_to_materialized() {
        let mut m = model(false, 11);
        m.sync_table(6, 3, false);
        m.move_selection(100);
        assert_eq!(m.selected, 4);
        assert_eq!(m.selected_row(), Some(5));
        m.move_selection(-100);
        assert_eq!(m.selected, 0);
    }

    #[test]
    fn test_scrolling_past_screen_raises_demand() {
        let mut m = model(false, 11);
        let DemandController { read_ahead_pages } = m.demand;
        assert_eq!(read_ahead_pages, 1);

        let before = m.viewport_demand();
        m.sync_table(m.screen_rows() + 1 + m.screen_rows(), 1, false);
        m.page_down();
        m.page_down();
        assert!(m.viewport.top_row > 0);
        assert!(m.viewport_demand() > before);
    }

    #[test]
    fn test_demand_always_one_past_last_reachable_row() {
        let mut m = model(true, 21);
        // Pretend exactly the demanded rows arrived, then hold End
        for _ in 0..5 {
            let Demand::Rows(n) = m.viewport_demand() else {
                panic!("viewport demand is never ToEnd");
            };
            m.sync_table(n, 1, false);
            m.jump_to_last_row();
            assert!(m.viewport_demand() > Demand::Rows(n));
        }
    }

    #[test]
    fn test_no_rows_no_selection() {
        let m = model(true, 25);
        assert_eq!(m.selected_row(), None);
    }
}
