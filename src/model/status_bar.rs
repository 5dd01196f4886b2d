//! Status bar model
//!
//! One line under the grid: position on the left, stream state on the right.

use super::{ScanMode, ViewerModel};

/// Text for both ends of the status bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    pub left: String,
    pub right: String,
}

/// Recompute the status bar from the rest of the model
pub fn sync_status_bar(model: &mut ViewerModel) {
    let total = model.scrollable_rows();
    let left = match model.selected_row() {
        Some(_) => format!(" row {}/{}", model.selected + 1, total),
        None => " no rows".to_string(),
    };

    let right = match (model.scan, model.stream_closed) {
        // The row count is only refreshed by events, so it is not shown here
        (ScanMode::Waiting, _) => "reading to end... (Ctrl-C to stop) ".to_string(),
        (ScanMode::Normal, true) => "end of input ".to_string(),
        (ScanMode::Normal, false) => "more ".to_string(),
    };

    model.status_bar = StatusBar { left, right };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SessionOptions;

    #[test]
    fn test_status_reflects_scan_state() {
        let mut model = ViewerModel::new(&SessionOptions::default(), true, 1, (80, 25));
        sync_status_bar(&mut model);
        assert_eq!(model.status_bar.left, " no rows");
        assert_eq!(model.status_bar.right, "more ");

        model.sync_table(4, 2, false);
        model.move_selection(1);
        model.scan = ScanMode::Waiting;
        sync_status_bar(&mut model);
        assert_eq!(model.status_bar.left, " row 2/3");
        assert_eq!(model.status_bar.right, "reading to end... (Ctrl-C to stop) ");

        model.scan = ScanMode::Normal;
        model.stream_closed = true;
        sync_status_bar(&mut model);
        assert_eq!(model.status_bar.right, "end of input ");
    }
}
