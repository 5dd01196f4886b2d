//! Materializer notifications

use crate::commands::Cmd;
use crate::model::{ScanMode, ViewerModel};
use crate::table::Redraw;

/// Handle a redraw signal from the materializer
///
/// Only the completion of a drained cycle ends a full scan; a cycle that
/// finished before `ToEnd` was seen reports `drained: false` and is just a
/// repaint. A dead materializer ends the viewer.
pub fn update_table(model: &mut ViewerModel, signal: Redraw) -> Option<Cmd> {
    match signal {
        Redraw::Progress => {}
        Redraw::FillComplete { materialized, .. } => {
            model.sync_table(materialized, 0, signal.is_drained());
            if signal.is_drained() && model.is_waiting() {
                model.scan = ScanMode::Normal;
                model.jump_to_last_row();
                tracing::info!(rows = model.materialized, "read to end");
            }
        }
        Redraw::Failed => {
            model.scan = ScanMode::Normal;
            model.stream_closed = true;
            model.running = false;
            return Some(Cmd::Quit);
        }
    }
    Some(Cmd::Redraw)
}
