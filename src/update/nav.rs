//! Navigation message handlers

use crate::commands::Cmd;
use crate::messages::NavMsg;
use crate::model::{ScanMode, ViewerModel};
use crate::table::Demand;

/// Handle navigation messages (selection, scrolling, jumps)
pub fn update_nav(model: &mut ViewerModel, msg: NavMsg) -> Option<Cmd> {
    if model.is_waiting() {
        tracing::trace!(?msg, "ignored while reading to end");
        return None;
    }

    match msg {
        NavMsg::MoveDown => model.move_selection(1),
        NavMsg::MoveUp => model.move_selection(-1),
        NavMsg::PageDown => model.page_down(),
        NavMsg::PageUp => model.page_up(),
        NavMsg::JumpStart => model.jump_to_start(),
        NavMsg::JumpEnd => return jump_to_end(model),
        NavMsg::ScrollLeft => model.scroll_columns(-1),
        NavMsg::ScrollRight => model.scroll_columns(1),
    }
    Some(Cmd::Redraw)
}

/// Every row is already here: jump. Otherwise ask for the rest and wait.
fn jump_to_end(model: &mut ViewerModel) -> Option<Cmd> {
    if model.stream_closed {
        model.jump_to_last_row();
        return Some(Cmd::Redraw);
    }

    tracing::info!(rows = model.materialized, "reading to end of input");
    model.scan = ScanMode::Waiting;
    Some(Cmd::batch(vec![
        Cmd::PublishDemand(Demand::ToEnd),
        Cmd::Redraw,
    ]))
}
