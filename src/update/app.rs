//! App message handlers (quit, interrupt, resize)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{ScanMode, ViewerModel};

/// Handle app messages
pub fn update_app(model: &mut ViewerModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::Quit if model.is_waiting() => None,

        AppMsg::Quit => quit(model),

        AppMsg::Interrupt if model.is_waiting() => {
            // Keep every row read so far and the current position
            model.scan = ScanMode::Normal;
            model.stream_closed = true;
            Some(Cmd::batch(vec![Cmd::CancelScan, Cmd::Redraw]))
        }

        AppMsg::Interrupt => quit(model),
    }
}

fn quit(model: &mut ViewerModel) -> Option<Cmd> {
    model.running = false;
    Some(Cmd::Quit)
}
