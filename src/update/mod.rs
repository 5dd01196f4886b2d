//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. After every
//! message the viewport demand is re-derived and handed to the runtime; the
//! publisher drops values that do not raise its high-water mark, so this is
//! cheap to do unconditionally.

mod app;
mod nav;
mod table;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{sync_status_bar, ViewerModel};

pub use app::update_app;
pub use nav::update_nav;
pub use table::update_table;

/// Main update function - dispatches to sub-handlers
#[inline]
pub fn update(model: &mut ViewerModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut ViewerModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Nav(m) => nav::update_nav(model, m),
        Msg::App(m) => app::update_app(model, m),
        Msg::Table(m) => table::update_table(model, m),
    };

    sync_status_bar(model);

    if !model.running {
        return result;
    }
    Some(Cmd::and(
        result,
        Cmd::PublishDemand(model.viewport_demand()),
    ))
}

/// Traced update wrapper (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut ViewerModel, msg: Msg) -> Option<Cmd> {
    use tracing::{span, trace, Level};

    let _span = span!(Level::DEBUG, "update", ?msg).entered();
    let before = (model.selected, model.viewport.top_row, model.scan);

    let result = update_inner(model, msg);

    let after = (model.selected, model.viewport.top_row, model.scan);
    if before != after {
        trace!(target: "viewport", ?before, ?after, "state changed");
    }
    result
}
