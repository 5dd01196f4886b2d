//! Runtime - terminal integration
//!
//! - `terminal` - raw mode / alternate screen guard
//! - `input` - blocking terminal reader feeding a channel
//! - `app` - the event loop tying model, view and session together

pub mod app;
pub mod input;
pub mod terminal;

pub use app::App;
pub use terminal::{TerminalGuard, Tui};
