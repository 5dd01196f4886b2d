//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::table::Redraw;

/// Navigation within the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMsg {
    /// Move the selection down one row
    MoveDown,
    /// Move the selection up one row
    MoveUp,
    PageDown,
    PageUp,
    /// First scrollable row
    JumpStart,
    /// Last row of the input; may need a full scan
    JumpEnd,
    /// Shift the column window left
    ScrollLeft,
    /// Shift the column window right
    ScrollRight,
}

/// Application-level messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// Quit the viewer
    Quit,
    /// Ctrl-C: cancels a running scan, otherwise quits
    Interrupt,
    /// Terminal resized (columns, lines)
    Resize(u16, u16),
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Navigation messages (selection, scrolling)
    Nav(NavMsg),
    /// App messages (quit, resize)
    App(AppMsg),
    /// Notification from the materializer
    Table(Redraw),
}

impl From<NavMsg> for Msg {
    fn from(msg: NavMsg) -> Self {
        Msg::Nav(msg)
    }
}

impl From<AppMsg> for Msg {
    fn from(msg: AppMsg) -> Self {
        Msg::App(msg)
    }
}

impl From<Redraw> for Msg {
    fn from(signal: Redraw) -> Self {
        Msg::Table(signal)
    }
}
