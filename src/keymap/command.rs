//! Commands that keys can be bound to

use crate::messages::{AppMsg, Msg, NavMsg};

/// Every action reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    RowDown,
    RowUp,
    PageDown,
    PageUp,
    JumpStart,
    JumpEnd,
    ColumnLeft,
    ColumnRight,
    Quit,
    Interrupt,
}

impl Command {
    /// Convert this command to the message it triggers
    pub fn to_msg(self) -> Msg {
        use Command::*;

        match self {
            RowDown => Msg::Nav(NavMsg::MoveDown),
            RowUp => Msg::Nav(NavMsg::MoveUp),
            PageDown => Msg::Nav(NavMsg::PageDown),
            PageUp => Msg::Nav(NavMsg::PageUp),
            JumpStart => Msg::Nav(NavMsg::JumpStart),
            JumpEnd => Msg::Nav(NavMsg::JumpEnd),
            ColumnLeft => Msg::Nav(NavMsg::ScrollLeft),
            ColumnRight => Msg::Nav(NavMsg::ScrollRight),
            Quit => Msg::App(AppMsg::Quit),
            Interrupt => Msg::App(AppMsg::Interrupt),
        }
    }
}
