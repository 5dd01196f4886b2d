//! Adapter from crossterm events to keystrokes and messages

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use super::keymap::Keymap;
use super::types::Keystroke;
use crate::messages::{AppMsg, Msg};

/// Convert a crossterm key event to a keystroke
///
/// Returns None for releases, which some terminals report.
pub fn keystroke_from_crossterm(event: &KeyEvent) -> Option<Keystroke> {
    match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            Some(Keystroke::new(event.code, event.modifiers))
        }
        KeyEventKind::Release => None,
    }
}

/// Translate a terminal event into a message, if it means anything to us
pub fn msg_from_event(keymap: &Keymap, event: &Event) -> Option<Msg> {
    match event {
        Event::Key(key) => {
            let keystroke = keystroke_from_crossterm(key)?;
            let command = keymap.lookup(&keystroke);
            if command.is_none() {
                tracing::trace!(?keystroke, "unbound key");
            }
            command.map(|c| c.to_msg())
        }
        Event::Resize(width, height) => Some(Msg::App(AppMsg::Resize(*width, *height))),
        _ => None,
    }
}
