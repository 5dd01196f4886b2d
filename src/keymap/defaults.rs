//! Default keybindings

use crossterm::event::KeyCode;

use super::command::Command;
use super::keymap::{Keybinding, Keymap};
use super::types::Keystroke;

pub fn default_bindings() -> Vec<Keybinding> {
    use Command::*;

    let bind = Keybinding::new;
    vec![
        bind(Keystroke::char('q'), Quit),
        bind(Keystroke::ctrl('c'), Interrupt),
        // Rows
        bind(Keystroke::ctrl('n'), RowDown),
        bind(Keystroke::plain(KeyCode::Down), RowDown),
        bind(Keystroke::char('j'), RowDown),
        bind(Keystroke::ctrl('p'), RowUp),
        bind(Keystroke::plain(KeyCode::Up), RowUp),
        bind(Keystroke::char('k'), RowUp),
        // Pages
        bind(Keystroke::ctrl('v'), PageDown),
        bind(Keystroke::plain(KeyCode::PageDown), PageDown),
        bind(Keystroke::char(' '), PageDown),
        bind(Keystroke::alt('v'), PageUp),
        bind(Keystroke::plain(KeyCode::PageUp), PageUp),
        // Ends
        bind(Keystroke::alt('<'), JumpStart),
        bind(Keystroke::plain(KeyCode::Home), JumpStart),
        bind(Keystroke::char('g'), JumpStart),
        bind(Keystroke::alt('>'), JumpEnd),
        bind(Keystroke::plain(KeyCode::End), JumpEnd),
        bind(Keystroke::char('G'), JumpEnd),
        // Columns
        bind(Keystroke::plain(KeyCode::Left), ColumnLeft),
        bind(Keystroke::char('h'), ColumnLeft),
        bind(Keystroke::plain(KeyCode::Right), ColumnRight),
        bind(Keystroke::char('l'), ColumnRight),
    ]
}

impl Keymap {
    pub fn with_defaults() -> Self {
        Self::with_bindings(default_bindings())
    }
}
