//! Keystroke type

use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press with the modifiers that matter for lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: KeyModifiers,
}

impl Keystroke {
    /// Create a keystroke, normalizing modifiers
    ///
    /// Shift is dropped for characters: `G` and `>` already carry it, and
    /// terminals disagree on whether to report it.
    pub fn new(key: KeyCode, mods: KeyModifiers) -> Self {
        let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        let mut mods = mods & relevant;
        if matches!(key, KeyCode::Char(_)) {
            mods.remove(KeyModifiers::SHIFT);
        }
        Self { key, mods }
    }

    pub fn plain(key: KeyCode) -> Self {
        Self::new(key, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn alt(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    pub fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }
}
