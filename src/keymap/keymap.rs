//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::command::Command;
use super::types::Keystroke;

/// A mapping from one keystroke to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }
}

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    lookup: HashMap<Keystroke, Command>,
}

impl Keymap {
    /// Create a keymap with the given bindings; later bindings win
    pub fn with_bindings(bindings: impl IntoIterator<Item = Keybinding>) -> Self {
        let mut keymap = Self::default();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        if let Some(old) = self.lookup.insert(binding.keystroke, binding.command) {
            tracing::debug!(?binding, ?old, "keybinding replaced");
        }
    }

    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup.get(keystroke).copied()
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
