//! Keyboard mapping
//!
//! ```text
//! crossterm::KeyEvent → Keystroke → Keymap::lookup() → Command → Msg
//! ```
//!
//! Bindings follow the readline/emacs conventions of `less`-style pagers,
//! plus the usual arrow and vi keys.

mod command;
mod crossterm_adapter;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use command::Command;
pub use crossterm_adapter::{keystroke_from_crossterm, msg_from_event};
pub use defaults::default_bindings;
pub use keymap::{Keybinding, Keymap};
pub use types::Keystroke;
