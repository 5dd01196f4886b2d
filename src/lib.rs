//! tabless - a terminal viewer for delimiter-separated text
//!
//! Rows are read lazily: only as far as the screen (plus read-ahead) needs.
//! The event loop follows the Elm Architecture: `Msg` → `update` → `Cmd`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod table;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use error::ViewerError;
pub use messages::Msg;
pub use model::ViewerModel;
