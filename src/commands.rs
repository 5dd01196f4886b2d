//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::table::Demand;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint the table
    Redraw,
    /// Ask the materializer for at least this many rows
    PublishDemand(Demand),
    /// Close the input, abandoning a running scan
    CancelScan,
    /// Request application exit
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Combine an optional command with another one
    pub fn and(cmd: Option<Cmd>, next: Cmd) -> Cmd {
        match cmd {
            None | Some(Cmd::None) => next,
            Some(Cmd::Batch(mut cmds)) => {
                cmds.push(next);
                Cmd::Batch(cmds)
            }
            Some(cmd) => Cmd::Batch(vec![cmd, next]),
        }
    }

    /// Flatten nested batches into execution order
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
