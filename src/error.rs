//! Error types for the viewer

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors surfaced before or while the display is active
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("cannot open {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("column delimiter must not be empty")]
    EmptyDelimiter,

    #[error("failed to start input workers")]
    Spawn(#[source] io::Error),

    #[error("row worker failed: {0}")]
    Worker(String),

    #[error("terminal error")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
