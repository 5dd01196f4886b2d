//! Input stream lifecycle
//!
//! The stream is open until the scanner reaches end-of-input or the viewer
//! cancels a scan. Either way it closes exactly once.

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether more rows can still arrive from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamState {
    #[default]
    Open,
    Closed,
}

impl StreamState {
    pub fn is_closed(self) -> bool {
        self == StreamState::Closed
    }
}

/// Why the stream was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The scanner reached end-of-input
    EndOfInput,
    /// The viewer cancelled an in-flight scan
    Cancelled,
    /// The materializer panicked
    Failed,
}

/// Shared switch that tells the scanner to release its reader
///
/// Closing never blocks. A scanner stuck inside a read observes the gate as
/// soon as that read returns.
#[derive(Debug, Default)]
pub struct InputGate {
    closed: AtomicBool,
}

impl InputGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the gate. Returns true only for the call that performed the transition.
    pub fn close(&self) -> bool {
        !self.closed.swap(true, Ordering::AcqRel)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}
