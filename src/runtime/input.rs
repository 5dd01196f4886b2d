//! Terminal input forwarding
//!
//! `crossterm::event::read` blocks, so it runs on its own thread and the
//! event loop selects over its channel alongside the redraw signal.

use std::io;
use std::thread;

use crossbeam_channel::{unbounded, Receiver};
use crossterm::event::{self, Event};

/// Spawn the reader thread and return its event stream
///
/// The thread is never joined; it ends when the receiver is dropped and the
/// next event arrives, or with the process.
pub fn spawn_input_thread() -> io::Result<Receiver<Event>> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("tabless-input".into())
        .spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("terminal input failed: {}", e);
                    break;
                }
            }
        })?;
    Ok(rx)
}
