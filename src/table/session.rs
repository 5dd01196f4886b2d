//! Streaming session
//!
//! A `Session` holds everything the scanner, the materializer and the event
//! loop share: the stream state, the materialized row count, the input gate,
//! the redraw signal and the sink cells are written to. Nothing lives in
//! globals; every worker gets an `Arc<Session>`.
//!
//! ```text
//! input ──▶ scanner thread ──rows (rendezvous)──▶ materializer thread ──▶ ViewSink
//!                                                    ▲            │
//!                                    DemandPublisher ┘            └▶ RedrawSignal ──▶ event loop
//! ```

use std::any::Any;
use std::io::{self, BufRead};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use parking_lot::Mutex;

use super::demand::{Demand, DemandPublisher};
use crate::error::{Result, ViewerError};
use super::grid::{Cell, ViewSink};
use super::materializer::Materializer;
use super::scanner::{ScannedRow, Scanner, DEFAULT_DELIMITER};
use super::signal::{Redraw, RedrawSignal};
use super::stream::{CloseReason, InputGate, StreamState};

/// Per-session settings the workers need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub delimiter: String,
    pub fixed_rows: usize,
    pub fixed_cols: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            fixed_rows: 1,
            fixed_cols: 0,
        }
    }
}

#[derive(Debug, Default)]
struct StreamStatus {
    state: StreamState,
    reason: Option<CloseReason>,
}

/// Shared state of one viewing session
pub struct Session {
    options: SessionOptions,
    sink: Arc<dyn ViewSink>,
    stream: Mutex<StreamStatus>,
    materialized: AtomicUsize,
    filled_once: AtomicBool,
    gate: Arc<InputGate>,
    redraw: RedrawSignal,
    /// Wakes a materializer parked on a silent input after `cancel`
    wake: Sender<()>,
    /// Panic message of a dead materializer
    failure: Mutex<Option<String>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("options", &self.options)
            .field("stream", &self.stream_state())
            .field("materialized", &self.materialized_rows())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start the scanner and materializer workers for `input`
    ///
    /// Nothing is materialized until the first demand is published through
    /// the returned handle.
    pub fn spawn<R>(
        input: R,
        options: SessionOptions,
        sink: Arc<dyn ViewSink>,
    ) -> io::Result<SessionHandle>
    where
        R: BufRead + Send + 'static,
    {
        let gate = Arc::new(InputGate::new());
        let scanner = Scanner::new(input, options.delimiter.clone(), gate.clone());
        let (wake_tx, wake_rx) = bounded(1);

        let session = Arc::new(Session {
            options,
            sink,
            stream: Mutex::new(StreamStatus::default()),
            materialized: AtomicUsize::new(0),
            filled_once: AtomicBool::new(false),
            gate,
            redraw: RedrawSignal::new(),
            wake: wake_tx,
            failure: Mutex::new(None),
        });

        let (row_tx, row_rx) = bounded(0);
        let (demand_tx, demand_rx) = unbounded();

        thread::Builder::new()
            .name("tabless-scanner".into())
            .spawn(move || scan_rows(scanner, row_tx))?;

        let materializer = Materializer::new(session.clone(), demand_rx, row_rx, wake_rx);
        let worker_session = session.clone();
        let worker = thread::Builder::new()
            .name("tabless-materializer".into())
            .spawn(move || {
                if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| materializer.run())) {
                    worker_session.fail(panic_message(payload.as_ref()));
                }
            })?;

        tracing::info!(options = ?session.options, "session started");

        Ok(SessionHandle {
            session,
            demand: DemandPublisher::new(demand_tx),
            materializer: Some(worker),
        })
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Rows written to the sink so far
    pub fn materialized_rows(&self) -> usize {
        self.materialized.load(Ordering::Acquire)
    }

    pub fn stream_state(&self) -> StreamState {
        self.stream.lock().state
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        self.stream.lock().reason
    }

    /// Whether at least one fill cycle has completed
    pub fn has_filled_once(&self) -> bool {
        self.filled_once.load(Ordering::Acquire)
    }

    /// Receiving end of the redraw signal
    pub fn redraws(&self) -> Receiver<Redraw> {
        self.redraw.receiver()
    }

    /// Close the input without waiting for it
    ///
    /// Rows already materialized stay; no further row is committed after
    /// this returns. Returns false if the stream was already closed.
    pub fn cancel(&self) -> bool {
        if !self.close(CloseReason::Cancelled) {
            return false;
        }
        self.gate.close();
        // Full means a wake-up is already pending
        let _ = self.wake.try_send(());
        tracing::info!(rows = self.materialized_rows(), "scan cancelled");
        true
    }

    /// Why the materializer died, if it did
    pub fn failure(&self) -> Option<String> {
        self.failure.lock().clone()
    }

    /// Record a materializer panic
    ///
    /// Closes the stream and the input like a cancel, then tells the event
    /// loop. Rows committed before the panic stay.
    fn fail(&self, message: String) {
        tracing::error!(rows = self.materialized_rows(), "materializer panicked: {}", message);
        *self.failure.lock() = Some(message);
        self.close(CloseReason::Failed);
        self.gate.close();
        self.redraw.notify_failed();
    }

    /// Transition the stream to closed. Returns true for the call that did it.
    pub(crate) fn close(&self, reason: CloseReason) -> bool {
        let mut stream = self.stream.lock();
        if stream.state.is_closed() {
            return false;
        }
        stream.state = StreamState::Closed;
        stream.reason = Some(reason);
        if reason == CloseReason::EndOfInput {
            tracing::info!(rows = self.materialized_rows(), "end of input");
        }
        true
    }

    /// Write one row's cells and advance the materialized count
    ///
    /// Runs under the stream lock so a concurrent `cancel` either happens
    /// before (the row is rejected) or after (the row counts).
    pub(crate) fn commit_row(&self, row: usize, cells: Vec<Cell>) -> bool {
        let stream = self.stream.lock();
        if stream.state.is_closed() {
            return false;
        }
        for cell in cells {
            self.sink.write_cell(cell);
        }
        self.materialized.store(row + 1, Ordering::Release);
        true
    }

    pub(crate) fn notify_progress(&self) {
        self.redraw.notify_progress();
    }

    pub(crate) fn finish_cycle(&self, materialized: usize, drained: bool) {
        self.filled_once.store(true, Ordering::Release);
        self.redraw.notify_complete(materialized, drained);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn scan_rows<R: BufRead>(mut scanner: Scanner<R>, rows: Sender<ScannedRow>) {
    while let Some(row) = scanner.next_row() {
        if rows.send(row).is_err() {
            // Materializer drained or shut down
            break;
        }
    }
    tracing::debug!(rows = scanner.rows_scanned(), "scanner finished");
}

/// Owner's handle on a running session
///
/// Dropping the handle (or calling `shutdown`) closes the demand channel,
/// which stops the materializer.
#[derive(Debug)]
pub struct SessionHandle {
    session: Arc<Session>,
    demand: DemandPublisher,
    materializer: Option<JoinHandle<()>>,
}

impl SessionHandle {
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Publish a demand; see [`DemandPublisher::publish`]
    pub fn publish(&mut self, demand: Demand) -> bool {
        self.demand.publish(demand)
    }

    /// Stop the materializer and wait for it
    ///
    /// Fails if the materializer died. The scanner thread is not joined: it
    /// may be parked in a read on an input that never produces another byte.
    pub fn shutdown(self) -> Result<()> {
        let SessionHandle {
            session,
            demand,
            mut materializer,
        } = self;
        drop(demand);
        if let Some(worker) = materializer.take() {
            if worker.join().is_err() {
                return Err(ViewerError::Worker("materializer thread aborted".to_string()));
            }
        }
        match session.failure() {
            Some(message) => Err(ViewerError::Worker(message)),
            None => Ok(()),
        }
    }
}
