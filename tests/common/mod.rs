//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::{self, BufRead, Cursor, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;

use tabless::messages::Msg;
use tabless::model::ViewerModel;
use tabless::table::{
    Cell, Redraw, Session, SessionHandle, SessionOptions, TableGrid, ViewSink,
};
use tabless::Cmd;

pub const TIMEOUT: Duration = Duration::from_secs(5);

/// Sink that remembers every write in order, alongside a real grid
#[derive(Default)]
pub struct RecordingSink {
    pub grid: TableGrid,
    writes: Mutex<Vec<(usize, usize)>>,
}

impl RecordingSink {
    pub fn writes(&self) -> Vec<(usize, usize)> {
        self.writes.lock().clone()
    }

    pub fn rows_written(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.writes().into_iter().map(|(r, _)| r).collect();
        rows.dedup();
        rows
    }
}

impl ViewSink for RecordingSink {
    fn write_cell(&self, cell: Cell) {
        self.writes.lock().push((cell.row, cell.col));
        self.grid.write_cell(cell);
    }
}

/// Sink that panics when asked to write a cell of `row`
pub struct PanickingSink {
    pub grid: TableGrid,
    pub row: usize,
}

impl ViewSink for PanickingSink {
    fn write_cell(&self, cell: Cell) {
        if cell.row == self.row {
            panic!("cannot store row {}", cell.row);
        }
        self.grid.write_cell(cell);
    }
}

/// In-memory input that records when the scanner lets go of it
pub struct TrackedReader {
    inner: Cursor<Vec<u8>>,
    released: Arc<AtomicBool>,
}

impl TrackedReader {
    pub fn new(data: impl Into<Vec<u8>>) -> (Self, Arc<AtomicBool>) {
        let released = Arc::new(AtomicBool::new(false));
        (
            Self {
                inner: Cursor::new(data.into()),
                released: released.clone(),
            },
            released,
        )
    }
}

impl Read for TrackedReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        self.inner.read(out)
    }
}

impl BufRead for TrackedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

impl Drop for TrackedReader {
    fn drop(&mut self) {
        self.released.store(true, Ordering::Release);
    }
}

/// Input that only produces what the test feeds it, blocking otherwise,
/// like a pipe from a slow producer
pub struct ChannelReader {
    rx: Receiver<Vec<u8>>,
    buf: Vec<u8>,
    pos: usize,
}

impl ChannelReader {
    pub fn new() -> (Sender<Vec<u8>>, Self) {
        let (tx, rx) = unbounded();
        (
            tx,
            Self {
                rx,
                buf: Vec::new(),
                pos: 0,
            },
        )
    }
}

impl Read for ChannelReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for ChannelReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.buf.len() {
            match self.rx.recv() {
                Ok(chunk) => {
                    self.buf = chunk;
                    self.pos = 0;
                }
                // Sender dropped: end of input
                Err(_) => return Ok(&[]),
            }
        }
        Ok(&self.buf[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.buf.len());
    }
}

/// `rows` lines of three tab-separated fields, with a header line first
pub fn tsv(rows: usize) -> String {
    let mut out = String::from("name\tcount\tnote\n");
    for i in 1..=rows {
        out.push_str(&format!("item{}\t{}\tline {}\n", i, i * 10, i));
    }
    out
}

pub fn spawn_recording<R>(input: R, options: SessionOptions) -> (Arc<RecordingSink>, SessionHandle)
where
    R: BufRead + Send + 'static,
{
    let sink = Arc::new(RecordingSink::default());
    let handle = Session::spawn(input, options, sink.clone()).expect("spawn session");
    (sink, handle)
}

/// Next end-of-cycle notification, skipping progress ones
pub fn wait_complete(session: &Session) -> (usize, bool) {
    let rx = session.redraws();
    let deadline = Instant::now() + TIMEOUT;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(Redraw::FillComplete {
                materialized,
                drained,
            }) => return (materialized, drained),
            Ok(Redraw::Progress) => continue,
            Ok(Redraw::Failed) => panic!("materializer failed"),
            Err(_) => panic!("no fill cycle completed within {:?}", TIMEOUT),
        }
    }
}

/// Poll until `cond` holds
pub fn wait_until(mut cond: impl FnMut() -> bool) {
    let deadline = Instant::now() + TIMEOUT;
    while !cond() {
        assert!(Instant::now() < deadline, "condition not met within {:?}", TIMEOUT);
        std::thread::sleep(Duration::from_millis(2));
    }
}

/// Create a viewer model over an 80x25 terminal with default options
pub fn test_model(borders: bool) -> ViewerModel {
    ViewerModel::new(&SessionOptions::default(), borders, 1, (80, 25))
}

/// Flatten the command an update returned
pub fn cmds(cmd: Option<Cmd>) -> Vec<Cmd> {
    cmd.map(Cmd::into_vec).unwrap_or_default()
}

pub fn msg(m: impl Into<Msg>) -> Msg {
    m.into()
}
