//! Row materializer
//!
//! Turns scanned rows into styled cells, but only as many as have been
//! demanded. Each fill cycle races two unbounded-latency inputs against each
//! other: new demand from the viewer and the next row from the scanner. A
//! demand increase therefore extends a fill already in progress, and the end
//! of input is noticed as soon as the scanner reports it.

use std::sync::Arc;

use crossbeam_channel::{select, Receiver};

use super::classify::classify;
use super::demand::Demand;
use super::grid::Cell;
use super::scanner::ScannedRow;
use super::session::Session;
use super::stream::CloseReason;

/// Where the materializer is in its fill cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPhase {
    /// Blocked until the next demand
    AwaitingDemand,
    /// Writing rows until the target is met
    Filling,
    /// The stream closed before the target was met
    Drained,
}

pub(crate) struct Materializer {
    session: Arc<Session>,
    demands: Receiver<Demand>,
    rows: Option<Receiver<ScannedRow>>,
    /// Signalled by `Session::cancel`
    wake: Receiver<()>,
    /// Next row index to write
    row: usize,
    target: Demand,
    phase: FillPhase,
    filled_once: bool,
}

impl Materializer {
    pub(crate) fn new(
        session: Arc<Session>,
        demands: Receiver<Demand>,
        rows: Receiver<ScannedRow>,
        wake: Receiver<()>,
    ) -> Self {
        Self {
            session,
            demands,
            rows: Some(rows),
            wake,
            row: 0,
            target: Demand::default(),
            phase: FillPhase::AwaitingDemand,
            filled_once: false,
        }
    }

    /// Serve fill cycles until the demand channel closes
    ///
    /// A cancel that arrives between cycles releases the input right away
    /// instead of waiting for the next demand.
    pub(crate) fn run(mut self) {
        let demands = self.demands.clone();
        let wake = self.wake.clone();
        loop {
            select! {
                recv(demands) -> msg => match msg {
                    Ok(demand) => {
                        self.target = self.target.fold(demand);
                        if !self.fill_cycle() {
                            break;
                        }
                    }
                    Err(_) => break,
                },
                recv(wake) -> _ => {
                    if self.session.stream_state().is_closed() && self.rows.is_some() {
                        self.drain();
                        self.set_phase(FillPhase::AwaitingDemand);
                    }
                }
            }
        }
        tracing::debug!(rows = self.row, "materializer stopped");
    }

    /// One fill cycle. Returns false once the viewer has gone away.
    fn fill_cycle(&mut self) -> bool {
        self.set_phase(FillPhase::Filling);
        let start = self.row;
        let mut viewer_alive = true;

        let drained = 'fill: loop {
            if !self.target.exceeds(self.row) {
                break 'fill false;
            }
            if self.session.stream_state().is_closed() {
                break 'fill true;
            }
            let Some(rows) = self.rows.clone() else {
                break 'fill true;
            };
            let demands = self.demands.clone();
            let wake = self.wake.clone();

            select! {
                recv(demands) -> msg => match msg {
                    Ok(demand) => self.target = self.target.fold(demand),
                    Err(_) => {
                        viewer_alive = false;
                        break 'fill false;
                    }
                },
                recv(rows) -> msg => match msg {
                    Ok(scanned) => {
                        if !self.materialize(scanned) {
                            break 'fill true;
                        }
                    }
                    Err(_) => break 'fill true,
                },
                // Closed state is re-checked at the top of the loop
                recv(wake) -> _ => {},
            }
        };

        if drained {
            self.drain();
        }
        let closed = self.session.stream_state().is_closed();
        tracing::debug!(
            from = start,
            to = self.row,
            target = ?self.target,
            drained = closed,
            "fill cycle complete"
        );

        self.set_phase(FillPhase::AwaitingDemand);
        self.filled_once = true;
        self.session.finish_cycle(self.row, closed);
        viewer_alive
    }

    /// Classify and commit one row. Returns false if the stream was closed
    /// underneath us, in which case the row is discarded.
    fn materialize(&mut self, scanned: ScannedRow) -> bool {
        debug_assert_eq!(scanned.index, self.row, "scanner and materializer disagree");
        let row = self.row;
        let options = self.session.options();
        let cells: Vec<Cell> = scanned
            .fields
            .into_iter()
            .enumerate()
            .map(|(col, text)| {
                let style = classify(row, col, &text, options.fixed_rows, options.fixed_cols);
                Cell {
                    row,
                    col,
                    text,
                    style,
                }
            })
            .collect();

        if !self.session.commit_row(row, cells) {
            return false;
        }
        self.row += 1;

        if !self.filled_once {
            self.session.notify_progress();
        }
        true
    }

    /// The stream is exhausted or cancelled: clamp the target to what we have
    fn drain(&mut self) {
        self.set_phase(FillPhase::Drained);
        self.session.close(CloseReason::EndOfInput);
        self.target = Demand::Rows(self.row);
        // Unblocks a scanner parked on the rendezvous so it drops the reader
        self.rows = None;
    }

    fn set_phase(&mut self, phase: FillPhase) {
        if self.phase != phase {
            tracing::trace!(from = ?self.phase, to = ?phase, row = self.row, "fill phase");
            self.phase = phase;
        }
    }
}
