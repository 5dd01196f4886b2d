//! Demand protocol
//!
//! The viewer asks for "at least N rows" after every event. The
//! materializer treats those requests as a high-water mark: asking for fewer
//! rows later never shrinks the target.

use crossbeam_channel::Sender;

/// Requested minimum number of materialized rows
///
/// `ToEnd` orders above every `Rows(n)`, so folding with `max` does the right
/// thing for the "read everything" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Demand {
    Rows(usize),
    ToEnd,
}

impl Default for Demand {
    fn default() -> Self {
        Demand::Rows(0)
    }
}

impl Demand {
    /// Fold a newly observed demand into this high-water mark
    pub fn fold(self, other: Demand) -> Demand {
        self.max(other)
    }

    /// Whether `rows` materialized rows fall short of this demand
    pub fn exceeds(self, rows: usize) -> bool {
        match self {
            Demand::Rows(n) => rows < n,
            Demand::ToEnd => true,
        }
    }
}

/// Rows needed to cover a viewport
///
/// A bordered grid spends two terminal lines per row, hence the halving.
pub fn viewport_target(offset: usize, visible_height: usize, bordered: bool) -> usize {
    offset + rows_on_screen(visible_height, bordered)
}

/// Logical rows that fit in `visible_height` terminal lines
pub fn rows_on_screen(visible_height: usize, bordered: bool) -> usize {
    if bordered {
        visible_height / 2
    } else {
        visible_height
    }
}

/// Viewport position and size as seen by the demand controller
pub trait ViewGeometry {
    /// Number of scrolled-past rows
    fn offset(&self) -> usize;
    /// Height of the grid area in terminal lines
    fn visible_height(&self) -> usize;
    /// Whether rows are separated by border lines
    fn bordered(&self) -> bool;
}

/// Turns the current viewport into a demand
///
/// Asks for the visible rows, one more so the selection can always step past
/// the last materialized row, and `read_ahead_pages` extra screens.
#[derive(Debug, Clone, Copy)]
pub struct DemandController {
    pub read_ahead_pages: usize,
}

impl Default for DemandController {
    fn default() -> Self {
        Self {
            read_ahead_pages: 1,
        }
    }
}

impl DemandController {
    pub fn new(read_ahead_pages: usize) -> Self {
        Self { read_ahead_pages }
    }

    pub fn target(&self, view: &impl ViewGeometry) -> Demand {
        let screen = rows_on_screen(view.visible_height(), view.bordered());
        let rows = viewport_target(view.offset(), view.visible_height(), view.bordered());
        let read_ahead = self.read_ahead_pages.saturating_mul(screen);
        Demand::Rows(rows.saturating_add(1).saturating_add(read_ahead))
    }
}

/// Sending half of the demand channel
///
/// Only values that raise the publisher's own high-water mark are forwarded,
/// so the viewer can republish after every event without flooding the
/// materializer. Dropping the publisher shuts the materializer down.
#[derive(Debug)]
pub struct DemandPublisher {
    tx: Sender<Demand>,
    high_water: Option<Demand>,
}

impl DemandPublisher {
    pub(crate) fn new(tx: Sender<Demand>) -> Self {
        Self {
            tx,
            high_water: None,
        }
    }

    /// Publish a demand. Returns true if it was forwarded.
    pub fn publish(&mut self, demand: Demand) -> bool {
        if self.high_water.is_some_and(|hw| demand <= hw) {
            return false;
        }
        if self.tx.send(demand).is_err() {
            tracing::debug!(?demand, "materializer gone, demand dropped");
            return false;
        }
        tracing::trace!(?demand, "demand published");
        self.high_water = Some(demand);
        true
    }

    /// Highest demand forwarded so far
    pub fn high_water(&self) -> Option<Demand> {
        self.high_water
    }
}
