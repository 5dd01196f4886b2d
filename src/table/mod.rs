//! Lazy table pipeline
//!
//! Rows are read from the input only as far as the viewer has asked for:
//!
//! ```text
//! Session
//! ├── Scanner        (reads + splits one line at a time)
//! ├── Materializer   (classifies fields, writes cells on demand)
//! ├── TableGrid      (shared cells, one writer / one reader)
//! ├── DemandPublisher (viewer → materializer, high-water folded)
//! └── RedrawSignal   (materializer → viewer, coalescing)
//! ```

mod classify;
mod demand;
mod grid;
mod materializer;
mod scanner;
mod session;
mod signal;
mod stream;
mod viewport;

pub use classify::{
    classify, is_numeric, Alignment, CellRole, CellStyle, ColorClass, BASE_EXPANSION,
    DEFAULT_MAX_WIDTH, NUMERIC_MAX_WIDTH, TEXT_EXPANSION,
};
pub use demand::{
    rows_on_screen, viewport_target, Demand, DemandController, DemandPublisher, ViewGeometry,
};
pub use grid::{Cell, TableGrid, ViewSink};
pub use materializer::FillPhase;
pub use scanner::{split_fields, ScannedRow, Scanner, DEFAULT_DELIMITER};
pub use session::{Session, SessionHandle, SessionOptions};
pub use signal::{Redraw, RedrawSignal};
pub use stream::{CloseReason, InputGate, StreamState};
pub use viewport::TableViewport;
