//! Shared display grid
//!
//! The materializer is the only writer, the painter the only reader. Cells
//! are appended in row-major order and never modified afterwards.

use parking_lot::RwLock;

use super::classify::CellStyle;

/// A field annotated for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub text: String,
    pub style: CellStyle,
}

/// Write capability the materializer needs from the display side
pub trait ViewSink: Send + Sync {
    /// Store a styled cell. Cells arrive in row order, columns in order
    /// within a row.
    fn write_cell(&self, cell: Cell);
}

#[derive(Debug, Default)]
struct GridInner {
    rows: Vec<Vec<Cell>>,
    column_count: usize,
}

/// Append-only grid of materialized cells
#[derive(Debug, Default)]
pub struct TableGrid {
    inner: RwLock<GridInner>,
}

impl TableGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows that have at least one cell (or were started)
    pub fn row_count(&self) -> usize {
        self.inner.read().rows.len()
    }

    /// Widest row seen so far
    pub fn column_count(&self) -> usize {
        self.inner.read().column_count
    }

    /// Clone of a single cell; absent fields of ragged rows are `None`
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.inner.read().rows.get(row)?.get(col).cloned()
    }

    /// Run `f` over the rows while holding the read lock
    pub fn with_rows<T>(&self, f: impl FnOnce(&[Vec<Cell>]) -> T) -> T {
        f(&self.inner.read().rows)
    }
}

impl ViewSink for TableGrid {
    fn write_cell(&self, cell: Cell) {
        let mut inner = self.inner.write();
        if cell.row == inner.rows.len() {
            inner.rows.push(Vec::new());
        }
        debug_assert_eq!(cell.row + 1, inner.rows.len(), "rows must be written in order");

        let col = cell.col;
        if let Some(row) = inner.rows.last_mut() {
            debug_assert_eq!(col, row.len(), "cells must be written once, in column order");
            row.push(cell);
        }
        inner.column_count = inner.column_count.max(col + 1);
    }
}
