//! Line scanner
//!
//! Pulls one line at a time from the input and splits it on the delimiter.
//! There is no quoting or escaping; a field is whatever sits between two
//! delimiters.

use std::io::BufRead;
use std::sync::Arc;

use super::stream::InputGate;

/// Default column delimiter
pub const DEFAULT_DELIMITER: &str = "\t";

/// One scanned line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedRow {
    /// Zero-based line index, assigned in input order
    pub index: usize,
    pub fields: Vec<String>,
}

/// Reads delimited lines from a buffered reader
///
/// Once `next_row` has returned `None` it keeps returning `None`, and the
/// reader has been dropped.
pub struct Scanner<R> {
    reader: Option<R>,
    delimiter: String,
    gate: Arc<InputGate>,
    next_index: usize,
    line: Vec<u8>,
}

impl<R: BufRead> Scanner<R> {
    /// Create a scanner that also stops when `gate` is closed
    pub fn new(reader: R, delimiter: impl Into<String>, gate: Arc<InputGate>) -> Self {
        Self {
            reader: Some(reader),
            delimiter: delimiter.into(),
            gate,
            next_index: 0,
            line: Vec::new(),
        }
    }

    /// Create a scanner with its own gate
    pub fn from_reader(reader: R, delimiter: impl Into<String>) -> Self {
        Self::new(reader, delimiter, Arc::new(InputGate::new()))
    }

    /// Number of rows produced so far
    pub fn rows_scanned(&self) -> usize {
        self.next_index
    }

    /// Whether the stream has been exhausted (or cancelled)
    pub fn is_exhausted(&self) -> bool {
        self.reader.is_none()
    }

    /// Read and split the next line
    pub fn next_row(&mut self) -> Option<ScannedRow> {
        if self.gate.is_closed() {
            self.release();
            return None;
        }
        let reader = self.reader.as_mut()?;

        self.line.clear();
        match reader.read_until(b'\n', &mut self.line) {
            Ok(0) => {
                tracing::debug!(rows = self.next_index, "input exhausted");
                self.release();
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(rows = self.next_index, "read failed, treating as end of input: {}", e);
                self.release();
                return None;
            }
        }

        // A line that arrived after cancellation is discarded
        if self.gate.is_closed() {
            self.release();
            return None;
        }

        let text = String::from_utf8_lossy(trim_line_ending(&self.line));
        let fields = split_fields(&text, &self.delimiter);
        let row = ScannedRow {
            index: self.next_index,
            fields,
        };
        self.next_index += 1;
        Some(row)
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            self.gate.close();
            tracing::debug!(rows = self.next_index, "input released");
        }
    }
}

impl<R: BufRead> Iterator for Scanner<R> {
    type Item = ScannedRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row()
    }
}

/// Split a line into fields; an empty line yields one empty field
pub fn split_fields(line: &str, delimiter: &str) -> Vec<String> {
    line.split(delimiter).map(str::to_string).collect()
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
