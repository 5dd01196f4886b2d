//! Cell classification
//!
//! Decides how a single field is presented: header cells are highlighted,
//! numbers are right-aligned with a wider budget, everything else is
//! left-aligned text that soaks up spare width.

/// Width budget (in characters) for header and text cells
pub const DEFAULT_MAX_WIDTH: u16 = 10;
/// Width budget for numeric cells; numbers tend to be longer
pub const NUMERIC_MAX_WIDTH: u16 = 20;
/// Expansion weight for header and numeric cells
pub const BASE_EXPANSION: u16 = 1;
/// Expansion weight for text cells
pub const TEXT_EXPANSION: u16 = 2;

/// Display role of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// Part of the fixed header rows or columns
    Fixed,
    /// Parses as a floating-point literal
    Numeric,
    /// Anything else
    Text,
}

/// Horizontal alignment within the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Color class; the view maps these to concrete terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorClass {
    #[default]
    Normal,
    Highlight,
}

/// Presentation attributes derived from a cell's position and content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub role: CellRole,
    pub align: Alignment,
    pub max_width: u16,
    pub expansion: u16,
    pub color: ColorClass,
}

impl CellStyle {
    fn fixed() -> Self {
        Self {
            role: CellRole::Fixed,
            align: Alignment::Center,
            max_width: DEFAULT_MAX_WIDTH,
            expansion: BASE_EXPANSION,
            color: ColorClass::Highlight,
        }
    }

    fn numeric() -> Self {
        Self {
            role: CellRole::Numeric,
            align: Alignment::Right,
            max_width: NUMERIC_MAX_WIDTH,
            expansion: BASE_EXPANSION,
            color: ColorClass::Normal,
        }
    }

    fn text() -> Self {
        Self {
            role: CellRole::Text,
            align: Alignment::Left,
            max_width: DEFAULT_MAX_WIDTH,
            expansion: TEXT_EXPANSION,
            color: ColorClass::Normal,
        }
    }
}

/// Classify a field by position and content
///
/// Header position wins over content: a number in a fixed row is still a
/// header cell.
pub fn classify(
    row: usize,
    col: usize,
    text: &str,
    fixed_rows: usize,
    fixed_cols: usize,
) -> CellStyle {
    if col < fixed_cols || row < fixed_rows {
        CellStyle::fixed()
    } else if is_numeric(text) {
        CellStyle::numeric()
    } else {
        CellStyle::text()
    }
}

/// Check if a string is a plain decimal or exponential number literal
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Rejects the empty string and the `inf`/`nan` spellings
/// that `f64::from_str` would otherwise let through.
pub fn is_numeric(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let literal_chars = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    literal_chars && s.parse::<f64>().is_ok()
}
