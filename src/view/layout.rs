//! Grid layout
//!
//! Works out which rows and columns fit on screen and how wide each column
//! is. Widths come from the cells currently visible, so columns settle as
//! the user scrolls rather than depending on rows never seen.

use crate::model::ViewerModel;
use crate::table::{Alignment, Cell};

/// One column as it will be painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Column index in the table
    pub col: usize,
    /// Content width in characters, separators excluded
    pub width: u16,
}

/// Table rows to paint, top to bottom: fixed rows first, then the
/// scrollable window
pub fn visible_rows(model: &ViewerModel) -> Vec<usize> {
    let capacity = model.screen_rows();
    let fixed = model.fixed_rows.min(model.materialized).min(capacity);

    let mut rows: Vec<usize> = (0..fixed).collect();
    let first = model.fixed_rows + model.viewport.top_row;
    rows.extend((first..model.materialized).take(capacity - fixed));
    rows
}

/// Columns to paint and their widths for an area `width` characters wide
///
/// Fixed columns come first, then scrollable ones starting at the viewport's
/// left column, for as long as they fit. If everything fits, leftover width
/// is shared out by expansion weight.
pub fn column_layout(
    model: &ViewerModel,
    rows: &[Vec<Cell>],
    visible: &[usize],
    width: u16,
) -> Vec<ColumnLayout> {
    let fixed = model.fixed_cols.min(model.column_count);
    let candidates =
        (0..fixed).chain((model.fixed_cols + model.viewport.left_col)..model.column_count);

    // Left edge (border or nothing) plus one separator after each column
    let mut used: u16 = u16::from(model.borders);
    let mut columns = Vec::new();
    let mut weights = Vec::new();
    let mut truncated = false;

    for col in candidates {
        let (natural, weight) = measure_column(rows, visible, col);
        let needed = natural.saturating_add(1);
        if used.saturating_add(needed) > width {
            // Squeeze the first column into whatever is there
            if columns.is_empty() && width > used + 1 {
                columns.push(ColumnLayout {
                    col,
                    width: width - used - 1,
                });
                weights.push(0);
            }
            truncated = true;
            break;
        }
        used += needed;
        columns.push(ColumnLayout {
            col,
            width: natural,
        });
        weights.push(weight);
    }

    if !truncated {
        expand(&mut columns, &weights, width.saturating_sub(used));
    }
    columns
}

/// Natural width and expansion weight of one column over the visible rows
fn measure_column(rows: &[Vec<Cell>], visible: &[usize], col: usize) -> (u16, u16) {
    let mut natural = 1u16;
    let mut weight = 0u16;
    for cell in visible
        .iter()
        .filter_map(|&r| rows.get(r).and_then(|row| row.get(col)))
    {
        let chars = u16::try_from(cell.text.chars().count()).unwrap_or(u16::MAX);
        natural = natural.max(chars.min(cell.style.max_width));
        weight = weight.max(cell.style.expansion);
    }
    (natural, weight)
}

/// Distribute `spare` characters proportionally to `weights`
fn expand(columns: &mut [ColumnLayout], weights: &[u16], spare: u16) {
    let total: u32 = weights.iter().map(|&w| u32::from(w)).sum();
    if total == 0 || spare == 0 {
        return;
    }

    let mut given = 0u16;
    for (column, &weight) in columns.iter_mut().zip(weights) {
        let share = (u32::from(spare) * u32::from(weight) / total) as u16;
        column.width += share;
        given += share;
    }

    // Rounding leftovers go to the heaviest column
    if let Some((idx, _)) = weights.iter().enumerate().max_by_key(|&(_, w)| *w) {
        columns[idx].width += spare - given;
    }
}

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Fit `text` into exactly `width` characters
pub fn align_text(text: &str, width: usize, align: Alignment) -> String {
    let text = truncate_text(text, width);
    let pad = width - text.chars().count();
    let (left, right) = match align {
        Alignment::Left => (0, pad),
        Alignment::Right => (pad, 0),
        Alignment::Center => (pad / 2, pad - pad / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{classify, SessionOptions};

    fn table(lines: &[&[&str]]) -> Vec<Vec<Cell>> {
        lines
            .iter()
            .enumerate()
            .map(|(row, fields)| {
                fields
                    .iter()
                    .enumerate()
                    .map(|(col, text)| Cell {
                        row,
                        col,
                        text: text.to_string(),
                        style: classify(row, col, text, 1, 0),
                    })
                    .collect()
            })
            .collect()
    }

    fn model(rows: usize, cols: usize, borders: bool, size: (u16, u16)) -> ViewerModel {
        let mut model = ViewerModel::new(&SessionOptions::default(), borders, 1, size);
        model.sync_table(rows, cols, false);
        model
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello w…");
        assert_eq!(truncate_text("hello", 1), "h");
        assert_eq!(truncate_text("hello", 0), "");
    }

    #[test]
    fn test_align_text() {
        assert_eq!(align_text("ab", 6, Alignment::Left), "ab    ");
        assert_eq!(align_text("ab", 6, Alignment::Right), "    ab");
        assert_eq!(align_text("ab", 5, Alignment::Center), " ab  ");
        assert_eq!(align_text("abcdefgh", 4, Alignment::Right), "abc…");
    }

    #[test]
    fn test_fixed_rows_stay_on_top() {
        let mut m = model(50, 1, false, (80, 11));
        m.viewport.top_row = 20;
        let rows = visible_rows(&m);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], 0);
        assert_eq!(rows[1], 21);
        assert_eq!(rows[9], 29);
    }

    #[test]
    fn test_visible_rows_stop_at_materialized() {
        let m = model(3, 1, true, (80, 25));
        assert_eq!(visible_rows(&m), vec![0, 1, 2]);
    }

    #[test]
    fn test_widths_capped_by_budget() {
        let rows = table(&[
            &["name", "value"],
            &["a rather long description", "12345678901234567890123"],
        ]);
        let m = model(2, 2, false, (30, 10));
        let columns = column_layout(&m, &rows, &[0, 1], 30);
        // Text capped at 10, number at 20: 10 + 1 + 20 + 1 > 30, so the
        // number column does not fit
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0], ColumnLayout { col: 0, width: 10 });
    }

    #[test]
    fn test_spare_width_goes_to_text_columns() {
        let rows = table(&[&["h1", "h2"], &["word", "42"]]);
        let m = model(2, 2, true, (40, 10));
        let columns = column_layout(&m, &rows, &[1], 40);
        // Border + (4 + 1) + (2 + 1) = 9 used; 31 spare split 2:1, the
        // rounding remainder going to the text column
        assert_eq!(columns[0].width, 4 + 21);
        assert_eq!(columns[1].width, 2 + 10);
    }

    #[test]
    fn test_horizontal_scroll_keeps_fixed_columns() {
        let rows = table(&[&["k", "a", "b", "c"]]);
        let mut m = model(1, 4, false, (80, 10));
        m.fixed_cols = 1;
        m.viewport.left_col = 2;
        let cols: Vec<usize> = column_layout(&m, &rows, &[0], 80)
            .iter()
            .map(|c| c.col)
            .collect();
        assert_eq!(cols, vec![0, 3]);
    }
}
