//! Terminal rendering
//!
//! The view only reads: the model for geometry and selection, the grid for
//! cell contents. Everything is drawn into a ratatui buffer; ratatui diffs
//! it against the previous frame.

pub mod layout;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use ratatui::Frame;

use crate::model::{StatusBar, ViewerModel, STATUS_BAR_LINES};
use crate::table::{Alignment, Cell, ColorClass, TableGrid};

use layout::{align_text, column_layout, visible_rows, ColumnLayout};

/// Paint one frame
pub fn render(frame: &mut Frame<'_>, model: &ViewerModel, grid: &TableGrid) {
    let [table_area, status_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_LINES),
    ])
    .areas(frame.area());

    grid.with_rows(|rows| frame.render_widget(GridView::new(model, rows), table_area));
    frame.render_widget(StatusLine::new(&model.status_bar), status_area);
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Top,
    Middle,
    Bottom,
}

impl Rule {
    /// Left edge, junction, right edge
    fn glyphs(self) -> (char, char, char) {
        match self {
            Rule::Top => ('┌', '┬', '┐'),
            Rule::Middle => ('├', '┼', '┤'),
            Rule::Bottom => ('└', '┴', '┘'),
        }
    }
}

/// The table itself
pub struct GridView<'a> {
    model: &'a ViewerModel,
    rows: &'a [Vec<Cell>],
}

impl<'a> GridView<'a> {
    pub fn new(model: &'a ViewerModel, rows: &'a [Vec<Cell>]) -> Self {
        Self { model, rows }
    }

    fn cell_style(cell: Option<&Cell>, selected: bool) -> Style {
        let mut style = Style::default();
        if cell.is_some_and(|c| c.style.color == ColorClass::Highlight) {
            style = style.fg(Color::Yellow);
        }
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    fn draw_row(
        &self,
        buf: &mut Buffer,
        area: Rect,
        y: u16,
        row: usize,
        columns: &[ColumnLayout],
        selected: bool,
    ) {
        let separator = if self.model.borders { "│" } else { " " };
        let mut x = area.x;
        if self.model.borders {
            put(buf, area, x, y, separator, Style::default());
            x += 1;
        }

        let cells = self.rows.get(row).map(Vec::as_slice).unwrap_or_default();
        for column in columns {
            let cell = cells.get(column.col);
            let (text, align) = match cell {
                Some(cell) => (cell.text.as_str(), cell.style.align),
                None => ("", Alignment::Left),
            };
            let content = align_text(text, column.width as usize, align);
            put(buf, area, x, y, &content, Self::cell_style(cell, selected));
            x = x.saturating_add(column.width);
            put(buf, area, x, y, separator, Style::default());
            x = x.saturating_add(1);
        }
    }

    fn draw_rule(&self, buf: &mut Buffer, area: Rect, y: u16, columns: &[ColumnLayout], rule: Rule) {
        let (left, junction, right) = rule.glyphs();
        let mut line = String::new();
        line.push(left);
        for (i, column) in columns.iter().enumerate() {
            line.extend(std::iter::repeat('─').take(column.width as usize));
            line.push(if i + 1 == columns.len() { right } else { junction });
        }
        put(buf, area, area.x, y, &line, Style::default());
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let visible = visible_rows(self.model);
        if visible.is_empty() {
            return;
        }
        let columns = column_layout(self.model, self.rows, &visible, area.width);
        let selected = self.model.selected_row();
        let bordered = self.model.borders;

        let mut y = area.y;
        if bordered {
            self.draw_rule(buf, area, y, &columns, Rule::Top);
            y += 1;
        }

        for (i, &row) in visible.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            self.draw_row(buf, area, y, row, &columns, selected == Some(row));
            y += 1;

            if bordered && y < area.bottom() {
                let rule = if i + 1 == visible.len() {
                    Rule::Bottom
                } else {
                    Rule::Middle
                };
                self.draw_rule(buf, area, y, &columns, rule);
                y += 1;
            }
        }
    }
}

/// Status bar under the grid
pub struct StatusLine<'a> {
    status: &'a StatusBar,
}

impl<'a> StatusLine<'a> {
    pub fn new(status: &'a StatusBar) -> Self {
        Self { status }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = Style::default().add_modifier(Modifier::REVERSED);
        buf.set_style(area, style);
        put(buf, area, area.x, area.y, &self.status.left, style);

        let right_width = self.status.right.chars().count() as u16;
        let left_width = self.status.left.chars().count() as u16;
        if right_width + left_width < area.width {
            let x = area.right() - right_width;
            put(buf, area, x, area.y, &self.status.right, style);
        }
    }
}

/// `set_stringn` clipped to `area`; positions outside it are skipped
fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    if x >= area.right() || y >= area.bottom() {
        return;
    }
    let max = (area.right() - x) as usize;
    buf.set_stringn(x, y, text, max, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{classify, SessionOptions};

    fn rows(lines: &[&[&str]]) -> Vec<Vec<Cell>> {
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

    fn draw(model: &ViewerModel, cells: &[Vec<Cell>], width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        GridView::new(model, cells).render(area, &mut buf);
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    fn model(borders: bool, materialized: usize, cols: usize, size: (u16, u16)) -> ViewerModel {
        let mut model = ViewerModel::new(&SessionOptions::default(), borders, 1, size);
        model.sync_table(materialized, cols, false);
        model
    }

    #[test]
    fn test_bordered_grid() {
        let cells = rows(&[&["id", "name"], &["1", "ann"], &["22", "bo"]]);
        let m = model(true, 3, 2, (12, 8));
        let lines = draw(&m, &cells, 12, 7);
        // Natural widths 2 and 4; 12 - 1 - 3 - 5 = 3 spare shared 1:2
        assert_eq!(lines[0], "┌───┬──────┐");
        assert_eq!(lines[1], "│id │ name │");
        assert_eq!(lines[2], "├───┼──────┤");
        assert_eq!(lines[3], "│  1│ann   │");
        assert_eq!(lines[5], "│ 22│bo    │");
        assert_eq!(lines[6], "└───┴──────┘");
    }

    #[test]
    fn test_plain_grid_and_ragged_rows() {
        let cells = rows(&[&["a", "b", "c"], &["x"]]);
        let m = model(false, 2, 3, (80, 4));
        let lines = draw(&m, &cells, 80, 3);
        // Header cells are centered, body text is left-aligned
        assert!(lines[0].trim_start().starts_with('a'));
        assert!(lines[1].starts_with('x'));
        assert!(lines[2].trim().is_empty());
    }

    #[test]
    fn test_selected_row_is_reversed() {
        let cells = rows(&[&["h"], &["r1"], &["r2"]]);
        let m = model(false, 3, 1, (10, 4));
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        GridView::new(&m, &cells).render(area, &mut buf);
        assert!(buf[(0, 1)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(0, 2)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buf[(0, 0)].fg, Color::Yellow);
    }

    #[test]
    fn test_status_line_right_aligned() {
        let status = StatusBar {
            left: " row 1/2".to_string(),
            right: "more ".to_string(),
        };
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        StatusLine::new(&status).render(area, &mut buf);
        let line: String = (0..20).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(line, " row 1/2       more ");
    }
}
