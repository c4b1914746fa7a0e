//! Box-drawn tables, panels and rules for terminal reports

use crate::ui::color::{Colors, colorize, emphasize};

/// Table structure for report rendering
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub alignment: Vec<TableAlignment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableAlignment {
    #[default]
    Left,
    Right,
}

impl Table {
    pub fn render(&self) -> String {
        render_table(self)
    }
}

/// Table builder for easier table creation
#[derive(Default)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.table.title = Some(title.into());
        self
    }

    /// Set table headers, left aligning every column
    pub fn headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.table.headers = headers.into_iter().map(Into::into).collect();
        self.table.alignment = vec![TableAlignment::Left; self.table.headers.len()];
        self
    }

    pub fn align(mut self, column: usize, alignment: TableAlignment) -> Self {
        if let Some(slot) = self.table.alignment.get_mut(column) {
            *slot = alignment;
        }
        self
    }

    pub fn row(mut self, row: Vec<String>) -> Self {
        self.table.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Vec<String>>) -> Self {
        self.table.rows.extend(rows);
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Fold line breaks and tabs so a cell stays on one line
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n', '\t'], " ")
}

fn border(col_widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, w) in col_widths.iter().enumerate() {
        line.push_str(&"─".repeat(w + 2));
        if i < col_widths.len() - 1 {
            line.push(mid);
        }
    }
    line.push(right);
    line.push('\n');
    line
}

/// Render a table with box drawing borders
pub fn render_table(table: &Table) -> String {
    if table.headers.is_empty() {
        return String::new();
    }

    let headers: Vec<String> = table.headers.iter().map(|h| single_line(h)).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| single_line(cell)).collect())
        .collect();

    let num_cols = headers.len();
    let mut col_widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate().take(num_cols) {
            col_widths[i] = col_widths[i].max(width(cell));
        }
    }

    let mut output = String::new();
    if let Some(ref title) = table.title {
        output.push_str(&emphasize(title, Colors::BRIGHT_BLUE));
        output.push('\n');
    }

    output.push_str(&border(&col_widths, '┌', '┬', '┐'));

    output.push('│');
    for (i, header) in headers.iter().enumerate() {
        output.push(' ');
        output.push_str(&colorize(header, Colors::BOLD));
        output.push_str(&" ".repeat(col_widths[i] - width(header)));
        output.push_str(" │");
    }
    output.push('\n');

    output.push_str(&border(&col_widths, '├', '┼', '┤'));

    for row in &rows {
        output.push('│');
        for (i, col_width) in col_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let padding = " ".repeat(col_width - width(cell));
            output.push(' ');
            match table.alignment.get(i).copied().unwrap_or_default() {
                TableAlignment::Left => {
                    output.push_str(cell);
                    output.push_str(&padding);
                }
                TableAlignment::Right => {
                    output.push_str(&padding);
                    output.push_str(cell);
                }
            }
            output.push_str(" │");
        }
        output.push('\n');
    }

    output.push_str(&border(&col_widths, '└', '┴', '┘'));
    output
}

/// Render text inside a rounded box
pub fn render_panel(text: &str, color: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let inner = lines.iter().map(|l| width(l)).max().unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!("╭{}╮\n", "─".repeat(inner + 2)));
    for line in lines {
        output.push_str(&format!(
            "│ {}{} │\n",
            line,
            " ".repeat(inner - width(line))
        ));
    }
    output.push_str(&format!("╰{}╯\n", "─".repeat(inner + 2)));
    colorize(&output, color)
}

/// Render a horizontal rule with a centered title
pub fn render_rule(title: &str, total_width: usize) -> String {
    let label = format!(" {title} ");
    let remaining = total_width.saturating_sub(width(&label));
    let left = remaining / 2;
    let right = remaining - left;
    format!("{}{}{}\n", "─".repeat(left), label, "─".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        TableBuilder::new()
            .title("Results")
            .headers(["No", "URL"])
            .align(0, TableAlignment::Right)
            .row(vec!["1".to_string(), "https://a.example/x".to_string()])
            .row(vec!["10".to_string(), "https://a.example/yy".to_string()])
            .build()
    }

    #[test]
    fn test_render_table_layout() {
        let rendered = render_table(&sample());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Results");
        assert_eq!(lines[1], "┌────┬──────────────────────┐");
        assert_eq!(lines[2], "│ No │ URL                  │");
        assert_eq!(lines[4], "│  1 │ https://a.example/x  │");
        assert_eq!(lines[5], "│ 10 │ https://a.example/yy │");
        assert_eq!(lines[6], "└────┴──────────────────────┘");
    }

    #[test]
    fn test_render_table_short_rows_are_padded() {
        let table = TableBuilder::new()
            .headers(["A", "B"])
            .row(vec!["x".to_string()])
            .build();

        let rendered = render_table(&table);
        assert!(rendered.contains("│ x │   │"));
    }

    #[test]
    fn test_render_table_counts_chars_not_bytes() {
        let table = TableBuilder::new()
            .headers(["Note"])
            .row(vec!["café".to_string()])
            .build();

        let rendered = render_table(&table);
        assert!(rendered.contains("│ café │"));
    }

    #[test]
    fn test_render_table_keeps_multiline_cells_on_one_row() {
        let table = TableBuilder::new()
            .headers(["URL", "Note"])
            .row(vec!["https://a.example/x".to_string(), "line1\nline2\r\n".to_string()])
            .build();

        let rendered = render_table(&table);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(rendered.contains("│ line1 line2   │"));
        let first = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == first));
    }

    #[test]
    fn test_render_empty_headers() {
        assert_eq!(render_table(&Table::default()), "");
    }

    #[test]
    fn test_render_panel() {
        let panel = render_panel("Nothing found.", Colors::GREEN);
        let lines: Vec<&str> = panel.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "│ Nothing found. │");
    }

    #[test]
    fn test_render_rule() {
        assert_eq!(render_rule("Valid", 11), "── Valid ──\n");
        assert_eq!(render_rule("too long title", 4), " too long title \n");
    }
}
