//! Plain-text table rendering.

use unicode_width::UnicodeWidthStr;

use crate::table::{Header, Table};

const SEPARATOR: &str = " | ";

/// Header text with the sort indicator appended to the active column.
fn header_text(header: &Header) -> String {
    match header.direction() {
        Some(direction) if header.is_active() => {
            format!("{} {}", header.label, direction.indicator())
        }
        _ => header.label.clone(),
    }
}

fn line(cells: &[&str], widths: &[usize]) -> String {
    let joined = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| pad(cell, w))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    format!("{}\n", joined.trim_end())
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Renders a table as aligned text: header line, rule, one line per row.
///
/// Rows missing a cell render it blank. Cells wider than others widen their
/// whole column (display width, so CJK and emoji line up).
///
/// ```
/// use tablesort::{render, Table, TableSorter};
///
/// let mut table = Table::new(["Name", "N"])
///     .with_row(["b", "1"])
///     .with_row(["a", "2"]);
/// TableSorter::default().sort(&mut table, 0).unwrap();
///
/// assert_eq!(render(&table), "Name ▲ | N\n-------+--\na      | 2\nb      | 1\n");
/// ```
pub fn render(table: &Table) -> String {
    let headers: Vec<String> = table.headers.iter().map(header_text).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, text)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.cell(col))
                .map(UnicodeWidthStr::width)
                .fold(text.width(), usize::max)
        })
        .collect();

    let header_cells: Vec<&str> = headers.iter().map(String::as_str).collect();
    let mut out = line(&header_cells, &widths);
    let rule = widths.iter().map(|&w| "-".repeat(w)).collect::<Vec<_>>().join("-+-");
    out.push_str(&rule);
    out.push('\n');
    for row in &table.rows {
        let cells: Vec<&str> = (0..widths.len()).map(|col| row.cell(col).unwrap_or("")).collect();
        out.push_str(&line(&cells, &widths));
    }
    out
}
