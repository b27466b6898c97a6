//! Table, header and row types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::{MarkerClasses, SortConfig};
use crate::error::SortError;
use crate::key::SortKey;
use crate::order::Direction;

/// Display marker carried by a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    /// The column most recently sorted.
    ActiveColumn,
    /// Rows are in ascending order by this column.
    Ascending,
    /// Rows are in descending order by this column.
    Descending,
}

impl Marker {
    fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Asc => Self::Ascending,
            Direction::Desc => Self::Descending,
        }
    }
}

/// A header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header text.
    pub label: String,
    /// Markers currently applied.
    #[serde(default)]
    pub markers: BTreeSet<Marker>,
}

impl Header {
    /// Creates an unmarked header.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            markers: BTreeSet::new(),
        }
    }

    /// Whether this header is the active column.
    pub fn is_active(&self) -> bool {
        self.markers.contains(&Marker::ActiveColumn)
    }

    /// The direction indicator on this header, if any.
    pub fn direction(&self) -> Option<Direction> {
        if self.markers.contains(&Marker::Ascending) {
            Some(Direction::Asc)
        } else if self.markers.contains(&Marker::Descending) {
            Some(Direction::Desc)
        } else {
            None
        }
    }

    /// Space-separated class list for the header element.
    pub fn class_attr(&self, classes: &MarkerClasses) -> String {
        self.markers
            .iter()
            .map(|m| classes.class_for(*m))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn set_direction(&mut self, direction: Direction) {
        self.markers.remove(&Marker::Ascending);
        self.markers.remove(&Marker::Descending);
        self.markers.insert(Marker::for_direction(direction));
    }
}

/// A data row of text cells, aligned with the headers by index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    /// Creates a row from its cells.
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Cell text at a column.
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// A header row plus the data rows that get reordered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<Header>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    /// Creates a table with the given header labels and no rows.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Header::new).collect(),
            rows: Vec::new(),
        }
    }

    /// Adds a row (builder form).
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(cells);
        self
    }

    /// Appends a row.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(Row::new(cells));
    }

    /// Number of columns (header cells).
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the header marked active, if any.
    pub fn active_column(&self) -> Option<usize> {
        self.headers.iter().position(Header::is_active)
    }

    /// Cell texts of one column, top to bottom.
    pub fn column(&self, column: usize) -> Result<Vec<&str>, SortError> {
        self.check_column(column)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, r)| {
                r.cell(column).ok_or(SortError::MalformedRow {
                    row,
                    cells: r.cells.len(),
                    column,
                })
            })
            .collect()
    }

    /// Sort keys of one column, top to bottom.
    ///
    /// Fails on an out-of-range column or the first row missing the cell.
    pub fn column_keys(
        &self,
        column: usize,
        config: &SortConfig,
    ) -> Result<Vec<SortKey>, SortError> {
        Ok(self
            .column(column)?
            .into_iter()
            .map(|text| SortKey::parse(text, config))
            .collect())
    }

    /// Reorders the rows so that position `k` holds the row previously at
    /// `order[k]`.
    ///
    /// Fails without touching the rows unless `order` is a permutation of
    /// `0..row_count()`.
    pub fn apply_order(&mut self, order: &[usize]) -> Result<(), SortError> {
        let rows = self.rows.len();
        let mut seen = vec![false; rows];
        let valid = order.len() == rows
            && order
                .iter()
                .all(|&i| i < rows && !std::mem::replace(&mut seen[i], true));
        if !valid {
            return Err(SortError::InvalidOrder {
                len: order.len(),
                rows,
            });
        }

        let mut slots: Vec<Option<Row>> = std::mem::take(&mut self.rows)
            .into_iter()
            .map(Some)
            .collect();
        self.rows = order
            .iter()
            .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
            .collect();
        Ok(())
    }

    /// Clears every marker and marks `column` active.
    pub(crate) fn activate(&mut self, column: usize) {
        for header in &mut self.headers {
            header.markers.clear();
        }
        if let Some(header) = self.headers.get_mut(column) {
            header.markers.insert(Marker::ActiveColumn);
        }
    }

    /// Sets the direction indicator on `column`.
    pub(crate) fn indicate(&mut self, column: usize, direction: Direction) {
        if let Some(header) = self.headers.get_mut(column) {
            header.set_direction(direction);
        }
    }

    pub(crate) fn check_column(&self, column: usize) -> Result<(), SortError> {
        if column < self.headers.len() {
            Ok(())
        } else {
            Err(SortError::ColumnOutOfRange {
                column,
                columns: self.headers.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(["Species", "Count"])
            .with_row(["Pidgey", "10"])
            .with_row(["Zubat", "2"])
            .with_row(["Rattata", "-"])
    }

    #[test]
    fn test_column_reads_cells() {
        let table = sample();
        assert_eq!(table.column(1).unwrap(), vec!["10", "2", "-"]);
    }

    #[test]
    fn test_column_out_of_range() {
        let table = sample();
        assert_eq!(
            table.column(2),
            Err(SortError::ColumnOutOfRange { column: 2, columns: 2 })
        );
    }

    #[test]
    fn test_short_row_is_reported() {
        let mut table = sample();
        table.push_row(["Onix"]);
        assert_eq!(
            table.column(1),
            Err(SortError::MalformedRow { row: 3, cells: 1, column: 1 })
        );
        // The first column is still readable.
        assert!(table.column(0).is_ok());
    }

    #[test]
    fn test_apply_order() {
        let mut table = sample();
        table.apply_order(&[2, 0, 1]).unwrap();
        assert_eq!(table.column(0).unwrap(), vec!["Rattata", "Pidgey", "Zubat"]);
    }

    #[test]
    fn test_apply_order_rejects_short_order() {
        let mut table = sample();
        assert_eq!(
            table.apply_order(&[0]),
            Err(SortError::InvalidOrder { len: 1, rows: 3 })
        );
        assert_eq!(table, sample());
    }

    #[test]
    fn test_apply_order_rejects_duplicates() {
        let mut table = sample();
        assert_eq!(
            table.apply_order(&[0, 0, 1]),
            Err(SortError::InvalidOrder { len: 3, rows: 3 })
        );
        assert_eq!(
            table.apply_order(&[0, 1, 3]),
            Err(SortError::InvalidOrder { len: 3, rows: 3 })
        );
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column(0).unwrap(), vec!["Pidgey", "Zubat", "Rattata"]);
    }

    #[test]
    fn test_activate_clears_other_headers() {
        let mut table = sample();
        table.activate(0);
        table.indicate(0, Direction::Asc);
        table.activate(1);
        assert_eq!(table.active_column(), Some(1));
        assert!(table.headers[0].markers.is_empty());
        assert_eq!(table.headers[1].direction(), None);
    }

    #[test]
    fn test_indicate_replaces_direction() {
        let mut table = sample();
        table.activate(1);
        table.indicate(1, Direction::Asc);
        table.indicate(1, Direction::Desc);
        assert_eq!(table.headers[1].direction(), Some(Direction::Desc));
        assert_eq!(table.headers[1].markers.len(), 2);
    }

    #[test]
    fn test_class_attr() {
        let mut table = sample();
        table.activate(1);
        table.indicate(1, Direction::Desc);
        let classes = MarkerClasses::default();
        assert_eq!(
            table.headers[1].class_attr(&classes),
            "active-column descending-indicator"
        );
        assert_eq!(table.headers[0].class_attr(&classes), "");
    }
}
