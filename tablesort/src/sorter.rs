//! The column sort routine.

use log::{debug, trace};

use crate::config::SortConfig;
use crate::error::SortError;
use crate::key::SortKey;
use crate::order::Direction;
use crate::table::Table;

/// Result of one sort call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// `order[k]` is the previous index of the row now at position `k`.
    pub order: Vec<usize>,
    /// Direction the rows ended up in, or `None` if reordering was skipped.
    pub direction: Option<Direction>,
    /// Number of adjacent swaps performed.
    pub swaps: usize,
}

impl SortOutcome {
    fn skipped(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
            direction: None,
            swaps: 0,
        }
    }

    /// Whether the row order is the same as before the call.
    pub fn is_unchanged(&self) -> bool {
        self.order.iter().enumerate().all(|(k, &i)| k == i)
    }
}

/// Sorts keys the way a header activation does.
///
/// Starts ascending. If the ascending attempt needs no swap at all, the keys
/// were already ascending and the call flips to descending instead. Text keys
/// always end up before numeric keys.
///
/// Each pass scans adjacent pairs from the top and stops at the first pair
/// out of order, swaps it and starts over. Quadratic or worse, which is fine
/// for tables of a few dozen rows.
pub fn sort_keys(keys: &[SortKey]) -> SortOutcome {
    bubble(keys, Direction::Asc, true)
}

/// Sorts keys in a fixed direction, without the flip of [`sort_keys`].
pub fn sort_keys_in(keys: &[SortKey], direction: Direction) -> SortOutcome {
    bubble(keys, direction, false)
}

fn bubble(keys: &[SortKey], start: Direction, flip: bool) -> SortOutcome {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    let mut direction = start;
    let mut swaps = 0;

    loop {
        let pair = (1..order.len())
            .find(|&i| keys[order[i - 1]].needs_swap(&keys[order[i]], direction));
        match pair {
            Some(i) => {
                trace!("swap rows {} and {} ({})", i - 1, i, direction);
                order.swap(i - 1, i);
                swaps += 1;
            }
            None if flip && swaps == 0 && direction == Direction::Asc => {
                trace!("already ascending, flipping to descending");
                direction = Direction::Desc;
            }
            None => break,
        }
    }

    SortOutcome {
        order,
        direction: Some(direction),
        swaps,
    }
}

/// Sorts a [`Table`] by a column and updates the header markers.
///
/// # Example
///
/// ```
/// use tablesort::{Direction, Table, TableSorter};
///
/// let mut table = Table::new(["Name"])
///     .with_row(["b"])
///     .with_row(["a"]);
/// let sorter = TableSorter::default();
///
/// sorter.sort(&mut table, 0).unwrap();
/// assert_eq!(table.headers[0].direction(), Some(Direction::Asc));
///
/// sorter.sort(&mut table, 0).unwrap();
/// assert_eq!(table.headers[0].direction(), Some(Direction::Desc));
/// assert_eq!(table.column(0).unwrap(), vec!["b", "a"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableSorter {
    config: SortConfig,
}

impl TableSorter {
    /// Creates a sorter with the given configuration.
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// The sorter's configuration.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts `table` by `column`.
    ///
    /// All headers lose their markers and `column` becomes the active
    /// column. With fewer than `min_rows` data rows nothing else happens.
    /// Otherwise the rows are reordered as by [`sort_keys`] and the header
    /// gets the indicator for the direction used.
    ///
    /// Nothing is modified when an error is returned.
    pub fn sort(&self, table: &mut Table, column: usize) -> Result<SortOutcome, SortError> {
        self.run(table, column, None)
    }

    /// Sorts `table` by `column` in a fixed direction.
    ///
    /// For hosts that remember the last direction themselves and want the
    /// next activation to use [`Direction::toggle`] of it.
    pub fn sort_in(
        &self,
        table: &mut Table,
        column: usize,
        direction: Direction,
    ) -> Result<SortOutcome, SortError> {
        self.run(table, column, Some(direction))
    }

    fn run(
        &self,
        table: &mut Table,
        column: usize,
        fixed: Option<Direction>,
    ) -> Result<SortOutcome, SortError> {
        let keys = table.column_keys(column, &self.config)?;
        table.activate(column);

        if keys.len() < self.config.min_rows {
            debug!("column {}: {} rows, not reordering", column, keys.len());
            return Ok(SortOutcome::skipped(keys.len()));
        }

        let outcome = match fixed {
            Some(direction) => sort_keys_in(&keys, direction),
            None => sort_keys(&keys),
        };
        table.apply_order(&outcome.order)?;
        if let Some(direction) = outcome.direction {
            table.indicate(column, direction);
        }

        debug!(
            "column {}: sorted {} rows {:?} with {} swaps",
            column,
            keys.len(),
            outcome.direction,
            outcome.swaps
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(cells: &[&str]) -> Vec<SortKey> {
        let config = SortConfig::default();
        cells.iter().map(|c| SortKey::parse(c, &config)).collect()
    }

    fn reorder<'a>(cells: &[&'a str], outcome: &SortOutcome) -> Vec<&'a str> {
        outcome.order.iter().map(|&i| cells[i]).collect()
    }

    #[test]
    fn test_numeric_ascending() {
        let cells = ["10", "2", "33", "1"];
        let outcome = sort_keys(&keys(&cells));
        assert_eq!(reorder(&cells, &outcome), vec!["1", "2", "10", "33"]);
        assert_eq!(outcome.direction, Some(Direction::Asc));
        assert!(outcome.swaps > 0);
    }

    #[test]
    fn test_sorted_input_flips_to_descending() {
        let cells = ["1", "2", "10"];
        let outcome = sort_keys(&keys(&cells));
        assert_eq!(reorder(&cells, &outcome), vec!["10", "2", "1"]);
        assert_eq!(outcome.direction, Some(Direction::Desc));
    }

    #[test]
    fn test_descending_input_sorts_ascending() {
        let cells = ["10", "2", "1"];
        let outcome = sort_keys(&keys(&cells));
        assert_eq!(reorder(&cells, &outcome), vec!["1", "2", "10"]);
        assert_eq!(outcome.direction, Some(Direction::Asc));
    }

    #[test]
    fn test_mixed_column() {
        let cells = ["10", "-", "2", "apple"];
        let outcome = sort_keys(&keys(&cells));
        assert_eq!(reorder(&cells, &outcome), vec!["apple", "-", "2", "10"]);
        assert_eq!(outcome.direction, Some(Direction::Asc));
    }

    #[test]
    fn test_mixed_column_descending_keeps_text_first() {
        let cells = ["apple", "-", "2", "10"];
        let outcome = sort_keys(&keys(&cells));
        assert_eq!(reorder(&cells, &outcome), vec!["apple", "10", "2", "-"]);
        assert_eq!(outcome.direction, Some(Direction::Desc));
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let cells = ["banana", "Apple", "cherry"];
        let outcome = sort_keys(&keys(&cells));
        assert_eq!(reorder(&cells, &outcome), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_equal_keys_keep_order() {
        let cells = ["Zebra", "zebra"];
        let outcome = sort_keys(&keys(&cells));
        // Already ascending (equal), so the call flips, and equal keys never swap.
        assert_eq!(outcome.direction, Some(Direction::Desc));
        assert!(outcome.is_unchanged());
        assert_eq!(outcome.swaps, 0);
    }

    #[test]
    fn test_fixed_direction_does_not_flip() {
        let cells = ["1", "2", "3"];
        let outcome = sort_keys_in(&keys(&cells), Direction::Asc);
        assert_eq!(outcome.direction, Some(Direction::Asc));
        assert!(outcome.is_unchanged());

        let outcome = sort_keys_in(&keys(&cells), Direction::Desc);
        assert_eq!(reorder(&cells, &outcome), vec!["3", "2", "1"]);
        assert_eq!(outcome.direction, Some(Direction::Desc));
    }

    #[test]
    fn test_blank_cells_sort_with_text() {
        let cells = ["10", "Abc", "", "-", "x", "-2"];
        let outcome = sort_keys(&keys(&cells));
        assert_eq!(reorder(&cells, &outcome), vec!["", "Abc", "x", "-2", "-", "10"]);
        assert_eq!(outcome.direction, Some(Direction::Asc));
    }

    #[test]
    fn test_empty_keys() {
        let outcome = sort_keys(&[]);
        assert!(outcome.order.is_empty());
        assert_eq!(outcome.swaps, 0);
    }
}
