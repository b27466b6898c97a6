//! Tables addressed by identifier.

use log::debug;

use crate::config::SortConfig;
use crate::error::SortError;
use crate::sorter::{SortOutcome, TableSorter};
use crate::table::Table;

/// A page of tables, each registered under an identifier.
///
/// Header activations arrive as `(id, column)` pairs; [`Document::sort_table`]
/// resolves the id and sorts that table.
///
/// # Example
///
/// ```
/// use tablesort::{Document, SortError, Table};
///
/// let mut doc = Document::new();
/// doc.insert("nests", Table::new(["Park", "Species"]).with_row(["Elm", "Onix"]));
///
/// assert!(doc.sort_table("nests", 1).is_ok());
/// assert_eq!(
///     doc.sort_table("spawns", 0),
///     Err(SortError::table_not_found("spawns"))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    tables: Vec<(String, Table)>,
    sorter: TableSorter,
}

impl Document {
    /// Creates an empty document with the default sorter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document whose sorter uses `config`.
    pub fn with_config(config: SortConfig) -> Self {
        Self {
            tables: Vec::new(),
            sorter: TableSorter::new(config),
        }
    }

    /// Registers a table, returning the one it replaced.
    pub fn insert(&mut self, id: impl Into<String>, table: Table) -> Option<Table> {
        let id = id.into();
        if let Some(existing) = self.get_mut(&id) {
            return Some(std::mem::replace(existing, table));
        }
        self.tables.push((id, table));
        None
    }

    /// Looks up a table.
    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|(k, _)| k == id).map(|(_, t)| t)
    }

    /// Looks up a table mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|(k, _)| k == id).map(|(_, t)| t)
    }

    /// Unregisters a table.
    pub fn remove(&mut self, id: &str) -> Option<Table> {
        let idx = self.tables.iter().position(|(k, _)| k == id)?;
        Some(self.tables.remove(idx).1)
    }

    /// Table identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(k, _)| k.as_str())
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Sorts the table registered as `id` by `column`.
    pub fn sort_table(&mut self, id: &str, column: usize) -> Result<SortOutcome, SortError> {
        let Self { tables, sorter } = self;
        let table = tables
            .iter_mut()
            .find(|(k, _)| k == id)
            .map(|(_, t)| t)
            .ok_or_else(|| SortError::table_not_found(id))?;
        debug!("sorting table {} by column {}", id, column);
        sorter.sort(table, column)
    }
}

impl<S: Into<String>> FromIterator<(S, Table)> for Document {
    fn from_iter<I: IntoIterator<Item = (S, Table)>>(iter: I) -> Self {
        let mut doc = Self::new();
        for (id, table) in iter {
            doc.insert(id, table);
        }
        doc
    }
}
