//! Sorter configuration

use serde::{Deserialize, Serialize};

use crate::table::Marker;

/// Class names a host puts on header elements for each [`Marker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerClasses {
    /// Class for the active column.
    ///
    /// Default: `active-column`
    pub active: String,

    /// Class for an ascending sort.
    ///
    /// Default: `ascending-indicator`
    pub ascending: String,

    /// Class for a descending sort.
    ///
    /// Default: `descending-indicator`
    pub descending: String,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self {
            active: "active-column".to_string(),
            ascending: "ascending-indicator".to_string(),
            descending: "descending-indicator".to_string(),
        }
    }
}

impl MarkerClasses {
    /// Returns the class name for a marker.
    pub fn class_for(&self, marker: Marker) -> &str {
        match marker {
            Marker::ActiveColumn => &self.active,
            Marker::Ascending => &self.ascending,
            Marker::Descending => &self.descending,
        }
    }
}

/// Configuration for [`TableSorter`](crate::TableSorter).
///
/// # Example
///
/// ```
/// use tablesort::SortConfig;
///
/// let config = SortConfig::default()
///     .with_placeholder("n/a")
///     .with_min_rows(3);
/// assert_eq!(config.placeholder, "n/a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Cell text treated as the number zero.
    ///
    /// Default: `-`
    pub placeholder: String,

    /// Fewest data rows for which rows are reordered.
    ///
    /// Below this the active column is still marked, but no direction
    /// marker is applied. Default: 2
    pub min_rows: usize,

    /// Header class names.
    pub classes: MarkerClasses,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            placeholder: "-".to_string(),
            min_rows: 2,
            classes: MarkerClasses::default(),
        }
    }
}

impl SortConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the minimum number of data rows to sort.
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }

    /// Sets the header class names.
    pub fn with_classes(mut self, classes: MarkerClasses) -> Self {
        self.classes = classes;
        self
    }
}
