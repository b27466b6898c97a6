//! Click-to-sort for header/row tables.
//!
//! A [`Table`] is a header row plus data rows of text cells. Activating a
//! header runs [`TableSorter::sort`], which reorders the data rows by that
//! column and marks the header as the active column with an ascending or
//! descending indicator.
//!
//! Every call starts ascending. If the rows were already in ascending order
//! (no swaps), the same call flips to descending, so activating a header
//! twice toggles between the two orders.
//!
//! # Example
//!
//! ```
//! use tablesort::{Direction, Table, TableSorter};
//!
//! let mut table = Table::new(["Name", "Count"])
//!     .with_row(["pidgey", "10"])
//!     .with_row(["rattata", "-"])
//!     .with_row(["zubat", "2"]);
//!
//! let sorter = TableSorter::default();
//! let outcome = sorter.sort(&mut table, 1).unwrap();
//!
//! assert_eq!(outcome.direction, Some(Direction::Asc));
//! assert_eq!(table.column(1).unwrap(), vec!["-", "2", "10"]);
//! ```

mod config;
mod document;
mod error;
mod key;
mod order;
mod render;
mod sorter;
mod table;

pub use config::{MarkerClasses, SortConfig};
pub use document::Document;
pub use error::SortError;
pub use key::SortKey;
pub use order::Direction;
pub use render::render;
pub use sorter::{SortOutcome, TableSorter, sort_keys, sort_keys_in};
pub use table::{Header, Marker, Row, Table};
