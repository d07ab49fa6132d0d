//! Tabular Data Engine
//!
//! Filtering, stable multi-type sorting and display rows for the skill
//! ranking table.
//!
//! # Pipeline
//!
//! ```text
//! &[Skill] ──► filter(query, categories) ──► sort(column, direction) ──► TableRow
//!               (order preserving)            (stable, full recompute)   (formatted)
//! ```
//!
//! Every stage borrows the store and returns a new `Vec<&Skill>`; the master
//! collection is never reordered or mutated, so any number of views can be
//! computed from it side by side.

pub mod column;
pub mod filter;
pub mod row;
pub mod sort;
pub mod view;

pub use column::{compare_text, SortColumn, SortDirection, SortKey};
pub use filter::{filter, matches_categories, matches_query};
pub use row::{sparkline_points, GrowthCell, TableRow, TrendDirection};
pub use sort::sort;
pub use view::{TableResult, TableView};

/// Errors raised when parsing table parameters at the API boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Unknown sort column: {0}")]
    UnknownColumn(String),

    #[error("Unknown sort direction: {0} (expected 'asc' or 'desc')")]
    UnknownDirection(String),
}
