//! Table View State
//!
//! Immutable snapshot of the ranking table's UI state: search text, selected
//! categories and the active sort. Every interaction returns a new value and
//! the rows are recomputed from the store by the pure filter/sort stages.

use crate::skills::Skill;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::column::{SortColumn, SortDirection};
use super::filter::filter;
use super::row::TableRow;
use super::sort::sort;

/// Ranking table view state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableView {
    pub query: String,
    pub categories: BTreeSet<String>,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
}

impl TableView {
    /// Default view: no filters, rank ascending
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    /// Select a category chip, or deselect it if already selected
    pub fn toggle_category(&self, category: &str) -> Self {
        let mut categories = self.categories.clone();
        if !categories.remove(category) {
            categories.insert(category.to_string());
        }
        Self {
            categories,
            ..self.clone()
        }
    }

    /// Replace the whole category selection
    pub fn with_categories<I, S>(&self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    /// Drop search text and category selection; the sort is kept
    pub fn clear_filters(&self) -> Self {
        Self {
            query: String::new(),
            categories: BTreeSet::new(),
            ..self.clone()
        }
    }

    /// Column-header click: flip direction on the active column, otherwise
    /// switch to the new column ascending
    pub fn sort_by(&self, column: SortColumn) -> Self {
        let sort_direction = if column == self.sort_column {
            self.sort_direction.toggled()
        } else {
            SortDirection::Asc
        };
        Self {
            sort_column: column,
            sort_direction,
            ..self.clone()
        }
    }

    /// Set column and direction explicitly
    pub fn with_sort(&self, column: SortColumn, direction: SortDirection) -> Self {
        Self {
            sort_column: column,
            sort_direction: direction,
            ..self.clone()
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty() || !self.categories.is_empty()
    }

    /// Filter then sort the given records
    pub fn apply<'a>(&self, records: &'a [Skill]) -> TableResult<'a> {
        let filtered = filter(records, &self.query, &self.categories);
        let rows = sort(filtered, self.sort_column, self.sort_direction);
        TableResult {
            rows,
            total: records.len(),
        }
    }
}

/// Output of [`TableView::apply`]
#[derive(Debug, Clone)]
pub struct TableResult<'a> {
    /// Filtered and sorted rows
    pub rows: Vec<&'a Skill>,
    /// Size of the unfiltered collection
    pub total: usize,
}

impl TableResult<'_> {
    pub fn shown(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// "Showing X of Y skills"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} skills", self.shown(), self.total)
    }

    /// Display-ready rows
    pub fn display_rows(&self) -> Vec<TableRow> {
        self.rows.iter().map(|s| TableRow::from(*s)).collect()
    }
}
