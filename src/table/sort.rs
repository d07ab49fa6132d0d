//! Sort Stage
//!
//! Stable, full recompute over a fresh copy of the row references. Fine for a
//! catalog of a few dozen skills; every call is O(n log n) from scratch.

use crate::skills::Skill;

use super::column::{SortColumn, SortDirection};

/// Sort skills by a column, keeping equal keys in their input order
pub fn sort<'a, I>(records: I, column: SortColumn, direction: SortDirection) -> Vec<&'a Skill>
where
    I: IntoIterator<Item = &'a Skill>,
{
    let mut rows: Vec<&Skill> = records.into_iter().collect();
    // `sort_by` is stable; reversing for desc keeps ties as Equal
    rows.sort_by(|a, b| direction.apply(column.key(a).compare(&column.key(b))));
    rows
}
