//! Sortable Columns
//!
//! Closed set of ranking-table columns, each mapped to a typed accessor.

use crate::skills::Skill;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::TableError;

/// A sortable column of the ranking table
///
/// Wire names match the catalog field paths (`growthRate.week`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortColumn {
    #[default]
    #[serde(rename = "rank")]
    Rank,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "marketScore")]
    MarketScore,
    #[serde(rename = "avgSalary")]
    AvgSalary,
    #[serde(rename = "jobOpenings")]
    JobOpenings,
    #[serde(rename = "growthRate.day")]
    GrowthDay,
    #[serde(rename = "growthRate.week")]
    GrowthWeek,
    #[serde(rename = "growthRate.month")]
    GrowthMonth,
    #[serde(rename = "growthRate.year")]
    GrowthYear,
}

impl SortColumn {
    pub const ALL: [SortColumn; 9] = [
        Self::Rank,
        Self::Name,
        Self::MarketScore,
        Self::AvgSalary,
        Self::JobOpenings,
        Self::GrowthDay,
        Self::GrowthWeek,
        Self::GrowthMonth,
        Self::GrowthYear,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Name => "name",
            Self::MarketScore => "marketScore",
            Self::AvgSalary => "avgSalary",
            Self::JobOpenings => "jobOpenings",
            Self::GrowthDay => "growthRate.day",
            Self::GrowthWeek => "growthRate.week",
            Self::GrowthMonth => "growthRate.month",
            Self::GrowthYear => "growthRate.year",
        }
    }

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rank => "#",
            Self::Name => "Skill",
            Self::MarketScore => "Score",
            Self::AvgSalary => "Avg Salary",
            Self::JobOpenings => "Jobs",
            Self::GrowthDay => "24h",
            Self::GrowthWeek => "7d",
            Self::GrowthMonth => "30d",
            Self::GrowthYear => "1y",
        }
    }

    /// Extract this column's sort key from a skill
    pub fn key<'a>(&self, skill: &'a Skill) -> SortKey<'a> {
        match self {
            Self::Rank => SortKey::Number(f64::from(skill.rank)),
            Self::Name => SortKey::Text(&skill.name),
            Self::MarketScore => SortKey::Number(skill.market_score),
            Self::AvgSalary => SortKey::Number(skill.avg_salary),
            Self::JobOpenings => SortKey::Number(skill.job_openings as f64),
            Self::GrowthDay => SortKey::Number(skill.growth_rate.day),
            Self::GrowthWeek => SortKey::Number(skill.growth_rate.week),
            Self::GrowthMonth => SortKey::Number(skill.growth_rate.month),
            Self::GrowthYear => SortKey::Number(skill.growth_rate.year),
        }
    }

    /// Numeric value of this column, `None` for text columns
    pub fn metric(&self, skill: &Skill) -> Option<f64> {
        match self.key(skill) {
            SortKey::Number(n) => Some(n),
            SortKey::Text(_) => None,
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TableError::UnknownColumn(s.to_string()))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(TableError::UnknownDirection(other.to_string())),
        }
    }
}

/// A typed sort key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
}

impl SortKey<'_> {
    /// Ascending comparison: text by [`compare_text`], numbers by `total_cmp`
    pub fn compare(&self, other: &SortKey<'_>) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => compare_text(a, b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            // A column never yields both kinds; keep the order total anyway
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        }
    }
}

/// Accent- and case-insensitive lexicographic comparison
///
/// Primary key is the decomposed string with combining marks dropped and
/// letters lowercased, so `Éclair` sorts among the `e`s. Ties fall back to
/// accents (unaccented first), then case (lowercase first), so the order
/// stays total.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercased(a).cmp(lowercased(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercased(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}
