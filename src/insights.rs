//! Market Insights
//!
//! One-shot reductions over the catalog backing the overview cards, the
//! category page and the trends page. Nothing here is cached: each call
//! recomputes from the records it is given.

use crate::format::{format_number, format_salary, format_signed_percentage, truncate_label};
use crate::skills::{DemandLevel, Skill};
use crate::table::{sort, SortColumn, SortDirection};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Entries per trends list
pub const TREND_LIST_LEN: usize = 10;
/// Member names previewed on a category card
pub const CATEGORY_PREVIEW_LEN: usize = 3;
const PREVIEW_NAME_CHARS: usize = 20;

/// Sorted, de-duplicated category labels across all skills
pub fn all_categories<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Skill>,
{
    records
        .into_iter()
        .flat_map(|s| s.category.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Aggregates for one category
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary<'a> {
    pub name: String,
    pub skills: Vec<&'a Skill>,
    pub avg_salary: f64,
    pub total_jobs: u64,
    pub avg_growth: f64,
}

impl CategorySummary<'_> {
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// First few member names, long names shortened
    pub fn preview(&self) -> Vec<String> {
        self.skills
            .iter()
            .take(CATEGORY_PREVIEW_LEN)
            .map(|s| truncate_label(&s.name, PREVIEW_NAME_CHARS))
            .collect()
    }

    pub fn avg_salary_display(&self) -> String {
        format_salary(self.avg_salary)
    }

    pub fn total_jobs_display(&self) -> String {
        format_number(self.total_jobs)
    }

    pub fn avg_growth_display(&self) -> String {
        format_signed_percentage(self.avg_growth)
    }
}

/// Partition skills by category label
///
/// A skill appears once in every category it carries. Groups are ordered by
/// member count, largest first; equal counts keep first-seen order.
pub fn group_by_category<'a, I>(records: I) -> Vec<CategorySummary<'a>>
where
    I: IntoIterator<Item = &'a Skill>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'a Skill>)> = Vec::new();

    for skill in records {
        for category in &skill.category {
            let slot = *index.entry(category.as_str()).or_insert_with(|| {
                groups.push((category.clone(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(skill);
        }
    }

    let mut summaries: Vec<CategorySummary<'a>> = groups
        .into_iter()
        .map(|(name, skills)| {
            let count = skills.len() as f64;
            CategorySummary {
                avg_salary: skills.iter().map(|s| s.avg_salary).sum::<f64>() / count,
                total_jobs: skills.iter().map(|s| s.job_openings).sum(),
                avg_growth: skills.iter().map(|s| s.growth_rate.year).sum::<f64>() / count,
                name,
                skills,
            }
        })
        .collect();

    // Stable: ties keep first-seen order
    summaries.sort_by(|a, b| b.skills.len().cmp(&a.skills.len()));
    summaries
}

/// Highest `n` skills by a numeric column
pub fn top_n<'a, I>(records: I, metric: SortColumn, n: usize) -> Vec<&'a Skill>
where
    I: IntoIterator<Item = &'a Skill>,
{
    let mut rows = sort(records, metric, SortDirection::Desc);
    rows.truncate(n);
    rows
}

/// Lowest `n` skills by a numeric column, keeping only strictly negative values
pub fn bottom_negative<'a, I>(records: I, metric: SortColumn, n: usize) -> Vec<&'a Skill>
where
    I: IntoIterator<Item = &'a Skill>,
{
    sort(records, metric, SortDirection::Asc)
        .into_iter()
        .filter(|s| metric.metric(s).is_some_and(|v| v < 0.0))
        .take(n)
        .collect()
}

/// Lists shown on the trends page
#[derive(Debug, Clone, Serialize)]
pub struct TrendsReport<'a> {
    /// Highest week growth
    pub top_gainers: Vec<&'a Skill>,
    /// Most negative week growth (may be empty)
    pub top_losers: Vec<&'a Skill>,
    /// Highest year growth
    pub emerging: Vec<&'a Skill>,
    pub highest_paying: Vec<&'a Skill>,
    pub most_in_demand: Vec<&'a Skill>,
}

impl<'a> TrendsReport<'a> {
    pub fn build(records: &'a [Skill]) -> Self {
        Self {
            top_gainers: top_n(records, SortColumn::GrowthWeek, TREND_LIST_LEN),
            top_losers: bottom_negative(records, SortColumn::GrowthWeek, TREND_LIST_LEN),
            emerging: top_n(records, SortColumn::GrowthYear, TREND_LIST_LEN),
            highest_paying: top_n(records, SortColumn::AvgSalary, TREND_LIST_LEN),
            most_in_demand: top_n(records, SortColumn::JobOpenings, TREND_LIST_LEN),
        }
    }
}

/// Headline numbers for the overview cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOverview {
    pub total_skills: usize,
    pub avg_salary: f64,
    pub total_jobs: u64,
    pub high_demand_skills: usize,
}

impl MarketOverview {
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Skill>,
    {
        let mut total_skills = 0;
        let mut salary_sum = 0.0;
        let mut total_jobs = 0;
        let mut high_demand_skills = 0;

        for skill in records {
            total_skills += 1;
            salary_sum += skill.avg_salary;
            total_jobs += skill.job_openings;
            if skill.demand_level == DemandLevel::High {
                high_demand_skills += 1;
            }
        }

        let avg_salary = if total_skills == 0 {
            0.0
        } else {
            salary_sum / total_skills as f64
        };

        Self {
            total_skills,
            avg_salary,
            total_jobs,
            high_demand_skills,
        }
    }
}
