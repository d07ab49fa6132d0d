//! Skill Comparison
//!
//! Side-by-side comparison of up to four skills.

use crate::format::{format_number, format_salary, format_signed_percentage};
use crate::skills::{Skill, SkillStore};
use serde::Serialize;
use tracing::debug;

/// Maximum skills compared at once
pub const MAX_COMPARED: usize = 4;
/// Candidates offered by the picker
pub const CANDIDATE_LIMIT: usize = 10;

/// Comparison selection errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    #[error("Comparison already holds {MAX_COMPARED} skills")]
    Full,

    #[error("Skill '{0}' is already selected")]
    AlreadySelected(String),
}

/// Ordered selection of skills being compared
#[derive(Debug, Clone, Default)]
pub struct Comparison<'a> {
    selected: Vec<&'a Skill>,
}

impl<'a> Comparison<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve slugs against the store, skipping unknown ones
    pub fn from_slugs<S: AsRef<str>>(
        store: &'a SkillStore,
        slugs: &[S],
    ) -> Result<Self, ComparisonError> {
        let mut comparison = Self::new();
        for slug in slugs {
            match store.get_by_slug(slug.as_ref()) {
                Some(skill) => comparison.add(skill)?,
                None => debug!("Skipping unknown slug '{}' in comparison", slug.as_ref()),
            }
        }
        Ok(comparison)
    }

    pub fn add(&mut self, skill: &'a Skill) -> Result<(), ComparisonError> {
        if self.contains(skill) {
            return Err(ComparisonError::AlreadySelected(skill.slug.clone()));
        }
        if self.is_full() {
            return Err(ComparisonError::Full);
        }
        self.selected.push(skill);
        Ok(())
    }

    /// Remove a skill by id; returns whether it was selected
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s.id != id);
        self.selected.len() != before
    }

    pub fn contains(&self, skill: &Skill) -> bool {
        self.selected.iter().any(|s| s.id == skill.id)
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_COMPARED
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn selected(&self) -> &[&'a Skill] {
        &self.selected
    }

    /// Picker suggestions: name matches the query, not yet selected
    ///
    /// An empty query offers nothing.
    pub fn candidates<I>(&self, records: I, query: &str) -> Vec<&'a Skill>
    where
        I: IntoIterator<Item = &'a Skill>,
    {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        records
            .into_iter()
            .filter(|s| s.name.to_lowercase().contains(&needle) && !self.contains(s))
            .take(CANDIDATE_LIMIT)
            .collect()
    }

    /// Build the comparison table
    pub fn table(&self) -> ComparisonTable {
        let skills = self.selected.as_slice();
        let row = |label: &str, cell: fn(&Skill) -> String| comparison_row(skills, label, cell);

        let sections = vec![
            ComparisonSection {
                title: "Basic Info".to_string(),
                rows: vec![
                    row("Rank", |s| format!("#{}", s.rank)),
                    row("Market Score", |s| format!("{}", s.market_score)),
                    row("Demand Level", |s| s.demand_level.to_string()),
                ],
            },
            ComparisonSection {
                title: "Compensation".to_string(),
                rows: vec![
                    row("Average Salary", |s| format_salary(s.avg_salary)),
                    row("Min Salary", |s| format_salary(s.salary_range.min)),
                    row("Max Salary", |s| format_salary(s.salary_range.max)),
                ],
            },
            ComparisonSection {
                title: "Market Demand".to_string(),
                rows: vec![
                    row("Job Openings", |s| format_number(s.job_openings)),
                    row("Weekly Growth", |s| format_signed_percentage(s.growth_rate.week)),
                    row("Yearly Growth", |s| format_signed_percentage(s.growth_rate.year)),
                ],
            },
            ComparisonSection {
                title: "Categories".to_string(),
                rows: vec![row("Categories", |s| s.category.join(", "))],
            },
        ];

        ComparisonTable {
            skills: skills.iter().map(|s| s.name.clone()).collect(),
            slugs: skills.iter().map(|s| s.slug.clone()).collect(),
            sections,
        }
    }
}

fn comparison_row(skills: &[&Skill], label: &str, cell: fn(&Skill) -> String) -> ComparisonRow {
    ComparisonRow {
        label: label.to_string(),
        values: skills.iter().map(|s| cell(s)).collect(),
    }
}

/// Rendered comparison, one column per selected skill
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable {
    pub skills: Vec<String>,
    pub slugs: Vec<String>,
    pub sections: Vec<ComparisonSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSection {
    pub title: String,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::types::fixtures::skill;

    fn store() -> SkillStore {
        SkillStore::new(vec![
            skill("Rust", &["Languages"]),
            skill("Ruby", &["Languages"]),
            skill("Go", &["Languages"]),
            skill("Figma", &["Design"]),
            skill("SQL", &["Data"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_and_remove() {
        let store = store();
        let rust = store.get_by_slug("rust").unwrap();
        let mut comparison = Comparison::new();

        comparison.add(rust).unwrap();
        assert_eq!(
            comparison.add(rust),
            Err(ComparisonError::AlreadySelected("rust".to_string()))
        );
        assert!(comparison.remove(&rust.id));
        assert!(!comparison.remove(&rust.id));
        assert!(comparison.is_empty());
    }

    #[test]
    fn test_capacity_limit() {
        let store = store();
        let mut comparison = Comparison::new();
        for skill in store.iter().take(MAX_COMPARED) {
            comparison.add(skill).unwrap();
        }
        assert!(comparison.is_full());
        assert_eq!(
            comparison.add(store.get_by_slug("sql").unwrap()),
            Err(ComparisonError::Full)
        );
    }

    #[test]
    fn test_from_slugs_skips_unknown() {
        let store = store();
        let comparison = Comparison::from_slugs(&store, &["go", "haskell", "rust"]).unwrap();
        let names: Vec<&str> = comparison.selected().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_candidates_exclude_selected() {
        let store = store();
        let mut comparison = Comparison::new();
        comparison.add(store.get_by_slug("rust").unwrap()).unwrap();

        let names: Vec<&str> = comparison
            .candidates(&store, "ru")
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ruby"]);
        assert!(comparison.candidates(&store, "").is_empty());
    }

    #[test]
    fn test_table_sections() {
        let store = store();
        let comparison = Comparison::from_slugs(&store, &["rust", "go"]).unwrap();
        let table = comparison.table();

        assert_eq!(table.skills, vec!["Rust", "Go"]);
        let titles: Vec<&str> = table.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Basic Info", "Compensation", "Market Demand", "Categories"]
        );
        let salary = &table.sections[1].rows[0];
        assert_eq!(salary.values, vec!["$100k", "$100k"]);
    }
}
