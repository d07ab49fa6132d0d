//! Filter Stage
//!
//! Free-text search plus multi-category selection. A skill is kept when it
//! passes both, and the input order is preserved.

use crate::skills::Skill;
use std::collections::BTreeSet;
use tracing::debug;

/// Filter skills by search text and selected categories
///
/// - empty `query` matches everything, otherwise it must be a case-insensitive
///   substring of the name, the description or any category label;
/// - empty `categories` matches everything, otherwise the skill must carry at
///   least one of them.
pub fn filter<'a, I>(records: I, query: &str, categories: &BTreeSet<String>) -> Vec<&'a Skill>
where
    I: IntoIterator<Item = &'a Skill>,
{
    let needle = query.to_lowercase();

    let rows: Vec<&Skill> = records
        .into_iter()
        .filter(|skill| matches_query(skill, &needle) && matches_categories(skill, categories))
        .collect();

    debug!(
        query,
        categories = categories.len(),
        matched = rows.len(),
        "Filtered skills"
    );
    rows
}

/// Text predicate; `needle` must already be lowercase
pub fn matches_query(skill: &Skill, needle: &str) -> bool {
    needle.is_empty()
        || skill.name.to_lowercase().contains(needle)
        || skill.description.to_lowercase().contains(needle)
        || skill
            .category
            .iter()
            .any(|c| c.to_lowercase().contains(needle))
}

/// Category predicate (non-empty intersection)
pub fn matches_categories(skill: &Skill, categories: &BTreeSet<String>) -> bool {
    categories.is_empty() || skill.category.iter().any(|c| categories.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::types::fixtures::skill;

    fn names(rows: &[&Skill]) -> Vec<String> {
        rows.iter().map(|s| s.name.clone()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let skills = vec![skill("Rust", &["Languages"]), skill("Figma", &["Design"])];
        let rows = filter(&skills, "", &BTreeSet::new());
        assert_eq!(names(&rows), vec!["Rust", "Figma"]);
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let skills = vec![skill("Rust", &["Languages"]), skill("COBOL", &["Legacy"])];
        assert_eq!(names(&filter(&skills, "rUsT", &BTreeSet::new())), vec!["Rust"]);
    }

    #[test]
    fn test_query_matches_description_and_category() {
        let mut figma = skill("Figma", &["Design"]);
        figma.description = "Collaborative interface prototyping".to_string();
        let skills = vec![skill("Rust", &["Systems"]), figma];

        assert_eq!(names(&filter(&skills, "prototyp", &BTreeSet::new())), vec!["Figma"]);
        assert_eq!(names(&filter(&skills, "system", &BTreeSet::new())), vec!["Rust"]);
    }

    #[test]
    fn test_categories_intersect() {
        let skills = vec![
            skill("Rust", &["Languages", "Systems"]),
            skill("Figma", &["Design"]),
            skill("Go", &["Languages", "Cloud"]),
        ];
        let rows = filter(&skills, "", &set(&["Systems", "Cloud"]));
        assert_eq!(names(&rows), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_category_match_is_exact() {
        let skills = vec![skill("Rust", &["Languages"])];
        assert!(filter(&skills, "", &set(&["languages"])).is_empty());
    }

    #[test]
    fn test_both_predicates_required() {
        let skills = vec![skill("Rust", &["Languages"]), skill("Rustic Design", &["Design"])];
        let rows = filter(&skills, "rust", &set(&["Design"]));
        assert_eq!(names(&rows), vec!["Rustic Design"]);
    }

    #[test]
    fn test_empty_input() {
        let skills: Vec<Skill> = Vec::new();
        assert!(filter(&skills, "rust", &set(&["Languages"])).is_empty());
    }
}
