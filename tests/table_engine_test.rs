//! Table Engine Integration Tests
//!
//! Filter, sort and aggregation behavior over small hand-built catalogs.

use skillboard::format::{format_number, format_salary, format_signed_percentage};
use skillboard::insights::{bottom_negative, group_by_category, top_n, TrendsReport};
use skillboard::skills::{DemandLevel, GrowthRate, SalaryRange, Skill, SkillStore};
use skillboard::table::{filter, sort, SortColumn, SortDirection, TableView};
use std::collections::BTreeSet;

fn skill(rank: u32, name: &str, categories: &[&str], salary: f64, openings: u64, week: f64) -> Skill {
    let slug = name.to_lowercase().replace(' ', "-");
    Skill {
        id: rank.to_string(),
        rank,
        name: name.to_string(),
        slug,
        category: categories.iter().map(|c| c.to_string()).collect(),
        description: format!("{} description", name),
        market_score: 100.0 - rank as f64,
        avg_salary: salary,
        salary_range: SalaryRange {
            min: salary * 0.8,
            max: salary * 1.2,
        },
        job_openings: openings,
        growth_rate: GrowthRate {
            week,
            year: week * 10.0,
            ..Default::default()
        },
        demand_level: DemandLevel::Medium,
        trend_data: Vec::new(),
        related_skills: Vec::new(),
        top_companies: Vec::new(),
        learning_resources: None,
    }
}

fn names(rows: &[&Skill]) -> Vec<String> {
    rows.iter().map(|s| s.name.clone()).collect()
}

fn rust_and_cobol() -> Vec<Skill> {
    vec![
        skill(1, "Rust", &["Languages"], 140_000.0, 5_200, 3.2),
        skill(2, "COBOL", &["Languages", "Legacy"], 95_000.0, 800, -1.1),
    ]
}

fn catalog() -> Vec<Skill> {
    vec![
        skill(1, "Python", &["Languages", "Data"], 130_000.0, 45_000, 2.1),
        skill(2, "Kubernetes", &["Cloud", "DevOps"], 150_000.0, 12_000, 1.5),
        skill(3, "Rust", &["Languages", "Systems"], 148_000.0, 5_200, 3.2),
        skill(4, "Go", &["Languages", "Cloud"], 140_000.0, 9_000, 1.5),
        skill(5, "SQL", &["Data"], 110_000.0, 38_000, 0.3),
        skill(6, "Perl", &["Languages", "Scripting"], 105_000.0, 1_100, -0.9),
        skill(7, "COBOL", &["Languages", "Legacy"], 95_000.0, 800, -1.1),
    ]
}

#[test]
fn test_rust_cobol_scenario() {
    let store = rust_and_cobol();

    let by_salary = sort(&store, SortColumn::AvgSalary, SortDirection::Desc);
    assert_eq!(names(&by_salary), vec!["Rust", "COBOL"]);

    let found = filter(&store, "rust", &BTreeSet::new());
    assert_eq!(names(&found), vec!["Rust"]);

    let gainers = top_n(&store, SortColumn::GrowthWeek, 1);
    assert_eq!(names(&gainers), vec!["Rust"]);

    let losers = bottom_negative(&store, SortColumn::GrowthWeek, 1);
    assert_eq!(names(&losers), vec!["COBOL"]);
}

#[test]
fn test_filter_output_is_ordered_subsequence() {
    let store = catalog();
    let categories: BTreeSet<String> = ["Languages".to_string()].into();
    let rows = filter(&store, "", &categories);

    let ranks: Vec<u32> = rows.iter().map(|s| s.rank).collect();
    assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    assert!(rows.iter().all(|s| s.in_category("Languages")));
    assert_eq!(rows.len(), 5);
}

#[test]
fn test_filter_combines_query_and_categories() {
    let store = catalog();
    let categories: BTreeSet<String> = ["Cloud".to_string(), "Data".to_string()].into();

    // "o" matches every name or description; categories narrow it down
    let rows = filter(&store, "O", &categories);
    assert_eq!(names(&rows), vec!["Python", "Kubernetes", "Go", "SQL"]);

    let none = filter(&store, "haskell", &categories);
    assert!(none.is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let store = catalog();
    let categories: BTreeSet<String> = ["Languages".to_string()].into();

    let once = filter(&store, "l", &categories);
    let twice = filter(once.iter().copied(), "l", &categories);
    assert_eq!(names(&once), names(&twice));
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let store = catalog();

    // Kubernetes and Go share 1.5% week growth; catalog order is kept
    let asc = sort(&store, SortColumn::GrowthWeek, SortDirection::Asc);
    let asc_names = names(&asc);
    let k = asc_names.iter().position(|n| n == "Kubernetes").unwrap();
    let g = asc_names.iter().position(|n| n == "Go").unwrap();
    assert_eq!(g, k + 1);

    let desc = sort(&store, SortColumn::GrowthWeek, SortDirection::Desc);
    let desc_names = names(&desc);
    let k = desc_names.iter().position(|n| n == "Kubernetes").unwrap();
    let g = desc_names.iter().position(|n| n == "Go").unwrap();
    assert_eq!(g, k + 1);
}

#[test]
fn test_desc_reverses_asc_for_distinct_keys() {
    let store = catalog();
    let asc = names(&sort(&store, SortColumn::JobOpenings, SortDirection::Asc));
    let mut desc = names(&sort(&store, SortColumn::JobOpenings, SortDirection::Desc));
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_name_sort_ignores_case() {
    let mut store = catalog();
    store.push(skill(8, "jQuery", &["Frontend"], 80_000.0, 2_000, -1.8));

    let rows = sort(&store, SortColumn::Name, SortDirection::Asc);
    assert_eq!(
        names(&rows),
        vec!["COBOL", "Go", "jQuery", "Kubernetes", "Perl", "Python", "Rust", "SQL"]
    );
}

#[test]
fn test_name_sort_places_accented_letters_with_their_base() {
    let store = vec![
        skill(1, "Zig", &["Languages"], 120_000.0, 900, 4.0),
        skill(2, "Éclair", &["Frontend"], 90_000.0, 300, 0.5),
        skill(3, "elm", &["Frontend"], 95_000.0, 400, 0.2),
        skill(4, "Dart", &["Languages"], 110_000.0, 2_500, 1.0),
    ];

    let asc = sort(&store, SortColumn::Name, SortDirection::Asc);
    assert_eq!(names(&asc), vec!["Dart", "Éclair", "elm", "Zig"]);

    let desc = sort(&store, SortColumn::Name, SortDirection::Desc);
    assert_eq!(names(&desc), vec!["Zig", "elm", "Éclair", "Dart"]);
}

#[test]
fn test_view_header_clicks_toggle_direction() {
    let store = catalog();
    let view = TableView::new().sort_by(SortColumn::AvgSalary);
    assert_eq!(view.sort_direction, SortDirection::Asc);

    let view = view.sort_by(SortColumn::AvgSalary);
    assert_eq!(view.sort_direction, SortDirection::Desc);
    let result = view.apply(&store);
    assert_eq!(result.rows[0].name, "Kubernetes");

    // Switching column resets to ascending
    let view = view.sort_by(SortColumn::Name);
    assert_eq!(view.sort_direction, SortDirection::Asc);
}

#[test]
fn test_view_rank_is_static() {
    let store = catalog();
    let result = TableView::new()
        .with_sort(SortColumn::AvgSalary, SortDirection::Asc)
        .apply(&store);

    let rows = result.display_rows();
    assert_eq!(rows[0].name, "COBOL");
    assert_eq!(rows[0].rank, 7);
}

#[test]
fn test_view_empty_result() {
    let store = catalog();
    let result = TableView::new().with_query("zzz").apply(&store);
    assert!(result.is_empty());
    assert_eq!(result.summary(), "Showing 0 of 7 skills");
}

#[test]
fn test_group_by_category() {
    let store = catalog();
    let groups = group_by_category(&store);

    assert_eq!(groups[0].name, "Languages");
    assert_eq!(groups[0].skill_count(), 5);

    // Every membership counted exactly once
    let memberships: usize = store.iter().map(|s| s.category.len()).sum();
    let grouped: usize = groups.iter().map(|g| g.skill_count()).sum();
    assert_eq!(memberships, grouped);

    let data = groups.iter().find(|g| g.name == "Data").unwrap();
    assert_eq!(data.avg_salary, 120_000.0);
    assert_eq!(data.total_jobs, 83_000);
    assert_eq!(data.avg_salary_display(), "$120k");
}

#[test]
fn test_trends_report_from_store() {
    let store = SkillStore::new(catalog()).unwrap();
    let report = TrendsReport::build(store.skills());

    assert_eq!(report.top_gainers[0].name, "Rust");
    assert_eq!(names(&report.top_losers), vec!["COBOL", "Perl"]);
    assert_eq!(report.highest_paying[0].name, "Kubernetes");
    assert_eq!(report.most_in_demand[0].name, "Python");
}

#[test]
fn test_formatting_examples() {
    assert_eq!(format_salary(140_000.0), "$140k");
    assert_eq!(format_salary(1_500_000.0), "$1.5M");
    assert_eq!(format_number(5_200), "5.2K");
    assert_eq!(format_number(800), "800");
    assert_eq!(format_signed_percentage(3.2), "+3.2%");
    assert_eq!(format_signed_percentage(-1.1), "-1.1%");
    assert_eq!(format_signed_percentage(0.0), "0.0%");
}
