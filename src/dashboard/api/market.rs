//! Market Insight API
//!
//! # Endpoints
//!
//! - `GET /api/categories` - Category cards, largest first
//! - `GET /api/trends` - Trend lists
//! - `GET /api/overview` - Headline numbers
//! - `GET /api/compare?slugs=a,b&q=` - Comparison table and picker candidates
//! - `GET /api/slugs` - Every detail route

use super::skills::SkillApiState;
use super::ApiError;
use crate::compare::{Comparison, ComparisonError, ComparisonTable, MAX_COMPARED};
use crate::format::{format_number, format_salary, format_signed_percentage, truncate_label};
use crate::insights::{group_by_category, CategorySummary, MarketOverview, TrendsReport};
use crate::skills::Skill;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One category card
#[derive(Debug, Serialize)]
pub struct CategoryCard {
    pub name: String,
    pub skill_count: usize,
    pub avg_salary: String,
    pub total_jobs: String,
    pub avg_growth: String,
    /// Leading member names
    pub preview: Vec<String>,
    /// Members beyond the preview
    pub more: usize,
}

impl From<&CategorySummary<'_>> for CategoryCard {
    fn from(summary: &CategorySummary<'_>) -> Self {
        let preview = summary.preview();
        Self {
            name: summary.name.clone(),
            skill_count: summary.skill_count(),
            avg_salary: summary.avg_salary_display(),
            total_jobs: summary.total_jobs_display(),
            avg_growth: summary.avg_growth_display(),
            more: summary.skill_count().saturating_sub(preview.len()),
            preview,
        }
    }
}

/// Name length on the compact salary and demand lists
pub const COMPACT_NAME_CHARS: usize = 25;

/// One line of a trends list
#[derive(Debug, Serialize)]
pub struct TrendEntry {
    pub rank: u32,
    pub name: String,
    /// Name as shown in the list, shortened on the compact lists
    pub display_name: String,
    pub slug: String,
    /// The list's metric, formatted
    pub value: String,
}

impl TrendEntry {
    fn list(skills: &[&Skill], value: fn(&Skill) -> String) -> Vec<Self> {
        Self::list_with_names(skills, value, usize::MAX)
    }

    fn compact_list(skills: &[&Skill], value: fn(&Skill) -> String) -> Vec<Self> {
        Self::list_with_names(skills, value, COMPACT_NAME_CHARS)
    }

    fn list_with_names(
        skills: &[&Skill],
        value: fn(&Skill) -> String,
        name_chars: usize,
    ) -> Vec<Self> {
        skills
            .iter()
            .map(|s| Self {
                rank: s.rank,
                name: s.name.clone(),
                display_name: truncate_label(&s.name, name_chars),
                slug: s.slug.clone(),
                value: value(s),
            })
            .collect()
    }
}

/// Trends page lists
#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub top_gainers: Vec<TrendEntry>,
    pub top_losers: Vec<TrendEntry>,
    pub emerging: Vec<TrendEntry>,
    pub highest_paying: Vec<TrendEntry>,
    pub most_in_demand: Vec<TrendEntry>,
}

impl From<&TrendsReport<'_>> for TrendsResponse {
    fn from(report: &TrendsReport<'_>) -> Self {
        Self {
            top_gainers: TrendEntry::list(&report.top_gainers, |s| {
                format_signed_percentage(s.growth_rate.week)
            }),
            top_losers: TrendEntry::list(&report.top_losers, |s| {
                format_signed_percentage(s.growth_rate.week)
            }),
            emerging: TrendEntry::list(&report.emerging, |s| {
                format_signed_percentage(s.growth_rate.year)
            }),
            highest_paying: TrendEntry::compact_list(&report.highest_paying, |s| {
                format_salary(s.avg_salary)
            }),
            most_in_demand: TrendEntry::compact_list(&report.most_in_demand, |s| {
                format_number(s.job_openings)
            }),
        }
    }
}

/// Overview response
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    #[serde(flatten)]
    pub overview: MarketOverview,
    pub avg_salary_display: String,
    pub total_jobs_display: String,
}

/// Comparison query parameters
#[derive(Debug, Deserialize, Default)]
pub struct CompareQuery {
    /// Comma-separated slugs, in column order
    pub slugs: Option<String>,
    /// Picker search text
    pub q: Option<String>,
}

impl CompareQuery {
    pub fn slug_list(&self) -> Vec<&str> {
        self.slugs
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Candidate offered by the comparison picker
#[derive(Debug, Serialize)]
pub struct CompareCandidate {
    pub name: String,
    pub slug: String,
}

/// Comparison response
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    #[serde(flatten)]
    pub table: ComparisonTable,
    pub is_full: bool,
    pub candidates: Vec<CompareCandidate>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/categories
pub async fn list_categories(State(state): State<Arc<SkillApiState>>) -> Json<Vec<CategoryCard>> {
    let groups = group_by_category(state.store.iter());
    Json(groups.iter().map(CategoryCard::from).collect())
}

/// GET /api/trends
pub async fn trends(State(state): State<Arc<SkillApiState>>) -> Json<TrendsResponse> {
    let report = TrendsReport::build(state.store.skills());
    Json(TrendsResponse::from(&report))
}

/// GET /api/overview
pub async fn overview(State(state): State<Arc<SkillApiState>>) -> Json<OverviewResponse> {
    let overview = MarketOverview::build(state.store.iter());
    Json(OverviewResponse {
        avg_salary_display: format_salary(overview.avg_salary),
        total_jobs_display: format_number(overview.total_jobs),
        overview,
    })
}

/// GET /api/compare
pub async fn compare(
    State(state): State<Arc<SkillApiState>>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<CompareResponse>, ApiError> {
    let slugs = query.slug_list();
    if slugs.len() > MAX_COMPARED {
        return Err(ComparisonError::Full.into());
    }

    let comparison = Comparison::from_slugs(&state.store, &slugs)?;
    let candidates = comparison
        .candidates(state.store.iter(), query.q.as_deref().unwrap_or_default())
        .into_iter()
        .map(|s| CompareCandidate {
            name: s.name.clone(),
            slug: s.slug.clone(),
        })
        .collect();

    Ok(Json(CompareResponse {
        table: comparison.table(),
        is_full: comparison.is_full(),
        candidates,
    }))
}

/// GET /api/slugs
pub async fn list_slugs(State(state): State<Arc<SkillApiState>>) -> Json<Vec<String>> {
    Json(state.store.slugs().map(String::from).collect())
}

// ============================================================================
// Router
// ============================================================================

/// Create the market insight router
pub fn market_router(state: Arc<SkillApiState>) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/trends", get(trends))
        .route("/overview", get(overview))
        .route("/compare", get(compare))
        .route("/slugs", get(list_slugs))
        .with_state(state)
}
