//! Skill Ranking API
//!
//! Read-only endpoints over the loaded catalog.
//!
//! # Endpoints
//!
//! - `GET /api/skills` - Ranking table (`q`, `category`, `sort`, `dir`)
//! - `GET /api/skills/{slug}` - Skill detail

use super::ApiError;
use crate::detail::SkillDetail;
use crate::insights::all_categories;
use crate::skills::SkillStore;
use crate::table::{SortColumn, SortDirection, TableRow, TableView};
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Skill API state
pub struct SkillApiState {
    /// Loaded catalog
    pub store: Arc<SkillStore>,
}

impl SkillApiState {
    pub fn new(store: Arc<SkillStore>) -> Self {
        Self { store }
    }
}

/// Query parameters for the ranking table
#[derive(Debug, Deserialize, Default)]
pub struct SkillListQuery {
    /// Search text
    pub q: Option<String>,
    /// Comma-separated category labels
    pub category: Option<String>,
    /// Sort column (`rank`, `name`, `growthRate.week`, ...)
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub dir: Option<String>,
}

impl SkillListQuery {
    /// Build the view these parameters describe
    pub fn to_view(&self) -> Result<TableView, ApiError> {
        let column = match self.sort.as_deref() {
            Some(s) if !s.is_empty() => s.parse::<SortColumn>()?,
            _ => SortColumn::default(),
        };
        let direction = match self.dir.as_deref() {
            Some(d) if !d.is_empty() => d.parse::<SortDirection>()?,
            _ => SortDirection::default(),
        };
        let categories = self
            .category
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty());

        Ok(TableView::new()
            .with_query(self.q.clone().unwrap_or_default())
            .with_categories(categories)
            .with_sort(column, direction))
    }
}

/// Ranking table response
#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub view: TableView,
    pub rows: Vec<TableRow>,
    pub total: usize,
    pub shown: usize,
    pub summary: String,
    /// Every category chip, selected or not
    pub categories: Vec<String>,
    pub has_active_filters: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// Filtered and sorted ranking table
/// GET /api/skills
pub async fn list_skills(
    State(state): State<Arc<SkillApiState>>,
    Query(query): Query<SkillListQuery>,
) -> Result<Json<SkillListResponse>, ApiError> {
    let view = query.to_view()?;
    let result = view.apply(state.store.skills());
    debug!(
        sort = %view.sort_column,
        dir = view.sort_direction.as_str(),
        "Table view: {}",
        result.summary()
    );

    Ok(Json(SkillListResponse {
        rows: result.display_rows(),
        total: result.total,
        shown: result.shown(),
        summary: result.summary(),
        categories: all_categories(state.store.iter()),
        has_active_filters: view.has_active_filters(),
        view,
    }))
}

/// Skill detail
/// GET /api/skills/{slug}
pub async fn get_skill(
    State(state): State<Arc<SkillApiState>>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let detail = SkillDetail::find(&state.store, &slug)
        .ok_or_else(|| ApiError::NotFound(format!("Skill '{}'", slug)))?;
    Ok(Json(&detail).into_response())
}

// ============================================================================
// Router
// ============================================================================

/// Create the skills API router
pub fn skills_router(state: Arc<SkillApiState>) -> Router {
    Router::new()
        .route("/", get(list_skills))
        .route("/{slug}", get(get_skill))
        .with_state(state)
}

// ============================================================================
// Tests
// ============================================================================
