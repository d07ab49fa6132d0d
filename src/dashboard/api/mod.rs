//! Dashboard API Endpoints
//!
//! Read-only JSON API over the skill catalog.

pub mod health;
pub mod market;
pub mod skills;

use crate::compare::ComparisonError;
use crate::skills::SkillStore;
use crate::table::TableError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use serde::Serialize;
use std::sync::Arc;

pub use health::{health_router, AppState, HealthResponse};
pub use market::{market_router, CategoryCard, CompareQuery, TrendEntry, TrendsResponse};
pub use skills::{skills_router, SkillApiState, SkillListQuery, SkillListResponse};

/// Combined dashboard API state
#[derive(Clone)]
pub struct DashboardApiState {
    /// Health check state
    pub health: Arc<AppState>,
    /// Catalog state for skill and market endpoints
    pub skills: Arc<SkillApiState>,
}

impl DashboardApiState {
    /// Share one store across every endpoint
    pub fn new(store: Arc<SkillStore>) -> Self {
        Self {
            health: Arc::new(AppState::new(store.clone())),
            skills: Arc::new(SkillApiState::new(store)),
        }
    }
}

/// Create the full API router
///
/// Routes:
/// - GET /health, /healthz, /readyz - Health checks
/// - GET /skills - Ranking table (`q`, `category`, `sort`, `dir`)
/// - GET /skills/{slug} - Skill detail
/// - GET /slugs - Every detail route
/// - GET /categories - Category summaries
/// - GET /trends - Gainers, losers, emerging, highest paying, most in demand
/// - GET /overview - Headline numbers
/// - GET /compare - Side-by-side comparison (`slugs`)
pub fn api_router(state: DashboardApiState) -> Router {
    health_router(state.health)
        .nest("/skills", skills_router(state.skills.clone()))
        .merge(market_router(state.skills))
}

/// API error, rendered as `{error, message}` JSON
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidTable(#[from] TableError),

    #[error("{0}")]
    InvalidComparison(#[from] ComparisonError),

    #[error("{0} not found")]
    NotFound(String),
}

/// Error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::InvalidTable(_) => (StatusCode::BAD_REQUEST, "invalid_parameter"),
            ApiError::InvalidComparison(_) => (StatusCode::BAD_REQUEST, "invalid_comparison"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        };

        (status, Json(ErrorResponse::new(code, &self.to_string()))).into_response()
    }
}
