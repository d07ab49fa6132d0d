//! Health Check API
//!
//! Liveness, readiness and a health summary for monitoring.

use crate::skills::SkillStore;
use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Health state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Server start time for uptime calculation
    pub start_time: Instant,
    /// Application version
    pub version: &'static str,
    /// Loaded catalog
    pub store: Arc<SkillStore>,
}

impl AppState {
    pub fn new(store: Arc<SkillStore>) -> Self {
        Self {
            start_time: Instant::now(),
            version: env!("CARGO_PKG_VERSION"),
            store,
        }
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    /// Skills in the loaded catalog
    pub skills: usize,
    /// Timestamp (ISO 8601)
    pub timestamp: String,
}

/// Health check handler
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.version,
        uptime_secs: state.uptime_secs(),
        skills: state.store.len(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Liveness check
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Readiness check: ready once a non-empty catalog is loaded
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.store.is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// Create health check router
pub fn health_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(liveness))
        .route("/readyz", get(readiness))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    #[test]
    fn test_app_state_version() {
        let state = AppState::new(Arc::new(SkillStore::empty()));
        assert!(!state.version.is_empty());
        assert!(state.uptime_secs() < 10);
    }

    #[tokio::test]
    async fn test_health_reports_skill_count() {
        let store = Arc::new(SkillStore::builtin().unwrap());
        let expected = store.len();
        let app = health_router(Arc::new(AppState::new(store)));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["skills"], expected);
    }

    #[tokio::test]
    async fn test_readiness_requires_catalog() {
        let app = health_router(Arc::new(AppState::new(Arc::new(SkillStore::empty()))));

        let response = app
            .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
