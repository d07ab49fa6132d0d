//! Web Dashboard Module
//!
//! Local-first web interface and read-only JSON API over the skill catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               Dashboard Server               │
//! ├──────────────────────────────────────────────┤
//! │  GET /                   → Static files      │
//! │  GET /api/health         → Health check      │
//! │  GET /api/skills         → Ranking table     │
//! │  GET /api/skills/{slug}  → Skill detail      │
//! │  GET /api/slugs          → Detail routes     │
//! │  GET /api/categories     → Category cards    │
//! │  GET /api/trends         → Trend lists       │
//! │  GET /api/overview       → Headline numbers  │
//! │  GET /api/compare        → Comparison table  │
//! └──────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod server;

pub use api::{
    api_router, health_router, market_router, skills_router, ApiError, DashboardApiState,
    ErrorResponse, HealthResponse, SkillApiState, SkillListQuery, SkillListResponse,
};
pub use config::DashboardConfig;
pub use server::DashboardServer;
