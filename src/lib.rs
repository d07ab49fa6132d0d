//! Skillboard
//!
//! Skills-market dashboard: ranks professional skills by market score,
//! salary, job openings and growth, with search, category filters, trend
//! lists, per-skill detail and side-by-side comparison.
//!
//! # Architecture
//!
//! ```text
//! skills.toml / .json ──► SkillStore ──► table (filter ► sort ► rows)
//!                             │      ├──► insights (categories, trends, overview)
//!                             │      ├──► detail (growth, chart, related)
//!                             │      └──► compare (up to 4 side by side)
//!                             ▼
//!                      Dashboard (axum)  ──► JSON API + embedded UI
//! ```
//!
//! The store is loaded once and never mutated. Every view is recomputed
//! from it by pure functions, so the engine has no caches to invalidate.

pub mod compare;
pub mod config;
pub mod dashboard;
pub mod detail;
pub mod format;
pub mod insights;
pub mod skills;
pub mod table;

pub use compare::{Comparison, ComparisonError, ComparisonTable};
pub use config::Config;
pub use dashboard::{DashboardConfig, DashboardServer};
pub use detail::{RelatedSkill, SkillDetail};
pub use insights::{group_by_category, CategorySummary, MarketOverview, TrendsReport};
pub use skills::{DemandLevel, Skill, SkillStore, StoreError};
pub use table::{SortColumn, SortDirection, TableError, TableRow, TableView};
