//! Skill Catalog
//!
//! Static, read-only collection of professional skills with market metrics.
//!
//! # Catalog Format
//!
//! Skills are defined in TOML (or the equivalent JSON) using the same field
//! names the dashboard API emits:
//!
//! ```toml
//! [[skills]]
//! id = "7"
//! rank = 7
//! name = "Rust"
//! slug = "rust"
//! category = ["Languages", "Systems"]
//! description = "Memory-safe systems language"
//! marketScore = 86
//! avgSalary = 148000
//! salaryRange = { min = 110000, max = 200000 }
//! jobOpenings = 5200
//! growthRate = { day = 0.6, week = 3.2, month = 7.4, year = 35.1 }
//! demandLevel = "High"
//! trendData = [{ date = "2024-06-01", salary = 148000, openings = 5200 }]
//! ```
//!
//! The store validates records once at load; after that nothing mutates it.

pub mod store;
pub mod types;

pub use store::{CatalogFile, SkillStore, StoreError, BUILTIN_CATALOG};
pub use types::{
    DemandLevel, GrowthRate, LearningResource, SalaryRange, Skill, SkillValidationError,
    TrendPoint,
};
