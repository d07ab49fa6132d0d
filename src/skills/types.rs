//! Skill Type Definitions
//!
//! Core data structures for the skill catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single professional skill with its market metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Unique identifier
    pub id: String,
    /// Static global rank (1..N by market score at catalog creation)
    pub rank: u32,
    /// Display name
    pub name: String,
    /// URL-safe unique name
    pub slug: String,
    /// Category labels (never empty)
    pub category: Vec<String>,
    /// Human-readable description
    pub description: String,
    /// Composite market score (0-100)
    pub market_score: f64,
    /// Average yearly salary in USD
    pub avg_salary: f64,
    /// Salary range in USD
    pub salary_range: SalaryRange,
    /// Open positions
    pub job_openings: u64,
    /// Signed growth percentages
    pub growth_rate: GrowthRate,
    /// Demand classification
    pub demand_level: DemandLevel,
    /// Chronological salary/openings samples
    #[serde(default)]
    pub trend_data: Vec<TrendPoint>,
    /// Names of related skills (may not exist in the catalog)
    #[serde(default)]
    pub related_skills: Vec<String>,
    /// Companies hiring for this skill
    #[serde(default)]
    pub top_companies: Vec<String>,
    /// Optional learning links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_resources: Option<Vec<LearningResource>>,
}

impl Skill {
    /// Check if the skill belongs to a category (exact label match)
    pub fn in_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }

    /// Validate the producer-side invariants of a single record
    pub fn validate(&self) -> Result<(), SkillValidationError> {
        if self.id.is_empty() {
            return Err(SkillValidationError::MissingField("id".to_string()));
        }
        if self.name.is_empty() {
            return Err(SkillValidationError::MissingField("name".to_string()));
        }
        if self.slug.is_empty()
            || !self
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SkillValidationError::InvalidSlug(self.slug.clone()));
        }
        if self.category.is_empty() {
            return Err(SkillValidationError::EmptyCategories(self.slug.clone()));
        }
        if !(0.0..=100.0).contains(&self.market_score) {
            return Err(SkillValidationError::ScoreOutOfRange {
                slug: self.slug.clone(),
                score: self.market_score,
            });
        }
        if self.salary_range.min > self.salary_range.max {
            return Err(SkillValidationError::InvertedSalaryRange {
                slug: self.slug.clone(),
                min: self.salary_range.min,
                max: self.salary_range.max,
            });
        }
        if self.trend_data.windows(2).any(|w| w[0].date > w[1].date) {
            return Err(SkillValidationError::UnorderedTrendData(self.slug.clone()));
        }
        Ok(())
    }
}

/// Salary range (min <= max)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

/// Growth percentages over four windows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrowthRate {
    pub day: f64,
    pub week: f64,
    pub month: f64,
    pub year: f64,
}

/// Market demand level, ordered Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Badge variant used when rendering the level
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Self::High => "success",
            Self::Medium => "secondary",
            Self::Low => "outline",
        }
    }
}

impl std::fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sample of the salary/openings time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub salary: f64,
    pub openings: u64,
}

/// A (label, URL) learning link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub name: String,
    pub url: String,
}

/// Skill validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid slug: '{0}' (lowercase letters, digits and '-' only)")]
    InvalidSlug(String),

    #[error("Skill '{0}' has no categories")]
    EmptyCategories(String),

    #[error("Skill '{slug}' has market score {score} outside 0-100")]
    ScoreOutOfRange { slug: String, score: f64 },

    #[error("Skill '{slug}' has salary range min {min} > max {max}")]
    InvertedSalaryRange { slug: String, min: f64, max: f64 },

    #[error("Skill '{0}' has trend data out of chronological order")]
    UnorderedTrendData(String),

    #[error("Duplicate skill id: {0}")]
    DuplicateId(String),

    #[error("Duplicate skill slug: {0}")]
    DuplicateSlug(String),
}


#[cfg(test)]
mod tests {
    use super::fixtures::skill;
    use super::*;

    #[test]
    fn test_valid_skill_passes() {
        assert!(skill("Rust", &["Languages"]).validate().is_ok());
    }

    #[test]
    fn test_empty_categories_rejected() {
        let s = skill("Rust", &[]);
        assert_eq!(
            s.validate(),
            Err(SkillValidationError::EmptyCategories("rust".to_string()))
        );
    }

    #[test]
    fn test_invalid_slug_rejected() {
        let mut s = skill("Rust", &["Languages"]);
        s.slug = "C#".to_string();
        assert!(matches!(
            s.validate(),
            Err(SkillValidationError::InvalidSlug(_))
        ));
    }

    #[test]
    fn test_inverted_salary_range_rejected() {
        let mut s = skill("Rust", &["Languages"]);
        s.salary_range = SalaryRange {
            min: 200_000.0,
            max: 100_000.0,
        };
        assert!(matches!(
            s.validate(),
            Err(SkillValidationError::InvertedSalaryRange { .. })
        ));
    }

    #[test]
    fn test_salary_outside_range_is_not_enforced() {
        let mut s = skill("Rust", &["Languages"]);
        s.avg_salary = 500_000.0;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_unordered_trend_data_rejected() {
        let mut s = skill("Rust", &["Languages"]);
        let point = |d: u32| TrendPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
            salary: 100_000.0,
            openings: 10,
        };
        s.trend_data = vec![point(2), point(1)];
        assert!(matches!(
            s.validate(),
            Err(SkillValidationError::UnorderedTrendData(_))
        ));
    }

    #[test]
    fn test_demand_level_ordering() {
        assert!(DemandLevel::Low < DemandLevel::Medium);
        assert!(DemandLevel::Medium < DemandLevel::High);
        assert_eq!(DemandLevel::High.badge_variant(), "success");
        assert_eq!(DemandLevel::Low.to_string(), "Low");
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = serde_json::to_value(skill("Rust", &["Languages"])).unwrap();
        assert!(json["avgSalary"].is_number());
        assert!(json["growthRate"]["week"].is_number());
        assert_eq!(json["demandLevel"], "Medium");
        assert!(json.get("learningResources").is_none());
    }
}
