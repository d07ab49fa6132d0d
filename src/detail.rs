//! Skill Detail
//!
//! Everything the per-skill page shows: headline stats, growth by period,
//! the salary chart series and related-skill links.

use crate::format::{format_chart_date, format_number, format_salary, format_signed_percentage};
use crate::skills::{DemandLevel, LearningResource, Skill, SkillStore};
use crate::table::TrendDirection;
use serde::Serialize;

/// A related skill reference, resolved against the store at render time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RelatedSkill {
    /// Known skill, navigable by slug
    Linked { name: String, slug: String },
    /// Name with no matching skill, shown as a plain label
    Unlinked { name: String },
}

impl RelatedSkill {
    pub fn name(&self) -> &str {
        match self {
            Self::Linked { name, .. } | Self::Unlinked { name } => name,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Linked { slug, .. } => Some(slug),
            Self::Unlinked { .. } => None,
        }
    }
}

/// Resolve a skill's related names; misses degrade to [`RelatedSkill::Unlinked`]
pub fn related_skills(store: &SkillStore, skill: &Skill) -> Vec<RelatedSkill> {
    skill
        .related_skills
        .iter()
        .map(|name| match store.get_by_name(name) {
            Some(related) => RelatedSkill::Linked {
                name: name.clone(),
                slug: related.slug.clone(),
            },
            None => RelatedSkill::Unlinked { name: name.clone() },
        })
        .collect()
}

/// Growth for one period
#[derive(Debug, Clone, Serialize)]
pub struct PeriodGrowth {
    pub period: &'static str,
    pub value: f64,
    pub display: String,
    pub direction: TrendDirection,
}

impl PeriodGrowth {
    fn new(period: &'static str, value: f64) -> Self {
        Self {
            period,
            value,
            display: format_signed_percentage(value),
            direction: TrendDirection::from_value(value),
        }
    }
}

/// One chart sample
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    /// Axis label (`Jan 05`)
    pub label: String,
    pub salary: f64,
    pub salary_display: String,
    pub openings: u64,
}

/// Detail page model
#[derive(Debug, Clone, Serialize)]
pub struct SkillDetail<'a> {
    pub skill: &'a Skill,
    pub demand_badge: &'static str,
    pub demand_label: String,
    pub avg_salary: String,
    pub salary_range: String,
    pub job_openings: String,
    pub year_growth: PeriodGrowth,
    pub growth: Vec<PeriodGrowth>,
    pub chart: Vec<ChartPoint>,
    pub related: Vec<RelatedSkill>,
    pub learning_resources: &'a [LearningResource],
}

impl<'a> SkillDetail<'a> {
    /// Look up a skill by slug; `None` means the page does not exist
    pub fn find(store: &'a SkillStore, slug: &str) -> Option<Self> {
        store.get_by_slug(slug).map(|skill| Self::build(store, skill))
    }

    pub fn build(store: &SkillStore, skill: &'a Skill) -> Self {
        let rate = &skill.growth_rate;
        Self {
            skill,
            demand_badge: skill.demand_level.badge_variant(),
            demand_label: demand_label(skill.demand_level),
            avg_salary: format_salary(skill.avg_salary),
            salary_range: format!(
                "Range: {} - {}",
                format_salary(skill.salary_range.min),
                format_salary(skill.salary_range.max)
            ),
            job_openings: format_number(skill.job_openings),
            year_growth: PeriodGrowth::new("1y", rate.year),
            growth: vec![
                PeriodGrowth::new("24h", rate.day),
                PeriodGrowth::new("7d", rate.week),
                PeriodGrowth::new("30d", rate.month),
            ],
            chart: skill
                .trend_data
                .iter()
                .map(|p| ChartPoint {
                    label: format_chart_date(p.date),
                    salary: p.salary,
                    salary_display: format_salary(p.salary),
                    openings: p.openings,
                })
                .collect(),
            related: related_skills(store, skill),
            learning_resources: skill.learning_resources.as_deref().unwrap_or(&[]),
        }
    }
}

fn demand_label(level: DemandLevel) -> String {
    format!("{} Demand", level)
}
