//! Display Rows
//!
//! Per-skill, display-ready cells for the ranking table.

use crate::format::{format_number, format_percentage, format_salary};
use crate::skills::{DemandLevel, Skill, TrendPoint};
use serde::Serialize;

/// Category badges shown under the skill name
pub const ROW_CATEGORY_BADGES: usize = 2;
/// Trailing samples drawn in the row sparkline
pub const SPARKLINE_SAMPLES: usize = 7;
const SPARKLINE_WIDTH: f64 = 100.0;
const SPARKLINE_HEIGHT: f64 = 30.0;

/// Direction of a signed metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn from_value(value: f64) -> Self {
        if value > 0.0 {
            Self::Up
        } else if value < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }
}

/// A growth cell: direction icon plus unsigned magnitude
#[derive(Debug, Clone, Serialize)]
pub struct GrowthCell {
    pub value: f64,
    pub direction: TrendDirection,
    /// Unsigned magnitude, the direction carries the sign
    pub display: String,
}

impl GrowthCell {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            direction: TrendDirection::from_value(value),
            display: format_percentage(value.abs()),
        }
    }
}

/// One ranking-table row
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    /// Static catalog rank, never recomputed for the current view
    pub rank: u32,
    pub name: String,
    pub slug: String,
    pub categories: Vec<String>,
    pub market_score: f64,
    pub avg_salary: String,
    pub job_openings: String,
    pub week_growth: GrowthCell,
    pub demand_level: DemandLevel,
    pub demand_badge: &'static str,
    /// `x,y` pairs in a 100x30 box
    pub sparkline: String,
}

impl From<&Skill> for TableRow {
    fn from(skill: &Skill) -> Self {
        Self {
            rank: skill.rank,
            name: skill.name.clone(),
            slug: skill.slug.clone(),
            categories: skill
                .category
                .iter()
                .take(ROW_CATEGORY_BADGES)
                .cloned()
                .collect(),
            market_score: skill.market_score,
            avg_salary: format_salary(skill.avg_salary),
            job_openings: format_number(skill.job_openings),
            week_growth: GrowthCell::new(skill.growth_rate.week),
            demand_level: skill.demand_level,
            demand_badge: skill.demand_level.badge_variant(),
            sparkline: sparkline_points(&skill.trend_data),
        }
    }
}

/// Polyline points for the last [`SPARKLINE_SAMPLES`] salaries
///
/// Each salary is scaled against the window maximum; x is spread over the
/// full window width even when fewer samples exist.
pub fn sparkline_points(trend: &[TrendPoint]) -> String {
    let window = &trend[trend.len().saturating_sub(SPARKLINE_SAMPLES)..];
    let max = window.iter().map(|p| p.salary).fold(0.0_f64, f64::max);
    let step = SPARKLINE_WIDTH / (SPARKLINE_SAMPLES - 1) as f64;

    window
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = i as f64 * step;
            let y = if max > 0.0 {
                SPARKLINE_HEIGHT - (p.salary / max) * SPARKLINE_HEIGHT
            } else {
                SPARKLINE_HEIGHT
            };
            format!("{},{}", round2(x), round2(y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
