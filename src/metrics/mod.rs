//! Metrics Module
//!
//! Turns mapped stage intervals into the week table, the per-stage lived
//! week breakdown, and the headline KPIs.

pub mod grid;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{Person, StageInterval};

pub use grid::{GridCell, WeekGrid};

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One stage row of the life table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekRow {
    pub label: String,
    pub name: String,
    pub color: String,
    pub weeks: i64,
    pub percentage: f64,
    pub cumulative_percentage: f64,
}

/// Ordered stage rows plus the derived percentage columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifeWeekTable {
    pub rows: Vec<WeekRow>,
    pub total_weeks: i64,
}

impl LifeWeekTable {
    /// Builds the table in interval order.
    ///
    /// Percentages are rounded to 2 decimals and the cumulative column is the
    /// running sum of those rounded values. With zero total weeks every
    /// percentage is zero.
    pub fn from_intervals(intervals: &[StageInterval]) -> Self {
        let total_weeks: i64 = intervals.iter().map(|i| i.weeks).sum();
        let mut running = 0.0;

        let rows = intervals
            .iter()
            .map(|interval| {
                let percentage = if total_weeks > 0 {
                    round2(interval.weeks as f64 / total_weeks as f64 * 100.0)
                } else {
                    0.0
                };
                running += percentage;
                WeekRow {
                    label: interval.label(),
                    name: interval.stage.name.clone(),
                    color: interval.stage.color.clone(),
                    weeks: interval.weeks,
                    percentage,
                    cumulative_percentage: round2(running),
                }
            })
            .collect();

        Self { rows, total_weeks }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits `weeks_lived` across the rows with a single running-total scan.
    pub fn lived_weeks(&self, weeks_lived: i64) -> LivedWeeksByStage {
        let mut acc = 0;
        let entries = self
            .rows
            .iter()
            .map(|row| {
                let lived = (weeks_lived - acc).clamp(0, row.weeks);
                acc += row.weeks;
                LivedWeeks {
                    label: row.label.clone(),
                    lived,
                }
            })
            .collect();
        LivedWeeksByStage { entries }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivedWeeks {
    pub label: String,
    pub lived: i64,
}

/// Weeks already elapsed in each stage, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivedWeeksByStage {
    pub entries: Vec<LivedWeeks>,
}

impl LivedWeeksByStage {
    pub fn get(&self, label: &str) -> Option<i64> {
        self.entries.iter().find(|e| e.label == label).map(|e| e.lived)
    }

    pub fn total(&self) -> i64 {
        self.entries.iter().map(|e| e.lived).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LivedWeeks> {
        self.entries.iter()
    }
}

/// Headline figures for a person at a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeKpis {
    pub total_weeks: i64,
    pub weeks_lived: i64,
    /// Negative once the estimate has been outlived.
    pub weeks_remaining: i64,
    /// Capped at 100, zero for an empty table.
    pub percent_lived: f64,
    pub years_remaining: i64,
    pub days_lived: i64,
}

impl LifeKpis {
    pub fn compute(table: &LifeWeekTable, person: &Person, today: NaiveDate) -> Self {
        let total_weeks = table.total_weeks;
        let weeks_lived = person.weeks_lived(today);
        let percent_lived = if total_weeks > 0 {
            (weeks_lived as f64 / total_weeks as f64 * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            total_weeks,
            weeks_lived,
            weeks_remaining: total_weeks - weeks_lived,
            percent_lived,
            years_remaining: person.days_until_end(today).div_euclid(365).max(0),
            days_lived: person.days_lived(today),
        }
    }
}
