//! Time Allocation
//!
//! Splits spans of days into sleeping, working and personal hours from
//! per-day budgets. Budgets are not validated: when sleep plus work exceed
//! a day the personal bucket goes negative and a warning rides along.

pub mod projection;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

use crate::metrics::{round2, LifeWeekTable};

pub use projection::{remaining_work_hours, LeisureProfile, PersonalTimeProjection};

pub const HOURS_PER_DAY: f64 = 24.0;

/// Daily hour budgets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBudget {
    pub sleep_hours_per_day: f64,
    pub work_hours_per_day: f64,
}

impl Default for DailyBudget {
    fn default() -> Self {
        Self {
            sleep_hours_per_day: 8.0,
            work_hours_per_day: 8.0,
        }
    }
}

impl DailyBudget {
    pub fn new(sleep_hours_per_day: f64, work_hours_per_day: f64) -> Self {
        Self {
            sleep_hours_per_day,
            work_hours_per_day,
        }
    }

    fn committed(&self, working: bool) -> f64 {
        let work = if working { self.work_hours_per_day } else { 0.0 };
        self.sleep_hours_per_day + work
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AllocationWarning {
    /// Sleep and work claim more than 24 hours a day.
    OverCommitted { excess_hours_per_day: f64 },
}

/// Hour buckets for a span of days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAllocation {
    pub days: i64,
    pub sleeping_hours: f64,
    pub working_hours: f64,
    /// May be negative, see [`AllocationWarning`].
    pub personal_hours: f64,
    pub warning: Option<AllocationWarning>,
}

/// Percentage of the span's total hours held by each bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourShares {
    pub sleeping: f64,
    pub working: f64,
    pub personal: f64,
}

impl TimeAllocation {
    /// Allocates `days` with `budget`; work hours count only when `working`.
    pub fn allocate(days: i64, budget: &DailyBudget, working: bool) -> Self {
        let span = days as f64;
        let sleeping_hours = span * budget.sleep_hours_per_day;
        let working_hours = if working { span * budget.work_hours_per_day } else { 0.0 };
        let personal_hours = span * HOURS_PER_DAY - sleeping_hours - working_hours;

        let excess = budget.committed(working) - HOURS_PER_DAY;
        let warning = if excess > 0.0 {
            warn!("Sleep and work budgets exceed a day by {}h, personal time is negative", excess);
            Some(AllocationWarning::OverCommitted { excess_hours_per_day: excess })
        } else {
            None
        };

        Self {
            days,
            sleeping_hours,
            working_hours,
            personal_hours,
            warning,
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.days as f64 * HOURS_PER_DAY
    }

    /// `None` for an empty span.
    pub fn shares(&self) -> Option<HourShares> {
        let total = self.total_hours();
        if total <= 0.0 {
            return None;
        }
        Some(HourShares {
            sleeping: round2(self.sleeping_hours / total * 100.0),
            working: round2(self.working_hours / total * 100.0),
            personal: round2(self.personal_hours / total * 100.0),
        })
    }

    fn merge(self, other: &TimeAllocation) -> Self {
        Self {
            days: self.days + other.days,
            sleeping_hours: self.sleeping_hours + other.sleeping_hours,
            working_hours: self.working_hours + other.working_hours,
            personal_hours: self.personal_hours + other.personal_hours,
            warning: self.warning.or(other.warning),
        }
    }
}

impl Default for TimeAllocation {
    fn default() -> Self {
        Self {
            days: 0,
            sleeping_hours: 0.0,
            working_hours: 0.0,
            personal_hours: 0.0,
            warning: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageAllocation {
    pub label: String,
    pub allocation: TimeAllocation,
}

/// Hour buckets per table row and for the whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableAllocation {
    pub stages: Vec<StageAllocation>,
    pub total: TimeAllocation,
}

impl TableAllocation {
    /// Rows whose stage name is in `working_stages` accrue work hours.
    pub fn compute(table: &LifeWeekTable, budget: &DailyBudget, working_stages: &BTreeSet<String>) -> Self {
        let stages: Vec<StageAllocation> = table
            .rows
            .iter()
            .map(|row| StageAllocation {
                label: row.label.clone(),
                allocation: TimeAllocation::allocate(row.weeks * 7, budget, working_stages.contains(&row.name)),
            })
            .collect();

        let total = stages
            .iter()
            .fold(TimeAllocation::default(), |acc, s| acc.merge(&s.allocation));

        Self { stages, total }
    }

    pub fn stage(&self, label: &str) -> Option<&TimeAllocation> {
        self.stages.iter().find(|s| s.label == label).map(|s| &s.allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::WeekRow;

    fn row(name: &str, weeks: i64) -> WeekRow {
        WeekRow {
            label: format!("{} (0-1)", name),
            name: name.to_string(),
            color: "#000".to_string(),
            weeks,
            percentage: 0.0,
            cumulative_percentage: 0.0,
        }
    }

    #[test]
    fn test_week_of_thirds() {
        let alloc = TimeAllocation::allocate(7, &DailyBudget::new(8.0, 8.0), true);
        assert_eq!(alloc.sleeping_hours, 56.0);
        assert_eq!(alloc.working_hours, 56.0);
        assert_eq!(alloc.personal_hours, 56.0);
        assert!(alloc.warning.is_none());
    }

    #[test]
    fn test_non_working_span() {
        let alloc = TimeAllocation::allocate(10, &DailyBudget::default(), false);
        assert_eq!(alloc.working_hours, 0.0);
        assert_eq!(alloc.personal_hours, 160.0);
    }

    #[test]
    fn test_overcommitted_budget_surfaces_negative() {
        let alloc = TimeAllocation::allocate(2, &DailyBudget::new(10.0, 16.0), true);
        assert_eq!(alloc.personal_hours, -4.0);
        assert_eq!(alloc.warning, Some(AllocationWarning::OverCommitted { excess_hours_per_day: 2.0 }));
    }

    #[test]
    fn test_shares() {
        let alloc = TimeAllocation::allocate(3, &DailyBudget::new(8.0, 4.0), true);
        let shares = alloc.shares().unwrap();
        assert_eq!(shares.sleeping, 33.33);
        assert_eq!(shares.working, 16.67);
        assert_eq!(shares.personal, 50.0);
        assert!(TimeAllocation::allocate(0, &DailyBudget::default(), true).shares().is_none());
    }

    #[test]
    fn test_table_allocation_working_set() {
        let table = LifeWeekTable {
            rows: vec![row("school", 2), row("career", 3)],
            total_weeks: 5,
        };
        let working: BTreeSet<String> = ["career".to_string()].into_iter().collect();
        let result = TableAllocation::compute(&table, &DailyBudget::default(), &working);

        assert_eq!(result.stage("school (0-1)").unwrap().working_hours, 0.0);
        assert_eq!(result.stage("career (0-1)").unwrap().working_hours, 21.0 * 8.0);
        assert_eq!(result.total.days, 35);
        assert_eq!(result.total.sleeping_hours, 35.0 * 8.0);
        assert_eq!(
            result.total.sleeping_hours + result.total.working_hours + result.total.personal_hours,
            35.0 * 24.0
        );
    }
}
