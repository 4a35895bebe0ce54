//! Life Report
//!
//! One-shot pipeline: stages are mapped onto the calendar, aggregated into
//! the week table, split into hour buckets and rendered as insight lines.
//! Every call starts from scratch; nothing is cached between runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

use crate::allocation::{remaining_work_hours, DailyBudget, LeisureProfile, PersonalTimeProjection, TableAllocation};
use crate::calendar::{map_stages, Person, StageInterval};
use crate::insights::{self, InsightContext};
use crate::metrics::{LifeKpis, LifeWeekTable, LivedWeeksByStage, WeekGrid};
use crate::stages::defaults::CAREER_STAGE;
use crate::stages::Stage;

/// Knobs for the hour accounting part of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub budget: DailyBudget,
    /// Stage names whose days accrue work hours.
    pub working_stages: BTreeSet<String>,
    pub leisure: LeisureProfile,
    pub career_start_age: u32,
    pub retirement_age: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            budget: DailyBudget::default(),
            working_stages: [CAREER_STAGE.to_string()].into_iter().collect(),
            leisure: LeisureProfile::default(),
            career_start_age: 24,
            retirement_age: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeReport {
    pub person: Person,
    pub today: NaiveDate,
    pub estimated_end_date: NaiveDate,
    pub intervals: Vec<StageInterval>,
    pub table: LifeWeekTable,
    pub lived: LivedWeeksByStage,
    pub kpis: LifeKpis,
    pub allocation: TableAllocation,
    pub projection: PersonalTimeProjection,
    pub remaining_work_hours: f64,
    /// Base lines, the ones written to the insights export.
    pub insights: Vec<String>,
    /// Lines drawn from the projection, shown on screen only.
    pub projection_insights: Vec<String>,
}

impl LifeReport {
    pub fn compute(person: &Person, stages: &[Stage], today: NaiveDate, options: &ReportOptions) -> Self {
        let intervals = map_stages(stages, person);
        let table = LifeWeekTable::from_intervals(&intervals);
        let kpis = LifeKpis::compute(&table, person, today);
        let lived = table.lived_weeks(kpis.weeks_lived);

        let allocation = TableAllocation::compute(&table, &options.budget, &options.working_stages);
        let projection = PersonalTimeProjection::project(&options.leisure, kpis.weeks_remaining);
        let remaining_work_hours = remaining_work_hours(
            person.age_years(today),
            options.career_start_age,
            options.retirement_age,
            options.budget.work_hours_per_day,
        );

        let insights = insights::generate(&InsightContext::new(&kpis, &lived));
        let projection_insights = insights::projection_insights(kpis.weeks_remaining, &projection);

        info!(
            "Computed {} stages: {} total weeks, {} lived ({:.2}%)",
            table.rows.len(),
            table.total_weeks,
            kpis.weeks_lived,
            kpis.percent_lived
        );

        Self {
            person: *person,
            today,
            estimated_end_date: person.estimated_end_date(),
            intervals,
            table,
            lived,
            kpis,
            allocation,
            projection,
            remaining_work_hours,
            insights,
            projection_insights,
        }
    }

    pub fn insight_context(&self) -> InsightContext {
        InsightContext::new(&self.kpis, &self.lived).with_projection(self.projection)
    }

    pub fn grid(&self, columns: usize) -> WeekGrid {
        WeekGrid::layout(&self.table, columns)
    }
}
