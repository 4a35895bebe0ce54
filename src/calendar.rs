//! Calendar Mapping
//!
//! Resolves stages (age ranges) into absolute date intervals for one person.
//! Years are added by keeping month and day and shifting the year, so
//! week counts match a plain "same date N years later" reading of ages.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::stages::Stage;

/// The subject of a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub birth_date: NaiveDate,
    pub life_expectancy_years: u32,
}

impl Person {
    pub fn new(birth_date: NaiveDate, life_expectancy_years: u32) -> Self {
        Self {
            birth_date,
            life_expectancy_years,
        }
    }

    /// Birth date advanced by the life expectancy.
    pub fn estimated_end_date(&self) -> NaiveDate {
        shift_years(self.birth_date, self.life_expectancy_years)
    }

    /// Days elapsed since birth. Negative when `today` precedes the birth date.
    pub fn days_lived(&self, today: NaiveDate) -> i64 {
        (today - self.birth_date).num_days()
    }

    /// Whole weeks elapsed since birth (floor division).
    pub fn weeks_lived(&self, today: NaiveDate) -> i64 {
        self.days_lived(today).div_euclid(7)
    }

    /// Days left until the estimated end date; negative once it has passed.
    pub fn days_until_end(&self, today: NaiveDate) -> i64 {
        (self.estimated_end_date() - today).num_days()
    }

    /// Age in whole 365-day years.
    pub fn age_years(&self, today: NaiveDate) -> i64 {
        self.days_lived(today).div_euclid(365)
    }
}

/// Shifts `date` forward by `years`, keeping month and day.
///
/// Feb 29 landing on a non-leap year becomes Feb 28. Years beyond the
/// representable range saturate to [`NaiveDate::MAX`].
pub fn shift_years(date: NaiveDate, years: u32) -> NaiveDate {
    let year = date
        .year()
        .saturating_add(i32::try_from(years).unwrap_or(i32::MAX));

    if let Some(shifted) = NaiveDate::from_ymd_opt(year, date.month(), date.day()) {
        return shifted;
    }
    match NaiveDate::from_ymd_opt(year, date.month(), 28) {
        Some(clamped) => {
            debug!("{} + {}y does not exist, using {}", date, years, clamped);
            clamped
        }
        None => NaiveDate::MAX,
    }
}

/// Whole weeks from `start` to `end`, truncated, never negative.
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().div_euclid(7).max(0)
}

/// A stage resolved against a person's lifespan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInterval {
    pub stage: Stage,
    pub calendar_start: NaiveDate,
    pub calendar_end: NaiveDate,
    pub weeks: i64,
}

impl StageInterval {
    pub fn label(&self) -> String {
        self.stage.label()
    }
}

/// Clips a stage to `[birth_date, estimated_end_date]` and counts its weeks.
pub fn map_stage(stage: &Stage, person: &Person) -> StageInterval {
    let birth = person.birth_date;
    let calendar_start = birth.max(shift_years(birth, stage.age_start));
    let calendar_end = shift_years(birth, stage.age_end).min(person.estimated_end_date());
    let weeks = weeks_between(calendar_start, calendar_end);

    if weeks == 0 {
        debug!("Stage '{}' collapses to zero weeks", stage.label());
    }

    StageInterval {
        stage: stage.clone(),
        calendar_start,
        calendar_end,
        weeks,
    }
}

/// Maps every stage in caller order. Overlaps are not resolved.
pub fn map_stages(stages: &[Stage], person: &Person) -> Vec<StageInterval> {
    stages.iter().map(|stage| map_stage(stage, person)).collect()
}
