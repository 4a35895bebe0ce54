use serde::{Deserialize, Serialize};

use super::HOURS_PER_DAY;

const WEEKDAYS: f64 = 5.0;
const WEEKEND_DAYS: f64 = 2.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// How much personal time a typical week holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeisureProfile {
    pub personal_hours_per_weekday: f64,
    pub leisure_hours_per_weekend_day: f64,
}

impl Default for LeisureProfile {
    fn default() -> Self {
        Self::uniform(4.0)
    }
}

impl LeisureProfile {
    /// Same amount every day of the week.
    pub fn uniform(hours_per_day: f64) -> Self {
        Self {
            personal_hours_per_weekday: hours_per_day,
            leisure_hours_per_weekend_day: hours_per_day,
        }
    }

    pub fn hours_per_week(&self) -> f64 {
        self.personal_hours_per_weekday * WEEKDAYS + self.leisure_hours_per_weekend_day * WEEKEND_DAYS
    }
}

/// Personal time left over the remaining weeks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalTimeProjection {
    pub personal_hours_per_week: f64,
    pub total_personal_hours_remaining: f64,
    /// Whole 24-hour days.
    pub free_days_equivalent: f64,
}

impl PersonalTimeProjection {
    pub fn project(profile: &LeisureProfile, weeks_remaining: i64) -> Self {
        let personal_hours_per_week = profile.hours_per_week();
        let total_personal_hours_remaining = personal_hours_per_week * weeks_remaining as f64;
        Self {
            personal_hours_per_week,
            total_personal_hours_remaining,
            free_days_equivalent: (total_personal_hours_remaining / HOURS_PER_DAY).floor(),
        }
    }
}

/// Work hours still ahead before retirement.
///
/// Counts from `max(current_age, career_start_age)` to `retirement_age` in
/// 365-day years; zero once retirement age is reached.
pub fn remaining_work_hours(
    current_age: i64,
    career_start_age: u32,
    retirement_age: u32,
    work_hours_per_day: f64,
) -> f64 {
    let retirement = i64::from(retirement_age);
    if current_age >= retirement {
        return 0.0;
    }
    let years = (retirement - current_age.max(i64::from(career_start_age))).max(0);
    years as f64 * DAYS_PER_YEAR * work_hours_per_day
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_split() {
        let profile = LeisureProfile {
            personal_hours_per_weekday: 3.0,
            leisure_hours_per_weekend_day: 10.0,
        };
        assert_eq!(profile.hours_per_week(), 35.0);

        let projection = PersonalTimeProjection::project(&profile, 100);
        assert_eq!(projection.total_personal_hours_remaining, 3500.0);
        assert_eq!(projection.free_days_equivalent, 145.0);
    }

    #[test]
    fn test_uniform_profile() {
        assert_eq!(LeisureProfile::uniform(4.0).hours_per_week(), 28.0);
    }

    #[test]
    fn test_remaining_work_hours() {
        assert_eq!(remaining_work_hours(30, 24, 60, 8.0), 30.0 * 365.0 * 8.0);
        assert_eq!(remaining_work_hours(10, 24, 60, 8.0), 36.0 * 365.0 * 8.0);
        assert_eq!(remaining_work_hours(60, 24, 60, 8.0), 0.0);
        assert_eq!(remaining_work_hours(70, 24, 60, 8.0), 0.0);
    }
}
