use chrono::NaiveDate;

use timeleft::allocation::{DailyBudget, TimeAllocation};
use timeleft::calendar::{map_stage, map_stages, Person};
use timeleft::metrics::{LifeKpis, LifeWeekTable};
use timeleft::stages::{default_stages, normalize, retirement_stages, Stage, StageSpec};
use timeleft::{LifeReport, ReportOptions};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn table_for(person: &Person, stages: &[Stage]) -> LifeWeekTable {
    LifeWeekTable::from_intervals(&map_stages(stages, person))
}

fn sample_cases() -> Vec<(Person, Vec<Stage>)> {
    vec![
        (Person::new(date(1988, 5, 19), 76), default_stages(76)),
        (Person::new(date(1988, 5, 19), 50), retirement_stages()),
        (Person::new(date(2000, 2, 29), 81), default_stages(81)),
        // overlapping and out of order
        (
            Person::new(date(1970, 12, 31), 90),
            vec![
                Stage::new("late", 60, 95, "#1"),
                Stage::new("early", 0, 30, "#2"),
                Stage::new("overlap", 20, 40, "#3"),
                Stage::new("empty", 50, 50, "#4"),
                Stage::new("inverted", 45, 35, "#5"),
            ],
        ),
    ]
}

#[test]
fn test_scenario_a_single_stage_lifetime() {
    let person = Person::new(date(1988, 5, 19), 76);
    let table = table_for(&person, &[Stage::new("Vida", 0, 76, "#000")]);

    let days = (date(2064, 5, 19) - date(1988, 5, 19)).num_days();
    assert_eq!(days, 27_759);
    assert_eq!(table.total_weeks, days / 7);
    assert_eq!(table.total_weeks, 3965);
}

#[test]
fn test_scenario_b_weeks_lived() {
    let person = Person::new(date(2000, 1, 1), 80);
    assert_eq!(person.days_lived(date(2024, 1, 1)), 8766);
    assert_eq!(person.weeks_lived(date(2024, 1, 1)), 1252);
}

#[test]
fn test_kpis_mid_life() {
    let person = Person::new(date(2000, 1, 1), 80);
    let table = table_for(&person, &[Stage::new("Vida", 0, 80, "#000")]);
    let kpis = LifeKpis::compute(&table, &person, date(2024, 1, 1));

    // 80 years with 20 leap days
    assert_eq!(table.total_weeks, (80 * 365 + 20) / 7);
    assert_eq!(kpis.total_weeks, 4174);
    assert_eq!(kpis.weeks_lived, 1252);
    assert_eq!(kpis.days_lived, 8766);
    assert_eq!(kpis.weeks_remaining, 4174 - 1252);

    let days_left = (date(2080, 1, 1) - date(2024, 1, 1)).num_days();
    assert_eq!(days_left, 20_454);
    assert_eq!(kpis.years_remaining, days_left / 365);
    assert_eq!(kpis.years_remaining, 56);

    assert_eq!(kpis.percent_lived, 1252.0 / 4174.0 * 100.0);
    assert!(kpis.percent_lived > 29.99 && kpis.percent_lived < 30.0);
}

#[test]
fn test_scenario_c_lived_weeks_by_stage() {
    let person = Person::new(date(2000, 1, 1), 80);
    let stages = vec![Stage::new("A", 0, 5, "#1"), Stage::new("B", 5, 10, "#2")];
    let today = date(2007, 1, 1);

    let table = table_for(&person, &stages);
    let lived = table.lived_weeks(person.weeks_lived(today));

    assert_eq!(lived.get("A (0-5)"), Some(table.rows[0].weeks));
    let two_years = (date(2007, 1, 1) - date(2005, 1, 1)).num_days() / 7;
    assert_eq!(lived.get("B (5-10)"), Some(two_years));
}

#[test]
fn test_scenario_d_hour_thirds() {
    let alloc = TimeAllocation::allocate(7, &DailyBudget::new(8.0, 8.0), true);
    assert_eq!((alloc.sleeping_hours, alloc.working_hours, alloc.personal_hours), (56.0, 56.0, 56.0));
}

#[test]
fn test_scenario_e_no_stages() {
    let person = Person::new(date(1990, 1, 1), 80);
    let table = table_for(&person, &[]);
    assert!(table.is_empty());
    assert_eq!(table.total_weeks, 0);

    let kpis = LifeKpis::compute(&table, &person, date(2020, 1, 1));
    assert_eq!(kpis.percent_lived, 0.0);

    let report = LifeReport::compute(&person, &[], date(2020, 1, 1), &ReportOptions::default());
    assert!(report.table.rows.is_empty());
    assert_eq!(report.lived.total(), 0);
}

#[test]
fn test_weeks_sum_to_total() {
    for (person, stages) in sample_cases() {
        let table = table_for(&person, &stages);
        let sum: i64 = table.rows.iter().map(|r| r.weeks).sum();
        assert_eq!(sum, table.total_weeks);
    }
}

#[test]
fn test_cumulative_percentage_monotone_and_ends_near_100() {
    for (person, stages) in sample_cases() {
        let table = table_for(&person, &stages);
        for pair in table.rows.windows(2) {
            assert!(pair[1].cumulative_percentage >= pair[0].cumulative_percentage);
        }
        let last = table.rows.last().unwrap().cumulative_percentage;
        assert!((last - 100.0).abs() <= 0.1, "ended at {}", last);
    }
}

#[test]
fn test_lived_weeks_bounded() {
    let todays = [date(1900, 1, 1), date(2001, 6, 1), date(2024, 1, 1), date(2200, 1, 1)];
    for (person, stages) in sample_cases() {
        let table = table_for(&person, &stages);
        for today in todays {
            let weeks_lived = person.weeks_lived(today);
            let lived = table.lived_weeks(weeks_lived);
            for (row, entry) in table.rows.iter().zip(lived.iter()) {
                assert!(entry.lived >= 0 && entry.lived <= row.weeks);
            }
            assert!(lived.total() <= weeks_lived.max(0));
        }
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let options = ReportOptions::default();
    for (person, stages) in sample_cases() {
        let first = LifeReport::compute(&person, &stages, date(2024, 3, 1), &options);
        let second = LifeReport::compute(&person, &stages, date(2024, 3, 1), &options);
        assert_eq!(first, second);
    }
}

#[test]
fn test_boundary_stages_are_empty() {
    let person = Person::new(date(1980, 7, 4), 70);
    for age in [0, 10, 70, 120] {
        assert_eq!(map_stage(&Stage::new("point", age, age, "#0"), &person).weeks, 0);
    }
    assert_eq!(map_stage(&Stage::new("beyond", 71, 100, "#0"), &person).weeks, 0);
}

#[test]
fn test_normalized_specs_feed_pipeline() {
    let specs: Vec<StageSpec> = serde_json::from_str(
        r##"[
            {"name": "Niñez", "age_start": 0, "age_end": 12, "color": "#FFD700"},
            {"name": "Resto", "age_start": 12, "age_end": 200, "color": "#F8F8FF"}
        ]"##,
    )
    .unwrap();
    let stages = normalize(&specs).unwrap();
    let person = Person::new(date(1995, 3, 10), 80);
    let table = table_for(&person, &stages);

    let whole = map_stage(&Stage::new("all", 0, 80, "#0"), &person).weeks;
    // two adjacent stages can lose at most one truncated week at the seam
    assert!(whole - table.total_weeks <= 1);
    assert_eq!(table.rows[1].label, "Resto (12-200)");
}
