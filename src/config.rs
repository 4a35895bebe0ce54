//! Configuration
//!
//! JSON-backed settings with `TIMELEFT_*` environment overrides. Text input
//! (dates, numbers) is parsed leniently: anything malformed falls back to a
//! fixed default and is logged instead of failing the run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tracing::{info, warn};

use crate::allocation::{DailyBudget, LeisureProfile};
use crate::calendar::Person;
use crate::report::ReportOptions;
use crate::stages::defaults::{CAREER_STAGE, DEFAULT_BIRTH_DATE, DEFAULT_LIFE_EXPECTANCY, DEFAULT_NAME};
use crate::stages::{default_stages, normalize, order_by_start, Stage, StageError, StageSpec};

pub const ENV_PREFIX: &str = "TIMELEFT_";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeleftConfig {
    pub name: String,
    /// ISO `YYYY-MM-DD`, parsed leniently.
    pub birth_date: String,
    pub life_expectancy: u32,
    pub stages: Vec<StageSpec>,
    pub sort_stages: bool,
    pub sleep_hours_per_day: f64,
    pub work_hours_per_day: f64,
    pub working_stages: BTreeSet<String>,
    pub career_start_age: u32,
    pub retirement_age: u32,
    pub personal_hours_per_weekday: f64,
    pub leisure_hours_per_weekend_day: f64,
    pub output_dir: PathBuf,
}

impl Default for TimeleftConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            birth_date: DEFAULT_BIRTH_DATE.to_string(),
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
            stages: default_specs(DEFAULT_LIFE_EXPECTANCY),
            sort_stages: false,
            sleep_hours_per_day: 8.0,
            work_hours_per_day: 8.0,
            working_stages: [CAREER_STAGE.to_string()].into_iter().collect(),
            career_start_age: 24,
            retirement_age: 60,
            personal_hours_per_weekday: 4.0,
            leisure_hours_per_weekend_day: 4.0,
            output_dir: PathBuf::from("."),
        }
    }
}

impl TimeleftConfig {
    /// Applies overrides from a key lookup (`NAME`, `BIRTH_DATE`, ...).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("NAME") {
            self.name = name;
        }
        if let Some(date) = lookup("BIRTH_DATE") {
            self.birth_date = date;
        }
        if let Some(years) = lookup("LIFE_EXPECTANCY") {
            self.set_life_expectancy(parse_life_expectancy(&years));
        }
        if let Some(dir) = lookup("OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
    }

    /// Updates the expectancy. Untouched default stages are rebuilt so the
    /// last one keeps ending at the new expectancy.
    pub fn set_life_expectancy(&mut self, years: u32) {
        if self.stages == default_specs(self.life_expectancy) {
            self.stages = default_specs(years);
        }
        self.life_expectancy = years;
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(format!("{}{}", ENV_PREFIX, key)).ok());
    }

    pub fn person(&self) -> Person {
        Person::new(parse_birth_date(&self.birth_date), self.life_expectancy.max(1))
    }

    pub fn stages(&self) -> Result<Vec<Stage>, StageError> {
        let stages = normalize(&self.stages)?;
        Ok(if self.sort_stages { order_by_start(&stages) } else { stages })
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            budget: DailyBudget::new(self.sleep_hours_per_day, self.work_hours_per_day),
            working_stages: self.working_stages.clone(),
            leisure: LeisureProfile {
                personal_hours_per_weekday: self.personal_hours_per_weekday,
                leisure_hours_per_weekend_day: self.leisure_hours_per_weekend_day,
            },
            career_start_age: self.career_start_age,
            retirement_age: self.retirement_age,
        }
    }
}

/// Parses `YYYY-MM-DD`, falling back to the default birth date.
pub fn parse_birth_date(input: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(input.trim(), DATE_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            warn!("Invalid date '{}' ({}), using {}", input, e, DEFAULT_BIRTH_DATE);
            default_birth_date()
        }
    }
}

/// Parses a positive year count, falling back to the default expectancy.
pub fn parse_life_expectancy(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(years) if years > 0 => years,
        _ => {
            warn!("Invalid life expectancy '{}', using {}", input, DEFAULT_LIFE_EXPECTANCY);
            DEFAULT_LIFE_EXPECTANCY
        }
    }
}

fn default_specs(life_expectancy: u32) -> Vec<StageSpec> {
    default_stages(life_expectancy).iter().map(StageSpec::from).collect()
}

fn default_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1988, 5, 19).unwrap_or_default()
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the config, seeding the file with defaults when it is missing.
    pub async fn load(&self) -> Result<TimeleftConfig, ConfigError> {
        if !self.path.exists() {
            let default = TimeleftConfig::default();
            self.save(&default).await?;
            info!("Wrote default config to {}", self.path.display());
            return Ok(default);
        }
        let content = fs::read_to_string(&self.path).await.map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save(&self, config: &TimeleftConfig) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content).await.map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
