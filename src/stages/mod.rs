//! Stages Module
//!
//! Named age ranges that partition a lifetime. Stages are built once from
//! defaults or user input and never mutated afterwards; every computation
//! receives them as an explicit slice.

pub mod defaults;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

pub use defaults::{default_stages, retirement_stages};

/// A named span of a lifetime, in whole years from birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub age_start: u32,
    /// Boundary is the date of the `age_end`-th birthday.
    pub age_end: u32,
    /// Opaque display tag, usually `#RRGGBB`.
    pub color: String,
}

impl Stage {
    pub fn new(name: impl Into<String>, age_start: u32, age_end: u32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age_start,
            age_end,
            color: color.into(),
        }
    }

    /// Row label used by tables and exports, e.g. `Infancia consciente (5-18)`.
    pub fn label(&self) -> String {
        format!("{} ({}-{})", self.name, self.age_start, self.age_end)
    }
}

/// Raw stage definition as it arrives from a config file or a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age_start: Option<u32>,
    #[serde(default)]
    pub age_end: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
}

impl From<&Stage> for StageSpec {
    fn from(stage: &Stage) -> Self {
        Self {
            name: Some(stage.name.clone()),
            age_start: Some(stage.age_start),
            age_end: Some(stage.age_end),
            color: Some(stage.color.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error("stage #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("stage name `{0}` is defined more than once")]
    DuplicateName(String),
}

/// Validates stage specs into [`Stage`]s, keeping caller order.
///
/// Only a missing field or a repeated name is rejected. Ranges are not
/// checked: `age_end < age_start` or ranges past the life expectancy are
/// accepted and later collapse to zero weeks when mapped onto a calendar.
pub fn normalize(specs: &[StageSpec]) -> Result<Vec<Stage>, StageError> {
    let mut seen = HashSet::new();
    let mut stages = Vec::with_capacity(specs.len());

    for (index, spec) in specs.iter().enumerate() {
        let name = spec
            .name
            .clone()
            .ok_or(StageError::MissingField { index, field: "name" })?;
        let age_start = spec
            .age_start
            .ok_or(StageError::MissingField { index, field: "age_start" })?;
        let age_end = spec
            .age_end
            .ok_or(StageError::MissingField { index, field: "age_end" })?;
        let color = spec
            .color
            .clone()
            .ok_or(StageError::MissingField { index, field: "color" })?;

        if !seen.insert(name.clone()) {
            return Err(StageError::DuplicateName(name));
        }
        if age_end < age_start {
            debug!("Stage '{}' has an inverted range {}-{}", name, age_start, age_end);
        }

        stages.push(Stage { name, age_start, age_end, color });
    }

    Ok(stages)
}

/// Returns a copy ordered by `age_start`. Ties keep their original order.
pub fn order_by_start(stages: &[Stage]) -> Vec<Stage> {
    let mut ordered = stages.to_vec();
    ordered.sort_by_key(|s| s.age_start);
    ordered
}
