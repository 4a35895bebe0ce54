//! TimeLeft: a life measured in weeks
//!
//! Splits a lifetime into named stages and accounts for it in weeks and hours:
//! - Stage normalization and default stage sets
//! - Calendar mapping of age ranges, clipped to the estimated lifespan
//! - Week table, lived weeks per stage and headline KPIs
//! - Sleep / work / personal hour allocation and future projections
//! - Insight text and flat-file exports

pub mod allocation;
pub mod calendar;
pub mod config;
pub mod export;
pub mod insights;
pub mod metrics;
pub mod report;
pub mod stages;
pub mod utils;

// Re-exports for convenience
pub use calendar::{Person, StageInterval};
pub use metrics::{LifeKpis, LifeWeekTable, LivedWeeksByStage};
pub use report::{LifeReport, ReportOptions};
pub use stages::{Stage, StageSpec};
