//! Flat-file exports of one run: the stage table as CSV and the insight
//! lines as plain text, both named after the person.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::info;

use crate::metrics::LifeWeekTable;

pub const TABLE_HEADER: [&str; 4] = ["Etapa", "Semanas", "Porcentaje", "Porcentaje acumulado"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// `"Ana María"` -> `"ana_maría"`.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

pub fn table_file_name(name: &str) -> String {
    format!("tabla_etapas_vida_{}.csv", slug(name))
}

pub fn insights_file_name(name: &str) -> String {
    format!("insights_vida_{}.txt", slug(name))
}

/// One row per stage, percentages with 2 decimals.
pub fn render_table_csv(table: &LifeWeekTable) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TABLE_HEADER)?;
    for row in &table.rows {
        writer.write_record([
            row.label.clone(),
            row.weeks.to_string(),
            format!("{:.2}", row.percentage),
            format!("{:.2}", row.cumulative_percentage),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn render_insights(insights: &[String]) -> String {
    let mut out = insights.join("\n");
    out.push('\n');
    out
}

async fn write(path: PathBuf, content: String) -> Result<PathBuf, ExportError> {
    match fs::write(&path, content).await {
        Ok(()) => {
            info!("Exported {}", path.display());
            Ok(path)
        }
        Err(source) => Err(ExportError::Io { path, source }),
    }
}

pub async fn write_table_csv(dir: &Path, name: &str, table: &LifeWeekTable) -> Result<PathBuf, ExportError> {
    write(dir.join(table_file_name(name)), render_table_csv(table)?).await
}

pub async fn write_insights(dir: &Path, name: &str, insights: &[String]) -> Result<PathBuf, ExportError> {
    write(dir.join(insights_file_name(name)), render_insights(insights)).await
}
