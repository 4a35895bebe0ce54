//! Week grid layout: one cell per week, filled row-major.

use serde::{Deserialize, Serialize};

use super::LifeWeekTable;

pub const DEFAULT_COLUMNS: usize = 100;
pub const YEAR_COLUMNS: usize = 52;
pub const LIVED_COLOR: &str = "#1f77b4";
pub const REMAINING_COLOR: &str = "#F0F0F0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub column: usize,
    pub row: usize,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekGrid {
    pub columns: usize,
    pub rows: usize,
    pub cells: Vec<GridCell>,
}

impl WeekGrid {
    /// Colors each week with the stage it belongs to, in table order.
    pub fn layout(table: &LifeWeekTable, columns: usize) -> Self {
        let tags = table
            .rows
            .iter()
            .flat_map(|row| std::iter::repeat((row.label.as_str(), row.color.as_str())).take(row.weeks.max(0) as usize));
        Self::fill(tags, columns)
    }

    /// Two-tone layout: the first `weeks_lived` weeks against the remainder.
    pub fn lived_layout(total_weeks: i64, weeks_lived: i64, columns: usize) -> Self {
        let total = total_weeks.max(0) as usize;
        let lived = weeks_lived.clamp(0, total_weeks.max(0)) as usize;
        let tags = (0..total).map(|week| {
            if week < lived {
                ("lived", LIVED_COLOR)
            } else {
                ("remaining", REMAINING_COLOR)
            }
        });
        Self::fill(tags, columns)
    }

    fn fill<'a>(tags: impl Iterator<Item = (&'a str, &'a str)>, columns: usize) -> Self {
        let columns = columns.max(1);
        let cells: Vec<GridCell> = tags
            .enumerate()
            .map(|(i, (label, color))| GridCell {
                column: i % columns,
                row: i / columns,
                label: label.to_string(),
                color: color.to_string(),
            })
            .collect();
        let rows = cells.len() / columns + 1;
        Self { columns, rows, cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
