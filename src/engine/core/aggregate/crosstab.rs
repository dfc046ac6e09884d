use chrono::Timelike;
use indexmap::{IndexMap, IndexSet};

use crate::engine::core::table::record::FlightRecord;
use crate::engine::core::table::table::TableView;
use crate::engine::errors::AggregateError;
use crate::engine::schema::{Column, FieldKind};

/// How rows are keyed along one axis of a crosstab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKey {
    /// Key by a categorical column's raw value.
    Category(Column),
    /// Key by the hour of day (00-23) of a timestamp column.
    HourOfDay(Column),
}

impl GridKey {
    fn validate(&self) -> Result<(), AggregateError> {
        match self {
            GridKey::Category(column) => {
                if column.kind() != FieldKind::Categorical {
                    return Err(AggregateError::NotCategorical(column.name().to_string()));
                }
            }
            GridKey::HourOfDay(column) => {
                if column.kind() != FieldKind::Timestamp {
                    return Err(AggregateError::NotTimestamp(column.name().to_string()));
                }
            }
        }
        Ok(())
    }

    fn of(&self, record: &FlightRecord) -> Option<String> {
        match self {
            GridKey::Category(column) => record.categorical(*column).map(str::to_string),
            GridKey::HourOfDay(column) => record
                .timestamp(*column)
                .map(|ts| format!("{:02}", ts.hour())),
        }
    }
}

/// The dense 00-23 hour axis, zero-padded to match `GridKey::HourOfDay` keys.
pub fn hour_axis() -> Vec<String> {
    (0..24).map(|h| format!("{:02}", h)).collect()
}

/// A two-key count grid derived from filtered rows.
///
/// Axes record keys in first-encountered order; cell lookup of an absent
/// pair returns zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Crosstab {
    cells: IndexMap<(String, String), u64>,
    row_axis: Vec<String>,
    col_axis: Vec<String>,
}

impl Crosstab {
    pub fn compute(
        view: &TableView,
        row_key: GridKey,
        col_key: GridKey,
    ) -> Result<Crosstab, AggregateError> {
        row_key.validate()?;
        col_key.validate()?;

        let mut cells: IndexMap<(String, String), u64> = IndexMap::new();
        let mut row_axis: IndexSet<String> = IndexSet::new();
        let mut col_axis: IndexSet<String> = IndexSet::new();

        for record in view.records() {
            let (Some(row), Some(col)) = (row_key.of(record), col_key.of(record)) else {
                continue;
            };
            row_axis.insert(row.clone());
            col_axis.insert(col.clone());
            *cells.entry((row, col)).or_insert(0) += 1;
        }

        Ok(Crosstab {
            cells,
            row_axis: row_axis.into_iter().collect(),
            col_axis: col_axis.into_iter().collect(),
        })
    }

    /// Count for a (row, col) pair; zero when the pair never occurred.
    pub fn get(&self, row: &str, col: &str) -> u64 {
        self.cells
            .get(&(row.to_string(), col.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn rows(&self) -> &[String] {
        &self.row_axis
    }

    pub fn cols(&self) -> &[String] {
        &self.col_axis
    }

    pub fn cells(&self) -> impl Iterator<Item = (&str, &str, u64)> + '_ {
        self.cells
            .iter()
            .map(|((row, col), &n)| (row.as_str(), col.as_str(), n))
    }

    /// Densifies the grid over the given row axis: every (axis row, observed
    /// column) cell becomes explicit, absent counts as zero. Callers that
    /// expect a complete hour grid pass [`hour_axis`]. Observed rows missing
    /// from the axis are kept after it.
    pub fn complete_rows(&mut self, axis: &[String]) {
        let mut new_axis: IndexSet<String> = axis.iter().cloned().collect();
        for row in &self.row_axis {
            new_axis.insert(row.clone());
        }
        for row in &new_axis {
            for col in &self.col_axis {
                self.cells
                    .entry((row.clone(), col.clone()))
                    .or_insert(0);
            }
        }
        self.row_axis = new_axis.into_iter().collect();
    }
}
