use indexmap::IndexMap;

use crate::engine::core::table::table::TableView;
use crate::engine::errors::AggregateError;
use crate::engine::schema::{Column, FieldKind};

fn require_numeric(column: Column) -> Result<(), AggregateError> {
    if column.kind() != FieldKind::Numeric {
        return Err(AggregateError::NotNumeric(column.name().to_string()));
    }
    Ok(())
}

fn require_categorical(column: Column) -> Result<(), AggregateError> {
    if column.kind() != FieldKind::Categorical {
        return Err(AggregateError::NotCategorical(column.name().to_string()));
    }
    Ok(())
}

/// Row count of the view.
pub fn total_count(view: &TableView) -> u64 {
    view.len() as u64
}

/// Arithmetic mean of the present values of a numeric column.
///
/// Absent cells are skipped; `EmptyInput` when no value remains.
pub fn mean(view: &TableView, column: Column) -> Result<f64, AggregateError> {
    require_numeric(column)?;
    let mut sum = 0.0;
    let mut count: u64 = 0;
    for record in view.records() {
        if let Some(v) = record.numeric(column) {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        return Err(AggregateError::EmptyInput);
    }
    Ok(sum / count as f64)
}

/// Most frequent value of a categorical column.
///
/// Ties break to the value first encountered in row order: counts are kept
/// in an insertion-ordered map and only a strictly greater count displaces
/// the current winner.
pub fn mode(view: &TableView, column: Column) -> Result<String, AggregateError> {
    require_categorical(column)?;
    let counts = count_categories(view, column);
    let mut winner: Option<(&String, u64)> = None;
    for (value, &n) in &counts {
        match winner {
            Some((_, best)) if n <= best => {}
            _ => winner = Some((value, n)),
        }
    }
    winner
        .map(|(value, _)| value.clone())
        .ok_or(AggregateError::EmptyInput)
}

/// Distinct category -> row count, keys in first-encountered order.
pub fn group_count(
    view: &TableView,
    column: Column,
) -> Result<IndexMap<String, u64>, AggregateError> {
    require_categorical(column)?;
    Ok(count_categories(view, column))
}

fn count_categories(view: &TableView, column: Column) -> IndexMap<String, u64> {
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for record in view.records() {
        if let Some(value) = record.categorical(column) {
            match counts.get_mut(value) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(value.to_string(), 1);
                }
            }
        }
    }
    counts
}

/// Absolute values of the strictly negative entries of a numeric column.
///
/// Dataset quirk: in this dataset a negative delay is the meaningful delay
/// magnitude. Non-negative and absent entries are excluded entirely, not
/// clamped to zero.
pub fn delay_magnitude(view: &TableView, column: Column) -> Result<Vec<f64>, AggregateError> {
    require_numeric(column)?;
    Ok(view
        .records()
        .filter_map(|record| record.numeric(column))
        .filter(|&v| v < 0.0)
        .map(f64::abs)
        .collect())
}
