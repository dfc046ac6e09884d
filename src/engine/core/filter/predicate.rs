use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::engine::core::table::record::FlightRecord;
use crate::engine::schema::Column;

/// A single column constraint.
///
/// A value in `allowed` that no row carries is a legal no-op: the membership
/// test simply never matches it. UI multi-selects may offer stale values, so
/// that case must not be an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Row's categorical value is one of the allowed values.
    InSet {
        column: Column,
        allowed: HashSet<String>,
    },
    /// Row's numeric value is present and strictly negative. Used to isolate
    /// delayed rows before taking the delay magnitude.
    Negative { column: Column },
}

impl Predicate {
    pub fn in_set(column: Column, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Predicate::InSet {
            column,
            allowed: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn negative(column: Column) -> Self {
        Predicate::Negative { column }
    }

    pub fn column(&self) -> Column {
        match self {
            Predicate::InSet { column, .. } => *column,
            Predicate::Negative { column } => *column,
        }
    }

    pub fn matches(&self, record: &FlightRecord) -> bool {
        match self {
            Predicate::InSet { column, allowed } => record
                .categorical(*column)
                .is_some_and(|v| allowed.contains(v)),
            Predicate::Negative { column } => {
                record.numeric(*column).is_some_and(|v| v < 0.0)
            }
        }
    }
}
