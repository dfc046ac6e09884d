use serde::{Deserialize, Serialize};

use crate::engine::core::filter::predicate::Predicate;
use crate::engine::core::table::record::FlightRecord;
use crate::engine::core::table::table::{FlightTable, TableView};
use crate::engine::schema::Column;

/// A conjunctive set of column predicates narrowing a table to a view.
///
/// The empty set is the identity transform. Filter sets from independent
/// callers are applied to independently derived views; nothing here merges
/// them implicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    predicates: Vec<Predicate>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn in_set(
        self,
        column: Column,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.with(Predicate::in_set(column, values))
    }

    pub fn negative(self, column: Column) -> Self {
        self.with(Predicate::negative(column))
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// All predicates hold (conjunction). Vacuously true when empty.
    pub fn matches(&self, record: &FlightRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Filters the whole table into a view. Never mutates the table.
    pub fn apply<'t>(&self, table: &'t FlightTable) -> TableView<'t> {
        self.narrow(&table.view())
    }

    /// Narrows an existing view, preserving original row identity.
    pub fn narrow<'t>(&self, view: &TableView<'t>) -> TableView<'t> {
        if self.is_empty() {
            return view.clone();
        }
        view.retain(|record| self.matches(record))
    }
}
