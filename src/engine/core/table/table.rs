use crate::engine::core::table::record::FlightRecord;

/// The full, read-only collection of flight records for a session.
///
/// Row order is insertion order from the source. The table is never mutated
/// after load; every downstream computation derives new values from it, so
/// repeated queries over the same table are idempotent.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightTable {
    rows: Vec<FlightRecord>,
}

impl FlightTable {
    pub fn new(rows: Vec<FlightRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.rows
    }

    pub fn get(&self, row_id: usize) -> Option<&FlightRecord> {
        self.rows.get(row_id)
    }

    /// A view selecting every row.
    pub fn view(&self) -> TableView<'_> {
        TableView {
            table: self,
            selected: (0..self.rows.len()).collect(),
        }
    }
}

/// A borrowed selection of table rows.
///
/// Views carry the original row indexes, not copies of the rows, so row
/// identity survives filtering. That identity is what the route-slice
/// alignment keys on.
#[derive(Debug, Clone)]
pub struct TableView<'t> {
    table: &'t FlightTable,
    selected: Vec<usize>,
}

impl<'t> TableView<'t> {
    pub fn table(&self) -> &'t FlightTable {
        self.table
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Original row indexes of the selected rows, in table order.
    pub fn row_ids(&self) -> &[usize] {
        &self.selected
    }

    pub fn records(&self) -> impl Iterator<Item = &'t FlightRecord> + '_ {
        self.selected.iter().map(|&id| &self.table.records()[id])
    }

    /// Selected rows paired with their original row indexes.
    pub fn indexed_records(&self) -> impl Iterator<Item = (usize, &'t FlightRecord)> + '_ {
        self.selected.iter().map(|&id| (id, &self.table.records()[id]))
    }

    /// A narrower view keeping the rows the predicate accepts.
    pub fn retain(&self, keep: impl Fn(&FlightRecord) -> bool) -> TableView<'t> {
        let selected = self
            .selected
            .iter()
            .copied()
            .filter(|&id| keep(&self.table.records()[id]))
            .collect();
        TableView {
            table: self.table,
            selected,
        }
    }
}
