use indexmap::IndexMap;

use crate::engine::core::table::record::FieldValue;
use crate::engine::core::table::table::TableView;
use crate::engine::schema::Column;

/// One column of an independently filtered view, keyed by original row
/// identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSlice {
    pub column: Column,
    pub cells: Vec<(usize, FieldValue)>,
}

impl ColumnSlice {
    pub fn take(view: &TableView, column: Column) -> ColumnSlice {
        ColumnSlice {
            column,
            cells: view
                .indexed_records()
                .map(|(row_id, record)| (row_id, record.value(column)))
                .collect(),
        }
    }
}

/// A row of a concatenated slice table. `cells` aligns with the table's
/// column list; `None` marks a hole where that slice did not select the row.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceRow {
    pub row_id: usize,
    pub cells: Vec<Option<FieldValue>>,
}

/// Column-wise concatenation of independently filtered slices.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceTable {
    pub columns: Vec<Column>,
    pub rows: Vec<SliceRow>,
}

/// Aligns slices on the union of their original row indexes.
///
/// This is NOT a conjunctive row filter: each slice keeps its own selection,
/// and a row appears once per distinct row index with holes for the slices
/// that did not select it. Coherent full rows only arise when the
/// selections overlap; divergent selections stay visible as holes rather
/// than being joined away.
pub fn concat_slices(slices: &[ColumnSlice]) -> SliceTable {
    let columns: Vec<Column> = slices.iter().map(|s| s.column).collect();

    let mut rows: IndexMap<usize, Vec<Option<FieldValue>>> = IndexMap::new();
    for (slice_idx, slice) in slices.iter().enumerate() {
        for (row_id, value) in &slice.cells {
            let cells = rows
                .entry(*row_id)
                .or_insert_with(|| vec![None; slices.len()]);
            cells[slice_idx] = Some(value.clone());
        }
    }
    rows.sort_keys();

    SliceTable {
        columns,
        rows: rows
            .into_iter()
            .map(|(row_id, cells)| SliceRow { row_id, cells })
            .collect(),
    }
}
