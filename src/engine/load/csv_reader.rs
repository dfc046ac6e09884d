use std::collections::HashSet;
use std::io::Read;

use tracing::debug;

use crate::engine::core::table::record::FlightRecord;
use crate::engine::core::table::table::FlightTable;
use crate::engine::errors::{LoadError, SourceError};
use crate::engine::schema::Column;

/// Parses CSV bytes into a typed table.
///
/// The header row is checked against the required columns first, so a
/// missing column is reported by name instead of as a per-row deserialize
/// failure. Column order in the source is free; unknown extra columns are
/// ignored.
pub fn parse_table<R: Read>(input: R) -> Result<FlightTable, LoadError> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader.headers().map_err(SourceError::from)?.clone();
    let present: HashSet<&str> = headers.iter().collect();
    for column in Column::ALL {
        if !present.contains(column.name()) {
            return Err(LoadError::SchemaMismatch(column.name().to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<FlightRecord>() {
        rows.push(result.map_err(SourceError::from)?);
    }
    debug!(target: "load::csv", rows = rows.len(), "Parsed flight records");
    Ok(FlightTable::new(rows))
}
