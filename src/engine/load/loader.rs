use bytes::Bytes;
use tracing::info;

use crate::engine::core::table::table::FlightTable;
use crate::engine::errors::{LoadError, SourceError};
use crate::engine::load::csv_reader;
use crate::engine::load::fetch;
use crate::engine::load::source::DataSource;

/// Loads the flight-records table from a path or URL.
///
/// Fetch and parse failures surface as `SourceUnavailable`; a header
/// missing a required column as `SchemaMismatch`. The table is returned by
/// value; no global state is touched.
pub async fn load(source: &DataSource, fetch_timeout_secs: u64) -> Result<FlightTable, LoadError> {
    info!(target: "load", source = %source, "Loading flight records");
    let bytes = read_source(source, fetch_timeout_secs).await?;
    let table = csv_reader::parse_table(bytes.as_ref())?;
    info!(target: "load", rows = table.len(), "Flight table ready");
    Ok(table)
}

async fn read_source(
    source: &DataSource,
    fetch_timeout_secs: u64,
) -> Result<Bytes, SourceError> {
    match source {
        DataSource::Path(path) => Ok(Bytes::from(std::fs::read(path)?)),
        DataSource::Url(url) => fetch::fetch_url(url, fetch_timeout_secs).await,
    }
}
