use std::io::Write;

use tracing::debug;

use crate::engine::core::table::table::TableView;
use crate::engine::errors::ExportError;

/// Serializes a view to CSV: UTF-8, header row first, one line per record,
/// source column names. The output parses back into a table equal to the
/// view's records.
pub fn write_csv<W: Write>(view: &TableView, writer: W) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    for record in view.records() {
        out.serialize(record)?;
    }
    out.flush()?;
    debug!(target: "export::csv", rows = view.len(), "Exported view");
    Ok(())
}

/// Convenience wrapper producing the in-memory UTF-8 bytes handed to a
/// download collaborator.
pub fn to_csv_bytes(view: &TableView) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_csv(view, &mut buf)?;
    Ok(buf)
}
