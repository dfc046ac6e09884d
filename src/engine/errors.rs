use thiserror::Error;

/// Errors that can occur while loading the flight-records dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    #[error("schema mismatch: required column '{0}' is missing")]
    SchemaMismatch(String),
}

/// Underlying cause of a failed fetch or parse.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("fetch timed out after {0}s")]
    Timeout(u64),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors from aggregate operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// The aggregate was requested over zero usable rows. Recoverable:
    /// callers substitute a placeholder value such as "n/a".
    #[error("aggregate over empty input")]
    EmptyInput,

    #[error("column {0} is not numeric")]
    NotNumeric(String),

    #[error("column {0} is not categorical")]
    NotCategorical(String),

    #[error("column {0} is not a timestamp")]
    NotTimestamp(String),
}

/// Errors while exporting a view to CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
