pub mod csv_export;

pub use csv_export::{to_csv_bytes, write_csv};

#[cfg(test)]
pub mod csv_export_test;
