pub mod record;
pub mod table;

pub use record::{FieldValue, FlightRecord};
pub use table::{FlightTable, TableView};

#[cfg(test)]
pub mod table_test;
