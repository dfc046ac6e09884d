pub mod aggregate;
pub mod export;
pub mod filter;
pub mod table;
pub mod view;

pub use aggregate::{Crosstab, GridKey};
pub use filter::{FilterSet, Predicate};
pub use table::{FieldValue, FlightRecord, FlightTable, TableView};
pub use view::{ColumnSlice, SliceTable};
