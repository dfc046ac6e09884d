pub mod slices;

pub use slices::{ColumnSlice, SliceRow, SliceTable, concat_slices};
