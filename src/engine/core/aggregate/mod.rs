pub mod crosstab;
pub mod ops;

pub use crosstab::{Crosstab, GridKey, hour_axis};
pub use ops::{delay_magnitude, group_count, mean, mode, total_count};
