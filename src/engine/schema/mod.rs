pub mod types;

pub use types::{Column, FieldKind};
