pub mod filter_set;
pub mod predicate;

pub use filter_set::FilterSet;
pub use predicate::Predicate;
