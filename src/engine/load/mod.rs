pub mod csv_reader;
pub mod fetch;
pub mod loader;
pub mod source;

pub use loader::load;
pub use source::DataSource;

#[cfg(test)]
pub mod source_test;
