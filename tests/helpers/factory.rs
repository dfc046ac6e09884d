pub use super::factories::{FlightFactory, TableFactory};

pub struct Factory;

impl Factory {
    pub fn flight() -> FlightFactory {
        FlightFactory::new()
    }

    pub fn table() -> TableFactory {
        TableFactory::new()
    }
}
