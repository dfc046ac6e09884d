use crate::engine::core::{FlightRecord, FlightTable};

use super::flight_factory::FlightFactory;

/// Builder for a small in-memory flight table.
pub struct TableFactory {
    rows: Vec<FlightRecord>,
}

impl TableFactory {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn push(mut self, record: FlightRecord) -> Self {
        self.rows.push(record);
        self
    }

    /// One flight per (airline, departure delay) pair, in the given order.
    pub fn with_delays(mut self, flights: &[(&str, Option<f64>)]) -> Self {
        for (airline, delay) in flights {
            self.rows.push(
                FlightFactory::new()
                    .airline(airline)
                    .departure_delay(*delay)
                    .create(),
            );
        }
        self
    }

    pub fn create(self) -> FlightTable {
        FlightTable::new(self.rows)
    }
}
