use crate::engine::core::FlightRecord;
use crate::shared::datetime::flight_time;

/// Builder for a single test flight. Defaults describe an on-time AA flight
/// JFK -> LAX on 2015-01-01.
pub struct FlightFactory {
    record: FlightRecord,
}

impl FlightFactory {
    pub fn new() -> Self {
        Self {
            record: FlightRecord {
                airline: "AA".into(),
                origin_airport: "JFK".into(),
                destination_airport: "LAX".into(),
                scheduled_departure: flight_time::parse("2015-01-01 08:00:00").unwrap(),
                scheduled_destination: flight_time::parse("2015-01-01 11:30:00").unwrap(),
                departure_delay: Some(0.0),
                destination_delay: Some(0.0),
                elapsed_time: Some(330.0),
                distance: Some(2475.0),
                scheduled_time: Some(330.0),
                origin_airport_lat: Some(40.63975),
                origin_airport_lon: Some(-73.77893),
                destination_airport_lat: Some(33.94254),
                destination_airport_lon: Some(-118.40807),
            },
        }
    }

    pub fn airline(mut self, code: &str) -> Self {
        self.record.airline = code.into();
        self
    }

    pub fn route(mut self, origin: &str, destination: &str) -> Self {
        self.record.origin_airport = origin.into();
        self.record.destination_airport = destination.into();
        self
    }

    pub fn scheduled_departure(mut self, ts: &str) -> Self {
        self.record.scheduled_departure = flight_time::parse(ts).unwrap();
        self
    }

    pub fn scheduled_destination(mut self, ts: &str) -> Self {
        self.record.scheduled_destination = flight_time::parse(ts).unwrap();
        self
    }

    pub fn departure_delay(mut self, minutes: impl Into<Option<f64>>) -> Self {
        self.record.departure_delay = minutes.into();
        self
    }

    pub fn destination_delay(mut self, minutes: impl Into<Option<f64>>) -> Self {
        self.record.destination_delay = minutes.into();
        self
    }

    pub fn distance(mut self, miles: impl Into<Option<f64>>) -> Self {
        self.record.distance = miles.into();
        self
    }

    pub fn create(self) -> FlightRecord {
        self.record
    }
}
