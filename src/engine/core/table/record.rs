use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::engine::schema::Column;
use crate::shared::datetime::flight_time;

/// One row of the flight-records dataset, immutable once loaded.
///
/// Field renames bind the struct to the source header names, so the same
/// type drives the CSV reader and the CSV exporter. Numeric fields are
/// nullable: a blank cell in the source loads as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "AIRLINE")]
    pub airline: String,
    #[serde(rename = "ORIGIN_AIRPORT")]
    pub origin_airport: String,
    #[serde(rename = "DESTINATION_AIRPORT")]
    pub destination_airport: String,
    #[serde(rename = "SCHEDULED_DEPARTURE", with = "flight_time::serde_format")]
    pub scheduled_departure: NaiveDateTime,
    #[serde(rename = "SCHEDULED_DESTINATION", with = "flight_time::serde_format")]
    pub scheduled_destination: NaiveDateTime,
    #[serde(rename = "DEPARTURE_DELAY")]
    pub departure_delay: Option<f64>,
    #[serde(rename = "DESTINATION_DELAY")]
    pub destination_delay: Option<f64>,
    #[serde(rename = "ELAPSED_TIME")]
    pub elapsed_time: Option<f64>,
    #[serde(rename = "DISTANCE")]
    pub distance: Option<f64>,
    #[serde(rename = "SCHEDULED_TIME")]
    pub scheduled_time: Option<f64>,
    #[serde(rename = "ORIGIN_AIRPORT_LAT")]
    pub origin_airport_lat: Option<f64>,
    #[serde(rename = "ORIGIN_AIRPORT_LON")]
    pub origin_airport_lon: Option<f64>,
    #[serde(rename = "DESTINATION_AIRPORT_LAT")]
    pub destination_airport_lat: Option<f64>,
    #[serde(rename = "DESTINATION_AIRPORT_LON")]
    pub destination_airport_lon: Option<f64>,
}

/// A single cell value, tagged by the column kind it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Time(NaiveDateTime),
    Missing,
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Time(ts) => f.write_str(&flight_time::format(ts)),
            FieldValue::Missing => Ok(()),
        }
    }
}

impl FlightRecord {
    /// Returns the raw string of a categorical column, `None` for other kinds.
    pub fn categorical(&self, column: Column) -> Option<&str> {
        match column {
            Column::Airline => Some(&self.airline),
            Column::OriginAirport => Some(&self.origin_airport),
            Column::DestinationAirport => Some(&self.destination_airport),
            _ => None,
        }
    }

    /// Returns the value of a numeric column, `None` when absent or for
    /// other kinds.
    pub fn numeric(&self, column: Column) -> Option<f64> {
        match column {
            Column::DepartureDelay => self.departure_delay,
            Column::DestinationDelay => self.destination_delay,
            Column::ElapsedTime => self.elapsed_time,
            Column::Distance => self.distance,
            Column::ScheduledTime => self.scheduled_time,
            Column::OriginAirportLat => self.origin_airport_lat,
            Column::OriginAirportLon => self.origin_airport_lon,
            Column::DestinationAirportLat => self.destination_airport_lat,
            Column::DestinationAirportLon => self.destination_airport_lon,
            _ => None,
        }
    }

    /// Returns the value of a timestamp column, `None` for other kinds.
    pub fn timestamp(&self, column: Column) -> Option<NaiveDateTime> {
        match column {
            Column::ScheduledDeparture => Some(self.scheduled_departure),
            Column::ScheduledDestination => Some(self.scheduled_destination),
            _ => None,
        }
    }

    /// Returns the cell value of any column as a tagged scalar.
    pub fn value(&self, column: Column) -> FieldValue {
        if let Some(s) = self.categorical(column) {
            return FieldValue::Text(s.to_string());
        }
        if let Some(ts) = self.timestamp(column) {
            return FieldValue::Time(ts);
        }
        match self.numeric(column) {
            Some(n) => FieldValue::Number(n),
            None => FieldValue::Missing,
        }
    }
}
