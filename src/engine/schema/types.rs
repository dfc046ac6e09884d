use serde::{Deserialize, Serialize};

/// How a column's raw text is typed after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Raw string, preserved verbatim (airline and airport codes).
    Categorical,
    /// Float, nullable: a blank cell loads as an absent value.
    Numeric,
    /// Naive `date + time`, required on every row.
    Timestamp,
}

/// The closed set of columns in the flight-records dataset.
///
/// Variant order matches the source header order and is the column order
/// used on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Airline,
    OriginAirport,
    DestinationAirport,
    ScheduledDeparture,
    ScheduledDestination,
    DepartureDelay,
    DestinationDelay,
    ElapsedTime,
    Distance,
    ScheduledTime,
    OriginAirportLat,
    OriginAirportLon,
    DestinationAirportLat,
    DestinationAirportLon,
}

impl Column {
    pub const ALL: [Column; 14] = [
        Column::Airline,
        Column::OriginAirport,
        Column::DestinationAirport,
        Column::ScheduledDeparture,
        Column::ScheduledDestination,
        Column::DepartureDelay,
        Column::DestinationDelay,
        Column::ElapsedTime,
        Column::Distance,
        Column::ScheduledTime,
        Column::OriginAirportLat,
        Column::OriginAirportLon,
        Column::DestinationAirportLat,
        Column::DestinationAirportLon,
    ];

    /// Header name of the column in the source CSV.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Airline => "AIRLINE",
            Column::OriginAirport => "ORIGIN_AIRPORT",
            Column::DestinationAirport => "DESTINATION_AIRPORT",
            Column::ScheduledDeparture => "SCHEDULED_DEPARTURE",
            Column::ScheduledDestination => "SCHEDULED_DESTINATION",
            Column::DepartureDelay => "DEPARTURE_DELAY",
            Column::DestinationDelay => "DESTINATION_DELAY",
            Column::ElapsedTime => "ELAPSED_TIME",
            Column::Distance => "DISTANCE",
            Column::ScheduledTime => "SCHEDULED_TIME",
            Column::OriginAirportLat => "ORIGIN_AIRPORT_LAT",
            Column::OriginAirportLon => "ORIGIN_AIRPORT_LON",
            Column::DestinationAirportLat => "DESTINATION_AIRPORT_LAT",
            Column::DestinationAirportLon => "DESTINATION_AIRPORT_LON",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Column::Airline | Column::OriginAirport | Column::DestinationAirport => {
                FieldKind::Categorical
            }
            Column::ScheduledDeparture | Column::ScheduledDestination => FieldKind::Timestamp,
            Column::DepartureDelay
            | Column::DestinationDelay
            | Column::ElapsedTime
            | Column::Distance
            | Column::ScheduledTime
            | Column::OriginAirportLat
            | Column::OriginAirportLon
            | Column::DestinationAirportLat
            | Column::DestinationAirportLon => FieldKind::Numeric,
        }
    }

    /// Resolve a header name back to a column.
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
