use crate::engine::core::export::csv_export::{to_csv_bytes, write_csv};
use crate::engine::core::filter::FilterSet;
use crate::engine::load::csv_reader::parse_table;
use crate::engine::schema::Column;
use crate::test_helpers::factory::Factory;

fn sample_table() -> crate::engine::core::FlightTable {
    Factory::table()
        .push(
            Factory::flight()
                .airline("AA")
                .route("JFK", "LAX")
                .departure_delay(-10.0)
                .create(),
        )
        .push(
            Factory::flight()
                .airline("BB")
                .route("EWR", "SFO")
                .departure_delay(None)
                .distance(None)
                .create(),
        )
        .create()
}

#[test]
fn header_row_uses_source_column_names() {
    let table = sample_table();
    let bytes = to_csv_bytes(&table.view()).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("AIRLINE,ORIGIN_AIRPORT,DESTINATION_AIRPORT"));
    assert!(header.ends_with("DESTINATION_AIRPORT_LAT,DESTINATION_AIRPORT_LON"));
    // Header + one line per record.
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn absent_numeric_cells_export_as_empty() {
    let table = sample_table();
    let text = String::from_utf8(to_csv_bytes(&table.view()).unwrap()).unwrap();
    let second_row = text.lines().nth(2).unwrap();
    assert!(second_row.starts_with("BB,EWR,SFO"));
    assert!(second_row.contains(",,"));
}

#[test]
fn export_round_trips_through_the_loader() {
    let table = sample_table();
    let bytes = to_csv_bytes(&table.view()).unwrap();
    let parsed = parse_table(bytes.as_slice()).unwrap();
    assert_eq!(parsed.records(), table.records());
}

#[test]
fn filtered_export_round_trips() {
    let table = sample_table();
    let filtered = FilterSet::new()
        .in_set(Column::Airline, ["AA"])
        .apply(&table);
    let bytes = to_csv_bytes(&filtered).unwrap();
    let parsed = parse_table(bytes.as_slice()).unwrap();

    let expected: Vec<_> = filtered.records().cloned().collect();
    assert_eq!(parsed.records(), expected.as_slice());
}

#[test]
fn write_csv_accepts_any_writer() {
    let table = sample_table();
    let mut buf: Vec<u8> = Vec::new();
    write_csv(&table.view(), &mut buf).unwrap();
    assert!(!buf.is_empty());
}
