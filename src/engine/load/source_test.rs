use std::path::PathBuf;

use crate::engine::load::source::DataSource;

#[test]
fn http_schemes_resolve_to_urls() {
    assert_eq!(
        DataSource::resolve("https://example.com/flights.csv"),
        DataSource::Url("https://example.com/flights.csv".into())
    );
    assert_eq!(
        DataSource::resolve("http://localhost:8000/flights.csv"),
        DataSource::Url("http://localhost:8000/flights.csv".into())
    );
}

#[test]
fn everything_else_resolves_to_a_path() {
    assert_eq!(
        DataSource::resolve("data/flights.csv"),
        DataSource::Path(PathBuf::from("data/flights.csv"))
    );
    assert_eq!(
        DataSource::resolve("/var/data/flights.csv"),
        DataSource::Path(PathBuf::from("/var/data/flights.csv"))
    );
}

#[test]
fn display_shows_the_raw_location() {
    assert_eq!(
        DataSource::resolve("https://example.com/f.csv").to_string(),
        "https://example.com/f.csv"
    );
    assert_eq!(DataSource::resolve("data/f.csv").to_string(), "data/f.csv");
}
