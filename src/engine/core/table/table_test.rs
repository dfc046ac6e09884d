use crate::test_helpers::factory::Factory;

#[test]
fn view_selects_every_row_in_order() {
    let table = Factory::table()
        .with_delays(&[("AA", Some(-10.0)), ("AA", Some(5.0)), ("BB", Some(-20.0))])
        .create();
    let view = table.view();
    assert_eq!(view.len(), 3);
    assert_eq!(view.row_ids(), &[0, 1, 2]);

    let airlines: Vec<&str> = view.records().map(|r| r.airline.as_str()).collect();
    assert_eq!(airlines, vec!["AA", "AA", "BB"]);
}

#[test]
fn retain_keeps_original_row_ids() {
    let table = Factory::table()
        .with_delays(&[("AA", Some(-10.0)), ("AA", Some(5.0)), ("BB", Some(-20.0))])
        .create();
    let delayed = table.view().retain(|r| r.departure_delay.unwrap_or(0.0) < 0.0);
    assert_eq!(delayed.row_ids(), &[0, 2]);
    assert_eq!(delayed.len(), 2);
}

#[test]
fn retain_composes() {
    let table = Factory::table()
        .with_delays(&[("AA", Some(-10.0)), ("AA", Some(5.0)), ("BB", Some(-20.0))])
        .create();
    let narrowed = table
        .view()
        .retain(|r| r.airline == "AA")
        .retain(|r| r.departure_delay.unwrap_or(0.0) < 0.0);
    assert_eq!(narrowed.row_ids(), &[0]);
}

#[test]
fn indexed_records_pair_rows_with_identity() {
    let table = Factory::table()
        .with_delays(&[("AA", Some(1.0)), ("BB", Some(2.0))])
        .create();
    let view = table.view().retain(|r| r.airline == "BB");
    let pairs: Vec<(usize, &str)> = view
        .indexed_records()
        .map(|(id, r)| (id, r.airline.as_str()))
        .collect();
    assert_eq!(pairs, vec![(1, "BB")]);
}

#[test]
fn empty_table_yields_empty_view() {
    let table = Factory::table().create();
    assert!(table.is_empty());
    assert!(table.view().is_empty());
    assert_eq!(table.view().len(), 0);
}
