// File: crates/scatter-core/tests/loader.rs
// Purpose: Dataset parsing, record validation and background loading.

mod common;

use std::sync::mpsc;
use std::time::Duration;

use scatter_core::{load_from_path, load_from_reader, parse_dataset, spawn_load, ChartError};

#[test]
fn parses_all_record_fields() {
    let ds = common::small_dataset();
    assert_eq!(ds.len(), 3);
    let r = &ds.entries()[0].record;
    assert_eq!(r.name, "Marco Pantani");
    assert_eq!(r.nationality, "ITA");
    assert_eq!(r.place, 1);
    assert_eq!(r.seconds, 2210);
    assert_eq!(r.year, 1995);
    assert_eq!(r.time, "36:50");
    assert!(r.has_doping_allegation());
    assert_eq!(r.url.as_deref(), Some("https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"));
}

#[test]
fn empty_and_absent_doping_mean_no_allegation() {
    let ds = common::small_dataset();
    assert!(!ds.entries()[1].record.has_doping_allegation());
    assert!(!ds.entries()[2].record.has_doping_allegation());
    assert_eq!(ds.entries()[2].record.doping, None);
    assert_eq!(ds.alleged_count(), 1);
}

#[test]
fn null_doping_is_accepted() {
    let json = r#"[{"Time":"37:00","Place":3,"Seconds":2220,"Name":"A","Year":2000,"Nationality":"FRA","Doping":null,"URL":null}]"#;
    let ds = parse_dataset(json).expect("parses");
    assert!(!ds.entries()[0].record.has_doping_allegation());
}

#[test]
fn parsed_points_use_reference_date_for_times() {
    let ds = common::small_dataset();
    let e = &ds.entries()[0];
    assert_eq!(e.time.format("%Y-%m-%d %H:%M:%S").to_string(), "1900-01-01 00:36:50");
    assert_eq!(e.year.format("%Y-%m-%d %H:%M:%S").to_string(), "1995-01-01 00:00:00");
}

#[test]
fn invalid_time_reports_record_index() {
    let json = format!(
        "[{},{}]",
        common::SAMPLE,
        r#"{"Time":"3650","Place":2,"Seconds":2210,"Name":"B","Year":1996,"Nationality":"ITA"}"#
    );
    match parse_dataset(&json) {
        Err(ChartError::InvalidTime { index, value }) => {
            assert_eq!(index, 1);
            assert_eq!(value, "3650");
        }
        other => panic!("expected InvalidTime, got {other:?}"),
    }
}

#[test]
fn out_of_range_seconds_are_rejected() {
    let json = r#"[{"Time":"36:75","Place":2,"Seconds":0,"Name":"B","Year":1996,"Nationality":"ITA"}]"#;
    assert!(matches!(parse_dataset(json), Err(ChartError::InvalidTime { index: 0, .. })));
}

#[test]
fn non_four_digit_year_is_rejected() {
    let json = r#"[{"Time":"36:50","Place":2,"Seconds":2210,"Name":"B","Year":95,"Nationality":"ITA"}]"#;
    assert!(matches!(parse_dataset(json), Err(ChartError::InvalidYear { index: 0, value: 95 })));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(parse_dataset("[{\"Time\": "), Err(ChartError::Json(_))));
    // wrong shape: object instead of array
    assert!(matches!(parse_dataset(common::SAMPLE), Err(ChartError::Json(_))));
}

#[test]
fn empty_array_loads_as_empty_dataset() {
    let ds = load_from_reader("[]".as_bytes()).expect("empty array is valid JSON");
    assert!(ds.is_empty());
}

#[test]
fn loads_bundled_dataset_file() {
    let ds = load_from_path(common::workspace_data_path()).expect("bundled dataset loads");
    assert_eq!(ds.len(), 16);
    assert!(ds.alleged_count() > 0);
    assert!(ds.alleged_count() < ds.len());
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(load_from_path("does/not/exist.json"), Err(ChartError::Io(_))));
}

#[test]
fn background_load_calls_back_once_with_full_dataset() {
    let (tx, rx) = mpsc::channel();
    let handle = spawn_load(common::workspace_data_path(), move |result| {
        tx.send(result.map(|ds| ds.len())).expect("receiver alive");
    })
    .expect("thread spawns");
    let got = rx.recv_timeout(Duration::from_secs(10)).expect("callback ran");
    assert_eq!(got.expect("load ok"), 16);
    handle.join().expect("loader thread exits cleanly");
    assert!(rx.try_recv().is_err(), "callback must run exactly once");
}

#[test]
fn background_load_reports_failure() {
    let (tx, rx) = mpsc::channel();
    spawn_load("does/not/exist.json", move |result| {
        tx.send(result.is_err()).expect("receiver alive");
    })
    .expect("thread spawns")
    .join()
    .expect("loader thread exits cleanly");
    assert!(rx.recv().expect("callback ran"));
}
