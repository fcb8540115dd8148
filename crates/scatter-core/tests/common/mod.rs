// File: crates/scatter-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use scatter_core::{parse_dataset, Chart, Dataset, RenderOptions};

pub const SAMPLE: &str = r#"{
    "Time": "36:50",
    "Place": 1,
    "Seconds": 2210,
    "Name": "Marco Pantani",
    "Year": 1995,
    "Nationality": "ITA",
    "Doping": "Alleged drug use during 1995 due to high hematocrit levels",
    "URL": "https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"
}"#;

pub const CLEAN: &str = r#"{
    "Time": "39:50",
    "Place": 35,
    "Seconds": 2390,
    "Name": "Greg LeMond",
    "Year": 1989,
    "Nationality": "USA",
    "Doping": "",
    "URL": ""
}"#;

pub const NO_DOPING_FIELD: &str = r#"{
    "Time": "38:55",
    "Place": 15,
    "Seconds": 2335,
    "Name": "Carlos Sastre",
    "Year": 2008,
    "Nationality": "ESP"
}"#;

/// SAMPLE, CLEAN and NO_DOPING_FIELD, in that order.
pub fn small_dataset() -> Dataset {
    parse_dataset(&format!("[{SAMPLE},{CLEAN},{NO_DOPING_FIELD}]")).expect("fixture parses")
}

pub fn small_chart() -> Chart {
    Chart::new(small_dataset(), RenderOptions::default()).expect("chart builds")
}

pub fn workspace_data_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../json/cyclist-data.json")
}
