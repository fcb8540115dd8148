// File: crates/scatter-core/src/record.rs
// Summary: Race record model and the validated, immutable dataset built from it.

use serde::Deserialize;

use crate::error::{ChartError, ChartResult};
use crate::time::{parse_race_time, year_start, TimePoint};

/// One finisher's climb time as published in the source JSON.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RaceRecord {
    /// Race time, `MM:SS`.
    pub time: String,
    pub place: u32,
    /// Same duration as `time`, in seconds.
    pub seconds: u32,
    pub name: String,
    pub year: i64,
    /// Three-letter country code.
    pub nationality: String,
    /// Allegation description; absent, null or empty when there is none.
    #[serde(default)]
    pub doping: Option<String>,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
}

impl RaceRecord {
    /// Non-empty allegation text, if any.
    pub fn doping_note(&self) -> Option<&str> {
        self.doping.as_deref().filter(|d| !d.is_empty())
    }

    pub fn has_doping_allegation(&self) -> bool {
        self.doping_note().is_some()
    }

    pub fn year_point(&self) -> Option<TimePoint> {
        year_start(self.year)
    }

    pub fn time_point(&self) -> Option<TimePoint> {
        parse_race_time(&self.time)
    }
}

/// A record paired with its parsed axis positions.
#[derive(Clone, Debug)]
pub struct Entry {
    pub record: RaceRecord,
    pub year: TimePoint,
    pub time: TimePoint,
}

/// Complete, validated dataset. Never partially built: either every record
/// parses or construction fails with the first offending index.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    pub fn new(records: Vec<RaceRecord>) -> ChartResult<Self> {
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let year = record
                .year_point()
                .ok_or(ChartError::InvalidYear { index, value: record.year })?;
            let time = record
                .time_point()
                .ok_or_else(|| ChartError::InvalidTime { index, value: record.time.clone() })?;
            entries.push(Entry { record, year, time });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn entries(&self) -> &[Entry] { &self.entries }
    pub fn get(&self, index: usize) -> Option<&Entry> { self.entries.get(index) }

    pub fn records(&self) -> impl Iterator<Item = &RaceRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Number of riders carrying an allegation.
    pub fn alleged_count(&self) -> usize {
        self.records().filter(|r| r.has_doping_allegation()).count()
    }
}
