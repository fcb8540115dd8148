// File: crates/scatter-core/src/loader.rs
// Summary: Dataset loading from JSON text, readers, files, and a background load with a completion callback.

use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use crate::error::ChartResult;
use crate::record::{Dataset, RaceRecord};

/// Where the dataset lives relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "json/cyclist-data.json";

pub fn parse_dataset(json: &str) -> ChartResult<Dataset> {
    let records: Vec<RaceRecord> = serde_json::from_str(json)?;
    Dataset::new(records)
}

pub fn load_from_reader<R: Read>(reader: R) -> ChartResult<Dataset> {
    let records: Vec<RaceRecord> = serde_json::from_reader(BufReader::new(reader))?;
    Dataset::new(records)
}

#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_from_path(path: impl AsRef<Path>) -> ChartResult<Dataset> {
    let file = std::fs::File::open(path.as_ref())?;
    let dataset = load_from_reader(file)?;
    tracing::info!(records = dataset.len(), alleged = dataset.alleged_count(), "dataset loaded");
    Ok(dataset)
}

/// Load `path` on a worker thread and hand the complete outcome to `on_load`, once.
/// No retry and no timeout: a load that never finishes never calls back.
pub fn spawn_load<F>(path: impl Into<PathBuf>, on_load: F) -> std::io::Result<JoinHandle<()>>
where
    F: FnOnce(ChartResult<Dataset>) + Send + 'static,
{
    let path = path.into();
    std::thread::Builder::new()
        .name("dataset-loader".into())
        .spawn(move || {
            let result = load_from_path(&path);
            if let Err(e) = &result {
                tracing::error!(path = %path.display(), error = %e, "dataset load failed");
            }
            on_load(result);
        })
}
