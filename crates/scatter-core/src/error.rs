// File: crates/scatter-core/src/error.rs
// Summary: Typed errors for loading, domain derivation and rendering.

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// `Time` field is not `MM:SS`.
    #[error("record {index}: invalid race time {value:?} (expected MM:SS)")]
    InvalidTime { index: usize, value: String },

    /// `Year` field is not a 4-digit year.
    #[error("record {index}: invalid year {value} (expected a 4-digit year)")]
    InvalidYear { index: usize, value: i64 },

    #[error("dataset is empty; domains are undefined")]
    EmptyDataset,

    #[error("render error: {0}")]
    Render(String),
}

impl ChartError {
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<anyhow::Error> for ChartError {
    fn from(e: anyhow::Error) -> Self {
        Self::Render(format!("{e:#}"))
    }
}
