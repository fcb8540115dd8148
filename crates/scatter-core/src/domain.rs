// File: crates/scatter-core/src/domain.rs
// Summary: Extents over the dataset and the padded/reversed X/Y domains derived from them.

use chrono::Duration;

use crate::error::{ChartError, ChartResult};
use crate::record::Dataset;
use crate::time::TimePoint;
use crate::types::X_DOMAIN_PAD_MS;

/// `[min, max]` of `accessor` over `items`; `None` when there are no items.
/// Incomparable values (NaN) are skipped.
pub fn extent<I, T, F>(items: I, mut accessor: F) -> Option<[T; 2]>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> T,
    T: PartialOrd + Copy,
{
    let mut out: Option<[T; 2]> = None;
    for item in items {
        let v = accessor(item);
        if v.partial_cmp(&v).is_none() {
            continue;
        }
        out = Some(match out {
            None => [v, v],
            Some([lo, hi]) => [if v < lo { v } else { lo }, if v > hi { v } else { hi }],
        });
    }
    out
}

/// X (year) and Y (race time) domains.
/// Contract: `x[0] <= x[1]`; `y[0] >= y[1]` (slowest first so fast times plot high).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domains {
    pub x: [TimePoint; 2],
    pub y: [TimePoint; 2],
}

impl Domains {
    /// Domains with the standard six-month lead before the earliest year.
    pub fn from_dataset(dataset: &Dataset) -> ChartResult<Self> {
        Self::with_x_padding(dataset, X_DOMAIN_PAD_MS)
    }

    #[tracing::instrument(skip(dataset), fields(records = dataset.len()))]
    pub fn with_x_padding(dataset: &Dataset, pad_ms: i64) -> ChartResult<Self> {
        let [x_min, x_max] = extent(dataset.entries(), |e| e.year).ok_or(ChartError::EmptyDataset)?;
        let [y_min, y_max] = extent(dataset.entries(), |e| e.time).ok_or(ChartError::EmptyDataset)?;

        let x_lo = Duration::try_milliseconds(pad_ms)
            .and_then(|pad| x_min.checked_sub_signed(pad))
            .ok_or_else(|| ChartError::render("x padding moves the domain out of range"))?;

        let domains = Self { x: [x_lo, x_max], y: [y_max, y_min] };
        tracing::debug!(x = ?domains.x, y = ?domains.y, "domains derived");
        Ok(domains)
    }
}
