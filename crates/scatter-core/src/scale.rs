// File: crates/scatter-core/src/scale.rs
// Summary: Time scale mapping a two-point time domain onto a pixel range, with nice rounding and ticks.

use crate::time::{from_millis, tick_interval, to_millis, TimeInterval, TimePoint};

/// Default number of ticks requested when none is given.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Scale capability any backend relies on: value → pixel, pixel → value.
pub trait ScaleTransform {
    type Value;
    fn to_px(&self, v: Self::Value) -> f32;
    fn from_px(&self, px: f32) -> Self::Value;
    fn range(&self) -> [f32; 2];
}

/// Linear scale over time points. Domain order is preserved, so a reversed
/// domain (`d0 > d1`) maps larger values toward `range[1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    domain_ms: [f64; 2],
    range: [f32; 2],
}

impl TimeScale {
    pub fn new(domain: [TimePoint; 2], range: [f32; 2]) -> Self {
        Self { domain_ms: [to_millis(domain[0]), to_millis(domain[1])], range }
    }

    pub fn domain(&self) -> [TimePoint; 2] {
        [from_millis(self.domain_ms[0]), from_millis(self.domain_ms[1])]
    }

    pub fn domain_millis(&self) -> [f64; 2] {
        self.domain_ms
    }

    /// Interval that yields about `count` ticks over the current domain.
    pub fn tick_interval(&self, count: usize) -> TimeInterval {
        tick_interval(self.domain_ms[0], self.domain_ms[1], count)
    }

    /// Extend the domain to boundaries of the default tick interval.
    pub fn nice(self) -> Self {
        let interval = self.tick_interval(DEFAULT_TICK_COUNT);
        self.nice_with(interval)
    }

    /// Extend the domain outward to boundaries of `interval`, keeping its orientation.
    pub fn nice_with(mut self, interval: TimeInterval) -> Self {
        let (lo_i, hi_i) = if self.domain_ms[1] < self.domain_ms[0] { (1, 0) } else { (0, 1) };
        let lo = interval.floor(from_millis(self.domain_ms[lo_i]));
        let hi = interval.ceil(from_millis(self.domain_ms[hi_i]));
        self.domain_ms[lo_i] = to_millis(lo);
        self.domain_ms[hi_i] = to_millis(hi);
        self
    }

    /// About `count` ticks on round time boundaries, in domain order.
    pub fn ticks(&self, count: usize) -> Vec<TimePoint> {
        self.ticks_with(self.tick_interval(count))
    }

    pub fn ticks_with(&self, interval: TimeInterval) -> Vec<TimePoint> {
        let [d0, d1] = self.domain_ms;
        let reverse = d1 < d0;
        let (start, stop) = if reverse { (d1, d0) } else { (d0, d1) };
        let mut out = interval.range(from_millis(start), from_millis(stop));
        if reverse {
            out.reverse();
        }
        out
    }

    #[inline]
    fn normalize(&self, ms: f64) -> f64 {
        let [d0, d1] = self.domain_ms;
        let span = d1 - d0;
        if span == 0.0 { 0.5 } else { (ms - d0) / span }
    }
}

impl ScaleTransform for TimeScale {
    type Value = TimePoint;

    #[inline]
    fn to_px(&self, v: TimePoint) -> f32 {
        let [r0, r1] = self.range;
        r0 + (self.normalize(to_millis(v)) as f32) * (r1 - r0)
    }

    fn from_px(&self, px: f32) -> TimePoint {
        let [r0, r1] = self.range;
        let [d0, d1] = self.domain_ms;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { ((px - r0) / span) as f64 };
        from_millis(d0 + t * (d1 - d0))
    }

    fn range(&self) -> [f32; 2] {
        self.range
    }
}
