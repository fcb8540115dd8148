// File: crates/scatter-core/src/axis.rs
// Summary: Axis generators: tick placement, label formatting and domain-line geometry for bottom/left axes.

use std::fmt::Write as _;

use crate::scale::{ScaleTransform, TimeScale, DEFAULT_TICK_COUNT};
use crate::time::{format_multi, format_race_time, TimePoint};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Coarsest-unit format (`%Y` on year boundaries, `%B` on months, ...).
    Multi,
    /// Race-time format, `%M:%S`.
    RaceTime,
    /// Any chrono strftime pattern; an invalid one falls back to `Multi`.
    Pattern(String),
}

impl TickFormat {
    pub fn format(&self, t: TimePoint) -> String {
        match self {
            TickFormat::Multi => format_multi(t),
            TickFormat::RaceTime => format_race_time(t),
            TickFormat::Pattern(p) => {
                // chrono reports unknown specifiers as a fmt error
                let mut out = String::new();
                match write!(out, "{}", t.format(p)) {
                    Ok(()) => out,
                    Err(_) => format_multi(t),
                }
            }
        }
    }
}

/// Axis title placed in the axis' own coordinate frame.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTitle {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Extra baseline shift in em.
    pub dy_em: f32,
    /// Rotation in degrees applied around the axis origin.
    pub rotate_deg: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: TimePoint,
    /// Position along the axis (x for bottom, y for left).
    pub px: f32,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: AxisOrient,
    pub scale: TimeScale,
    pub format: TickFormat,
    pub tick_count: usize,
    pub tick_size_inner: f32,
    pub tick_size_outer: f32,
    pub tick_padding: f32,
    pub title: Option<AxisTitle>,
}

impl Axis {
    fn new(orient: AxisOrient, scale: TimeScale) -> Self {
        Self {
            orient,
            scale,
            format: TickFormat::Multi,
            tick_count: DEFAULT_TICK_COUNT,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            title: None,
        }
    }

    pub fn bottom(scale: TimeScale) -> Self {
        Self::new(AxisOrient::Bottom, scale)
    }

    pub fn left(scale: TimeScale) -> Self {
        Self::new(AxisOrient::Left, scale)
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_title(mut self, title: AxisTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn ticks(&self) -> Vec<Tick> {
        self.scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| Tick { value, px: self.scale.to_px(value), label: self.format.format(value) })
            .collect()
    }

    /// Signed direction ticks extend in: +1 down/right of the line for bottom, -1 (left) for left.
    pub fn tick_sign(&self) -> f32 {
        match self.orient {
            AxisOrient::Bottom => 1.0,
            AxisOrient::Left => -1.0,
        }
    }

    /// Distance from the axis line to the tick label anchor.
    pub fn label_offset(&self) -> f32 {
        self.tick_sign() * (self.tick_size_inner.max(0.0) + self.tick_padding)
    }

    /// SVG path data for the domain line with outer ticks, offset by `crisp` (0.5 for 1px lines).
    pub fn domain_path(&self, crisp: f32) -> String {
        let [r0, r1] = self.scale.range();
        let (r0, r1) = (r0 + crisp, r1 + crisp);
        let k = self.tick_sign() * self.tick_size_outer;
        match self.orient {
            AxisOrient::Bottom => format!("M{},{}V{}H{}V{}", fmt_num(r0), fmt_num(k), fmt_num(crisp), fmt_num(r1), fmt_num(k)),
            AxisOrient::Left => format!("M{},{}H{}V{}H{}", fmt_num(k), fmt_num(r0), fmt_num(crisp), fmt_num(r1), fmt_num(k)),
        }
    }
}

/// Compact number formatting for SVG attributes (no trailing `.0`, at most 3 decimals).
pub fn fmt_num(v: f32) -> String {
    let rounded = (v as f64 * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
