// File: crates/scatter-core/src/types.rs
// Summary: Shared layout constants (canvas size, paddings, marker size, domain padding).

use serde::Deserialize;

/// Default canvas width in logical units.
pub const WIDTH: i32 = 1000;
/// Default canvas height in logical units.
pub const HEIGHT: i32 = 500;

/// Marker circle radius.
pub const MARKER_RADIUS: f32 = 6.0;

/// Six 30-day months, in milliseconds, subtracted from the earliest year.
pub const X_DOMAIN_PAD_MS: i64 = 6 * 30 * 24 * 60 * 60_000;

/// Screen margins around the plot, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80, 20, 20, 20)
    }
}
