// File: crates/scatter-core/src/config.rs
// Summary: Render options (layout, labels, tooltip timing) with defaults, loadable from JSON.

use std::path::Path;

use serde::Deserialize;

use crate::error::ChartResult;
use crate::theme::{self, Theme};
use crate::types::{Insets, HEIGHT, MARKER_RADIUS, WIDTH, X_DOMAIN_PAD_MS};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TooltipOptions {
    /// Offset from the pointer to the tooltip's top-left corner.
    pub offset: [f32; 2],
    /// Opacity reached when fully shown.
    pub opacity: f32,
    /// Fade-in and fade-out duration.
    pub fade_ms: u64,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self { offset: [35.0, 60.0], opacity: 0.9, fade_ms: 100 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub marker_radius: f32,
    /// Theme preset name, see [`theme::presets`].
    pub theme: String,
    /// How far the X domain starts before the earliest year.
    pub x_pad_ms: i64,
    pub y_title: String,
    /// Labels for riders without and with allegations, in that order.
    pub legend_labels: [String; 2],
    /// Legend anchor as fractions of the canvas size.
    pub legend_anchor: [f32; 2],
    pub tooltip: TooltipOptions,
    /// Raster backend only; off gives font-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            marker_radius: MARKER_RADIUS,
            theme: "light".into(),
            x_pad_ms: X_DOMAIN_PAD_MS,
            y_title: "Race time (mins)".into(),
            legend_labels: ["No doping allegations".into(), "Racers with doping allegations".into()],
            legend_anchor: [0.95, 0.4],
            tooltip: TooltipOptions::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ChartResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn resolved_theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    /// Plot area right edge.
    pub fn plot_right(&self) -> f32 {
        (self.width - self.insets.right as i32) as f32
    }

    /// Plot area bottom edge.
    pub fn plot_bottom(&self) -> f32 {
        (self.height - self.insets.bottom as i32) as f32
    }
}
