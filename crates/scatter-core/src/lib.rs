// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; loads the cyclist dataset and renders the doping scatter chart.

pub mod axis;
pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod loader;
pub mod record;
pub mod render;
pub mod scale;
pub mod text;
pub mod theme;
pub mod time;
pub mod types;

pub use axis::{Axis, AxisOrient, Tick, TickFormat};
pub use chart::{Chart, Legend, LegendEntry, Marker};
pub use config::{RenderOptions, TooltipOptions};
pub use domain::{extent, Domains};
pub use error::{ChartError, ChartResult};
pub use interaction::{Interaction, PointerEvent, TooltipChange, TooltipContent, TooltipState};
pub use loader::{load_from_path, load_from_reader, parse_dataset, spawn_load, DEFAULT_DATA_PATH};
pub use record::{Dataset, RaceRecord};
pub use render::raster::RgbaFrame;
pub use scale::{ScaleTransform, TimeScale};
pub use theme::{Rgba, Theme};
pub use time::{TimeInterval, TimePoint, TimeUnit};
