// File: crates/scatter-core/src/render/mod.rs
// Summary: Output backends: SVG/HTML markup and Skia raster (PNG, RGBA8).

pub mod raster;
pub mod svg;

pub use raster::render_error_banner_rgba8;
pub use svg::{escape_xml, render_html, render_svg, tooltip_html};
