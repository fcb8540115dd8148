// File: crates/scatter-core/src/render/raster.rs
// Summary: Headless raster pipeline using Skia CPU surfaces: chart, tooltip overlay, error banner; RGBA8 and PNG out.

use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;

use crate::axis::{Axis, AxisOrient};
use crate::chart::Chart;
use crate::error::ChartResult;
use crate::geometry::{PointF, RectF};
use crate::interaction::TooltipState;
use crate::render::svg::write_creating_dirs;
use crate::text::{Anchor, TextShaper};
use crate::theme::{Rgba, Theme};

const TICK_FONT: f32 = 10.0;
const TITLE_FONT: f32 = 16.0;
const LEGEND_FONT: f32 = 9.6;
const TOOLTIP_FONT: f32 = 12.0;
const TOOLTIP_PAD: f32 = 6.0;
const CRISP: f32 = 0.5;

/// Tightly packed, unpremultiplied RGBA8 pixels.
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: i32,
    pub height: i32,
    pub stride: usize,
}

impl RgbaFrame {
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width as u32, self.height as u32, self.pixels.clone())
            .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", self.width, self.height))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG")?;
        Ok(out.into_inner())
    }
}

#[inline]
fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill(c: Rgba) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color(c));
    p
}

fn stroke(c: Rgba, width: f32) -> skia::Paint {
    let mut p = fill(c);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p
}

/// Paint into a fresh CPU surface and read it back as RGBA8.
fn rasterize(width: i32, height: i32, paint: impl FnOnce(&skia::Canvas)) -> Result<RgbaFrame> {
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
    paint(surface.canvas());

    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(anyhow!("reading back raster pixels failed"));
    }
    Ok(RgbaFrame { pixels, width, height, stride })
}

/// Render the chart, optionally with the tooltip overlay as it looks at `now`.
#[tracing::instrument(skip_all, fields(w = chart.options().width, h = chart.options().height))]
pub fn render_rgba8(chart: &Chart, tooltip: Option<(&TooltipState, Duration)>) -> Result<RgbaFrame> {
    let opts = chart.options();
    let shaper = opts.draw_labels.then(TextShaper::new);
    rasterize(opts.width, opts.height, |canvas| {
        paint_chart(canvas, chart, shaper.as_ref());
        if let Some((state, now)) = tooltip {
            paint_tooltip(canvas, chart, state, now, shaper.as_ref());
        }
    })
}

/// Full-canvas error banner used when there is no chart to show.
pub fn render_error_banner_rgba8(width: i32, height: i32, message: &str, theme: &Theme) -> Result<RgbaFrame> {
    let shaper = TextShaper::new();
    rasterize(width.max(1), height.max(1), |canvas| {
        canvas.clear(color(theme.background));
        let banner = skia::Rect::from_xywh(0.0, 0.0, width as f32, 48.0);
        canvas.draw_rect(banner, &fill(theme.error_banner));
        shaper.draw(canvas, message, 16.0, 30.0, 14.0, Rgba::rgb(255, 255, 255), Anchor::Start);
    })
}

fn paint_chart(canvas: &skia::Canvas, chart: &Chart, shaper: Option<&TextShaper>) {
    let theme = chart.theme();
    canvas.clear(color(theme.background));

    for m in chart.markers() {
        canvas.draw_circle((m.center.x, m.center.y), m.radius, &fill(m.fill));
    }

    paint_axis(canvas, &chart.x_axis(), chart.x_axis_origin(), theme, shaper);
    paint_axis(canvas, &chart.y_axis(), chart.y_axis_origin(), theme, shaper);
    paint_legend(canvas, chart, shaper);
}

fn paint_axis(canvas: &skia::Canvas, axis: &Axis, origin: PointF, theme: &Theme, shaper: Option<&TextShaper>) {
    canvas.save();
    canvas.translate((origin.x, origin.y));

    let line = stroke(theme.axis_line, 1.0);
    let [r0, r1] = skia_range(axis);
    let outer = axis.tick_sign() * axis.tick_size_outer;
    let inner = axis.tick_sign() * axis.tick_size_inner;
    let label_at = axis.label_offset();

    match axis.orient {
        AxisOrient::Bottom => {
            canvas.draw_line((r0, outer), (r0, CRISP), &line);
            canvas.draw_line((r0, CRISP), (r1, CRISP), &line);
            canvas.draw_line((r1, CRISP), (r1, outer), &line);
        }
        AxisOrient::Left => {
            canvas.draw_line((outer, r0), (CRISP, r0), &line);
            canvas.draw_line((CRISP, r0), (CRISP, r1), &line);
            canvas.draw_line((CRISP, r1), (outer, r1), &line);
        }
    }

    for tick in axis.ticks() {
        let p = tick.px + CRISP;
        match axis.orient {
            AxisOrient::Bottom => {
                canvas.draw_line((p, 0.0), (p, inner), &line);
                if let Some(s) = shaper {
                    let baseline = label_at + 0.71 * TICK_FONT;
                    s.draw(canvas, &tick.label, p, baseline, TICK_FONT, theme.axis_label, Anchor::Middle);
                }
            }
            AxisOrient::Left => {
                canvas.draw_line((0.0, p), (inner, p), &line);
                if let Some(s) = shaper {
                    let baseline = p + 0.32 * TICK_FONT;
                    s.draw(canvas, &tick.label, label_at, baseline, TICK_FONT, theme.axis_label, Anchor::End);
                }
            }
        }
    }

    if let (Some(title), Some(s)) = (&axis.title, shaper) {
        canvas.save();
        canvas.rotate(title.rotate_deg, None);
        let baseline = title.y + title.dy_em * TITLE_FONT;
        s.draw(canvas, &title.text, title.x, baseline, TITLE_FONT, theme.title, Anchor::Middle);
        canvas.restore();
    }

    canvas.restore();
}

fn skia_range(axis: &Axis) -> [f32; 2] {
    use crate::scale::ScaleTransform;
    let [r0, r1] = axis.scale.range();
    [r0 + CRISP, r1 + CRISP]
}

fn paint_legend(canvas: &skia::Canvas, chart: &Chart, shaper: Option<&TextShaper>) {
    let legend = chart.legend();
    let label = chart.theme().legend_label;
    canvas.save();
    canvas.translate((legend.origin.x, legend.origin.y));
    let s = legend.swatch;
    for entry in &legend.entries {
        let rect = skia::Rect::from_xywh(s.left, entry.offset_y + s.top, s.width(), s.height());
        canvas.draw_rect(rect, &fill(entry.color));
        if let Some(shaper) = shaper {
            shaper.draw(canvas, &entry.label, 0.0, entry.offset_y, LEGEND_FONT, label, Anchor::End);
        }
    }
    canvas.restore();
}

/// Tooltip box for `state`, kept inside the canvas.
pub fn tooltip_rect(chart: &Chart, state: &TooltipState, shaper: Option<&TextShaper>) -> Option<RectF> {
    let content = state.content.as_ref()?;
    let line_h = TOOLTIP_FONT * 1.3;
    let widest = content
        .lines
        .iter()
        .map(|l| match shaper {
            Some(s) => s.measure_width(l, TOOLTIP_FONT),
            None => l.chars().count() as f32 * TOOLTIP_FONT * 0.55,
        })
        .fold(0.0f32, f32::max);
    let rect = RectF::from_ltwh(
        state.position.x,
        state.position.y,
        widest + 2.0 * TOOLTIP_PAD,
        content.lines.len() as f32 * line_h + 2.0 * TOOLTIP_PAD,
    );
    Some(rect.clamp_into(chart.bounds()))
}

fn paint_tooltip(canvas: &skia::Canvas, chart: &Chart, state: &TooltipState, now: Duration, shaper: Option<&TextShaper>) {
    let opacity = state.opacity(now).clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }
    let Some(rect) = tooltip_rect(chart, state, shaper) else { return };
    let Some(content) = state.content.as_ref() else { return };
    let theme = chart.theme();
    let alpha = |c: Rgba| c.with_alpha((c.a as f32 * opacity).round() as u8);

    let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
    let rrect = skia::RRect::new_rect_xy(r, 4.0, 4.0);
    canvas.draw_rrect(&rrect, &fill(alpha(theme.tooltip_background)));
    canvas.draw_rrect(&rrect, &stroke(alpha(theme.tooltip_border), 1.0));

    if let Some(s) = shaper {
        let line_h = TOOLTIP_FONT * 1.3;
        for (i, line) in content.lines.iter().enumerate() {
            let baseline = rect.top + TOOLTIP_PAD + TOOLTIP_FONT + i as f32 * line_h;
            s.draw(canvas, line, rect.left + TOOLTIP_PAD, baseline, TOOLTIP_FONT, alpha(theme.tooltip_text), Anchor::Start);
        }
    }
}

impl Chart {
    pub fn render_to_rgba8(&self) -> Result<RgbaFrame> {
        render_rgba8(self, None)
    }

    /// Chart plus the tooltip overlay as it looks at `now`.
    pub fn render_to_rgba8_with_tooltip(&self, tooltip: &TooltipState, now: Duration) -> Result<RgbaFrame> {
        render_rgba8(self, Some((tooltip, now)))
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        render_rgba8(self, None)?.to_png()
    }

    /// Render the chart to a PNG at `path` using a CPU raster surface.
    pub fn render_to_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let bytes = self.render_to_png_bytes()?;
        write_creating_dirs(path.as_ref(), &bytes)
    }

    pub fn render_to_png_with_tooltip(&self, path: impl AsRef<Path>, tooltip: &TooltipState, now: Duration) -> ChartResult<()> {
        let bytes = render_rgba8(self, Some((tooltip, now)))?.to_png()?;
        write_creating_dirs(path.as_ref(), &bytes)
    }
}
