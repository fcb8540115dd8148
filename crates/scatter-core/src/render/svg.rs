// File: crates/scatter-core/src/render/svg.rs
// Summary: SVG document and HTML fragment output (markers, axes, y title, legend, tooltip overlay).

use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

use crate::axis::{fmt_num, Axis, AxisOrient};
use crate::chart::Chart;
use crate::error::ChartResult;
use crate::geometry::PointF;
use crate::interaction::{TooltipContent, TooltipState};
use crate::theme::Theme;

/// Half-pixel shift that keeps 1px axis strokes crisp.
const CRISP: f32 = 0.5;

#[tracing::instrument(skip_all, fields(markers = chart.dataset().len()))]
pub fn render_svg(chart: &Chart) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_svg(chart, &mut out);
    out
}

/// `.outer-container` fragment holding the SVG canvas and the tooltip overlay.
/// Without a tooltip state the overlay is emitted empty and fully transparent.
pub fn render_html(chart: &Chart, tooltip: Option<(&TooltipState, Duration)>) -> String {
    let overlay = match tooltip {
        Some((state, now)) => tooltip_html(state, now),
        None => tooltip_html(&TooltipState::default(), Duration::ZERO),
    };
    format!("<div class=\"outer-container\">\n{}{}\n</div>\n", render_svg(chart), overlay)
}

/// The `#tooltip` overlay element for `state` as seen at `now`.
pub fn tooltip_html(state: &TooltipState, now: Duration) -> String {
    let body = state
        .content
        .as_ref()
        .map(|c| c.lines.iter().map(|l| escape_xml(l)).collect::<Vec<_>>().join("<br>"))
        .unwrap_or_default();
    let year = state
        .data_year()
        .map(|y| format!(" data-year=\"{y}\""))
        .unwrap_or_default();
    format!(
        "<div id=\"tooltip\" class=\"tooltip\"{} style=\"opacity: {}; left: {}px; top: {}px\">{}</div>",
        year,
        fmt_num(state.opacity(now)),
        fmt_num(state.position.x),
        fmt_num(state.position.y),
        body
    )
}

pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn write_svg(chart: &Chart, out: &mut String) -> std::fmt::Result {
    let opts = chart.options();
    let theme = chart.theme();
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" style=\"border: none\">",
        w = opts.width,
        h = opts.height
    )?;
    writeln!(out, "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>", theme.background)?;

    for m in chart.markers() {
        let tip = chart
            .dataset()
            .get(m.index)
            .map(|e| TooltipContent::for_record(&e.record).text())
            .unwrap_or_default();
        writeln!(
            out,
            "<circle class=\"dot\" data-xvalue=\"{}\" data-yvalue=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"><title>{}</title></circle>",
            m.data_xvalue(),
            m.data_yvalue(),
            fmt_num(m.center.x),
            fmt_num(m.center.y),
            fmt_num(m.radius),
            m.fill,
            escape_xml(&tip)
        )?;
    }

    write_axis(out, "x-axis", &chart.x_axis(), chart.x_axis_origin(), theme)?;
    write_axis(out, "y-axis", &chart.y_axis(), chart.y_axis_origin(), theme)?;
    write_legend(out, chart)?;

    writeln!(out, "</svg>")
}

fn write_axis(out: &mut String, id: &str, axis: &Axis, origin: PointF, theme: &Theme) -> std::fmt::Result {
    let anchor = match axis.orient {
        AxisOrient::Bottom => "middle",
        AxisOrient::Left => "end",
    };
    writeln!(
        out,
        "<g id=\"{id}\" transform=\"translate({}, {})\" fill=\"none\" font-size=\"10\" font-family=\"sans-serif\" text-anchor=\"{anchor}\">",
        fmt_num(origin.x),
        fmt_num(origin.y)
    )?;
    writeln!(out, "<path class=\"domain\" stroke=\"{}\" d=\"{}\"/>", theme.axis_line, axis.domain_path(CRISP))?;

    let inner = fmt_num(axis.tick_sign() * axis.tick_size_inner);
    let label = fmt_num(axis.label_offset());
    for tick in axis.ticks() {
        let pos = fmt_num(tick.px + CRISP);
        let text = escape_xml(&tick.label);
        match axis.orient {
            AxisOrient::Bottom => writeln!(
                out,
                "<g class=\"tick\" opacity=\"1\" transform=\"translate({pos},0)\"><line stroke=\"{}\" y2=\"{inner}\"/><text fill=\"{}\" y=\"{label}\" dy=\"0.71em\">{text}</text></g>",
                theme.axis_line, theme.axis_label
            )?,
            AxisOrient::Left => writeln!(
                out,
                "<g class=\"tick\" opacity=\"1\" transform=\"translate(0,{pos})\"><line stroke=\"{}\" x2=\"{inner}\"/><text fill=\"{}\" x=\"{label}\" dy=\"0.32em\">{text}</text></g>",
                theme.axis_line, theme.axis_label
            )?,
        }
    }

    if let Some(title) = &axis.title {
        writeln!(
            out,
            "<text text-anchor=\"middle\" class=\"yAxis-label\" x=\"{}\" y=\"{}\" dy=\"{}em\" transform=\"rotate({})\" fill=\"{}\">{}</text>",
            fmt_num(title.x),
            fmt_num(title.y),
            fmt_num(title.dy_em),
            fmt_num(title.rotate_deg),
            theme.title,
            escape_xml(&title.text)
        )?;
    }
    writeln!(out, "</g>")
}

fn write_legend(out: &mut String, chart: &Chart) -> std::fmt::Result {
    let legend = chart.legend();
    let label_fill = chart.theme().legend_label;
    writeln!(
        out,
        "<g id=\"legend\" transform=\"translate({},{})\">",
        fmt_num(legend.origin.x),
        fmt_num(legend.origin.y)
    )?;
    let s = legend.swatch;
    for entry in &legend.entries {
        writeln!(
            out,
            "<g class=\"legend-label\" transform=\"translate(0, {})\"><text text-anchor=\"end\" font-size=\"0.6em\" fill=\"{}\">{}</text><rect width=\"{}\" height=\"{}\" y=\"{}\" x=\"{}\" fill=\"{}\"/></g>",
            fmt_num(entry.offset_y),
            label_fill,
            escape_xml(&entry.label),
            fmt_num(s.width()),
            fmt_num(s.height()),
            fmt_num(s.top),
            fmt_num(s.left),
            entry.color
        )?;
    }
    writeln!(out, "</g>")
}

impl Chart {
    pub fn to_svg_string(&self) -> String {
        render_svg(self)
    }

    /// Write the SVG document to `path`, creating parent directories.
    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        write_creating_dirs(path.as_ref(), render_svg(self).as_bytes())
    }

    /// Write the HTML fragment (SVG + hidden tooltip overlay) to `path`.
    pub fn render_to_html(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        write_creating_dirs(path.as_ref(), render_html(self, None).as_bytes())
    }

    /// HTML fragment with the tooltip overlay as it looks at `now`.
    pub fn render_to_html_with_tooltip(&self, path: impl AsRef<Path>, tooltip: &TooltipState, now: Duration) -> ChartResult<()> {
        write_creating_dirs(path.as_ref(), render_html(self, Some((tooltip, now))).as_bytes())
    }
}

pub(crate) fn write_creating_dirs(path: &Path, bytes: &[u8]) -> ChartResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
