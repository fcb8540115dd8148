// File: crates/scatter-cli/src/lib.rs
// Summary: Argument model and the load → chart → write pipeline behind the `scatter` binary.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use scatter_core::{load_from_path, Chart, Interaction, PointerEvent, RenderOptions, DEFAULT_DATA_PATH};

/// SVG written when no output flag is given.
pub const DEFAULT_SVG_PATH: &str = "chart.svg";

#[derive(Parser, Debug)]
#[command(name = "scatter", version, about = "Doping allegations in professional bicycle racing")]
pub struct Cli {
    /// Input dataset JSON.
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Output SVG path. Defaults to `chart.svg` when no output is given.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Output HTML fragment path (SVG + tooltip overlay).
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Render options JSON; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Theme preset (light, dark).
    #[arg(long)]
    pub theme: Option<String>,

    #[arg(long)]
    pub width: Option<i32>,

    #[arg(long)]
    pub height: Option<i32>,

    /// Show the tooltip for this record (0-based) in HTML and PNG output.
    #[arg(long)]
    pub hover: Option<usize>,

    /// Print a JSON summary of domains and ticks to stdout.
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

impl Cli {
    /// Where the SVG goes: `--svg`, or `chart.svg` when no output flag is set.
    pub fn svg_target(&self) -> Option<PathBuf> {
        let wants_any = self.svg.is_some() || self.html.is_some() || self.png.is_some();
        self.svg.clone().or_else(|| (!wants_any).then(|| PathBuf::from(DEFAULT_SVG_PATH)))
    }

    /// Config file (if any) with the flag overrides applied.
    pub fn render_options(&self) -> Result<RenderOptions> {
        let mut opts = match &self.config {
            Some(path) => RenderOptions::from_json_file(path)
                .with_context(|| format!("failed to read config '{}'", path.display()))?,
            None => RenderOptions::default(),
        };
        if let Some(theme) = &self.theme {
            opts.theme = theme.clone();
        }
        if let Some(w) = self.width {
            opts.width = w;
        }
        if let Some(h) = self.height {
            opts.height = h;
        }
        Ok(opts)
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let opts = cli.render_options()?;
    let dataset = load_from_path(&cli.data)
        .with_context(|| format!("failed to load dataset '{}'", cli.data.display()))?;
    let chart = Chart::new(dataset, opts).context("cannot build chart")?;

    if cli.summary {
        println!("{}", serde_json::to_string_pretty(&summary(&chart))?);
    }

    let mut interaction = Interaction::new(chart.options().tooltip.clone());
    if let Some(index) = cli.hover {
        let marker = chart
            .markers()
            .into_iter()
            .find(|m| m.index == index)
            .with_context(|| format!("--hover {index}: only {} records", chart.dataset().len()))?;
        let event = PointerEvent::Enter { marker: index, x: marker.center.x, y: marker.center.y };
        interaction.handle(&chart, event, Duration::ZERO);
    }
    // past the fade-in, so the overlay is drawn at its resting opacity
    let settled = Duration::from_millis(chart.options().tooltip.fade_ms) + Duration::from_secs(1);
    let tooltip = cli.hover.map(|_| (interaction.tooltip(), settled));

    if let Some(path) = cli.svg_target() {
        chart.render_to_svg(&path).with_context(|| format!("write svg '{}'", path.display()))?;
    }
    if let Some(path) = &cli.html {
        match tooltip {
            Some((state, now)) => chart.render_to_html_with_tooltip(path, state, now),
            None => chart.render_to_html(path),
        }
        .with_context(|| format!("write html '{}'", path.display()))?;
    }
    if let Some(path) = &cli.png {
        match tooltip {
            Some((state, now)) => chart.render_to_png_with_tooltip(path, state, now),
            None => chart.render_to_png(path),
        }
        .with_context(|| format!("write png '{}'", path.display()))?;
    }
    Ok(())
}

/// Record counts, niced domains and tick labels.
pub fn summary(chart: &Chart) -> serde_json::Value {
    let fmt = |t: scatter_core::TimePoint| t.format("%Y-%m-%dT%H:%M:%S").to_string();
    let [x0, x1] = chart.x_scale().domain();
    let [y0, y1] = chart.y_scale().domain();
    serde_json::json!({
        "records": chart.dataset().len(),
        "alleged": chart.dataset().alleged_count(),
        "x_domain": [fmt(x0), fmt(x1)],
        "y_domain": [fmt(y0), fmt(y1)],
        "x_ticks": chart.x_axis().ticks().into_iter().map(|t| t.label).collect::<Vec<_>>(),
        "y_ticks": chart.y_axis().ticks().into_iter().map(|t| t.label).collect::<Vec<_>>(),
    })
}
