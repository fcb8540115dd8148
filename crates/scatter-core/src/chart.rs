// File: crates/scatter-core/src/chart.rs
// Summary: Chart render context: dataset, domains, scales and the marker/axis/legend layout built from them.

use crate::axis::{Axis, AxisTitle, TickFormat};
use crate::config::RenderOptions;
use crate::domain::Domains;
use crate::error::ChartResult;
use crate::geometry::{PointF, RectF};
use crate::record::Dataset;
use crate::scale::{ScaleTransform, TimeScale};
use crate::theme::{Rgba, Theme};
use crate::time::{TimeInterval, TimePoint, TimeUnit};

/// One plotted rider.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Index into the dataset.
    pub index: usize,
    pub center: PointF,
    pub radius: f32,
    pub fill: Rgba,
    pub alleged: bool,
    /// Raw race year.
    pub year: i64,
    /// Parsed race time.
    pub time: TimePoint,
}

impl Marker {
    pub fn data_xvalue(&self) -> String {
        self.year.to_string()
    }

    pub fn data_yvalue(&self) -> String {
        self.time.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    pub fn contains(&self, p: PointF) -> bool {
        self.center.distance_sq(p) <= self.radius * self.radius
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgba,
    /// Vertical offset from the legend origin.
    pub offset_y: f32,
}

/// Static two-entry legend; labels are right-aligned at the origin, swatches sit right of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub origin: PointF,
    pub entries: Vec<LegendEntry>,
    /// Swatch rect relative to each entry's origin.
    pub swatch: RectF,
}

pub struct Chart {
    dataset: Dataset,
    domains: Domains,
    x_scale: TimeScale,
    y_scale: TimeScale,
    opts: RenderOptions,
    theme: Theme,
}

impl Chart {
    /// Build the render context once the full dataset is available.
    /// Fails with `EmptyDataset` when there is nothing to derive domains from.
    #[tracing::instrument(skip_all, fields(records = dataset.len()))]
    pub fn new(dataset: Dataset, opts: RenderOptions) -> ChartResult<Self> {
        let domains = Domains::with_x_padding(&dataset, opts.x_pad_ms)?;
        let insets = opts.insets;

        let x_scale = TimeScale::new(domains.x, [insets.left as f32, opts.plot_right()])
            .nice_with(TimeInterval::of(TimeUnit::Year));
        let y_scale = TimeScale::new(domains.y, [opts.plot_bottom(), insets.top as f32]).nice();
        tracing::debug!(x = ?x_scale.domain(), y = ?y_scale.domain(), "scales niced");

        let theme = opts.resolved_theme();
        Ok(Self { dataset, domains, x_scale, y_scale, opts, theme })
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn domains(&self) -> &Domains { &self.domains }
    pub fn x_scale(&self) -> &TimeScale { &self.x_scale }
    pub fn y_scale(&self) -> &TimeScale { &self.y_scale }
    pub fn options(&self) -> &RenderOptions { &self.opts }
    pub fn theme(&self) -> &Theme { &self.theme }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn x_axis(&self) -> Axis {
        Axis::bottom(self.x_scale)
    }

    pub fn y_axis(&self) -> Axis {
        Axis::left(self.y_scale)
            .with_format(TickFormat::RaceTime)
            .with_title(AxisTitle {
                text: self.opts.y_title.clone(),
                x: -(self.opts.height as f32 / 2.0),
                y: -60.0,
                dy_em: 0.75,
                rotate_deg: -90.0,
            })
    }

    /// Translation applied to the X axis group.
    pub fn x_axis_origin(&self) -> PointF {
        PointF::new(0.0, self.opts.plot_bottom())
    }

    /// Translation applied to the Y axis group.
    pub fn y_axis_origin(&self) -> PointF {
        PointF::new(self.opts.insets.left as f32, 0.0)
    }

    pub fn markers(&self) -> Vec<Marker> {
        self.dataset
            .entries()
            .iter()
            .enumerate()
            .map(|(index, e)| {
                let alleged = e.record.has_doping_allegation();
                Marker {
                    index,
                    center: PointF::new(self.x_scale.to_px(e.year), self.y_scale.to_px(e.time)),
                    radius: self.opts.marker_radius,
                    fill: self.theme.marker_fill(alleged),
                    alleged,
                    year: e.record.year,
                    time: e.time,
                }
            })
            .collect()
    }

    /// Topmost marker under `p`; later markers paint over earlier ones.
    pub fn hit_test(&self, p: PointF) -> Option<usize> {
        self.markers().into_iter().rev().find(|m| m.contains(p)).map(|m| m.index)
    }

    pub fn legend(&self) -> Legend {
        let [fx, fy] = self.opts.legend_anchor;
        let origin = PointF::new(self.opts.width as f32 * fx, self.opts.height as f32 * fy);
        let colors = [self.theme.no_doping, self.theme.doping];
        let entries = self
            .opts
            .legend_labels
            .iter()
            .zip(colors)
            .enumerate()
            .map(|(i, (label, color))| LegendEntry { label: label.clone(), color, offset_y: i as f32 * 20.0 })
            .collect();
        Legend { origin, entries, swatch: RectF::from_ltwh(5.0, -10.0, 14.0, 14.0) }
    }

    /// Whole canvas.
    pub fn bounds(&self) -> RectF {
        RectF::from_ltwh(0.0, 0.0, self.opts.width as f32, self.opts.height as f32)
    }
}
