// File: crates/scatter-core/src/interaction.rs
// Summary: Pointer hover handling: marker enter/leave turns into tooltip content, position and fades.
// Notes:
// - Events are dispatched one at a time on the caller's thread; timestamps are supplied by the
//   caller so fades are deterministic under test.
// - The tooltip is the only mutable state. Hovering a marker overwrites whatever it showed before.

use std::time::Duration;

use crate::chart::Chart;
use crate::config::TooltipOptions;
use crate::geometry::PointF;
use crate::record::RaceRecord;

/// Text shown for one rider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub lines: Vec<String>,
    /// Year of the hovered marker, exposed as `data-year`.
    pub data_year: i64,
}

impl TooltipContent {
    pub fn for_record(r: &RaceRecord) -> Self {
        let mut lines = vec![
            format!("{}: {}", r.name, r.nationality),
            format!("Year: {}, Time: {}", r.year, r.time),
        ];
        if let Some(note) = r.doping_note() {
            lines.push(note.to_string());
        }
        Self { lines, data_year: r.year }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Opacity transition with cubic in-out easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    start: Duration,
    duration: Duration,
}

impl Fade {
    pub const fn settled(opacity: f32) -> Self {
        Self { from: opacity, to: opacity, start: Duration::ZERO, duration: Duration::ZERO }
    }

    pub fn new(from: f32, to: f32, start: Duration, duration: Duration) -> Self {
        Self { from, to, start, duration }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn opacity_at(&self, now: Duration) -> f32 {
        if self.duration.is_zero() || now >= self.start + self.duration {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = (now - self.start).as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_cubic_in_out(t)
    }

    pub fn is_running(&self, now: Duration) -> bool {
        self.from != self.to && now < self.start + self.duration
    }
}

fn ease_cubic_in_out(t: f32) -> f32 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    pub content: Option<TooltipContent>,
    /// Top-left corner in canvas coordinates.
    pub position: PointF,
    fade: Fade,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self { content: None, position: PointF::default(), fade: Fade::settled(0.0) }
    }
}

impl TooltipState {
    pub fn opacity(&self, now: Duration) -> f32 {
        self.fade.opacity_at(now)
    }

    /// Showing or fading in.
    pub fn is_visible(&self) -> bool {
        self.fade.target() > 0.0
    }

    pub fn data_year(&self) -> Option<i64> {
        self.content.as_ref().map(|c| c.data_year)
    }

    pub fn fade(&self) -> &Fade {
        &self.fade
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered marker `marker` at (x, y).
    Enter { marker: usize, x: f32, y: f32 },
    /// Pointer left marker `marker`.
    Leave { marker: usize },
    /// Raw pointer position; hit-tested against markers.
    Move { x: f32, y: f32 },
    /// Pointer left the canvas.
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipChange {
    Shown { marker: usize },
    Hidden { marker: usize },
}

pub struct Interaction {
    hovered: Option<usize>,
    tooltip: TooltipState,
    opts: TooltipOptions,
}

impl Interaction {
    pub fn new(opts: TooltipOptions) -> Self {
        Self { hovered: None, tooltip: TooltipState::default(), opts }
    }

    pub fn hovered(&self) -> Option<usize> { self.hovered }
    pub fn tooltip(&self) -> &TooltipState { &self.tooltip }

    fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.opts.fade_ms)
    }

    /// Dispatch one pointer event; returns the tooltip transitions it caused, in order.
    pub fn handle(&mut self, chart: &Chart, event: PointerEvent, now: Duration) -> Vec<TooltipChange> {
        let mut changes = Vec::new();
        match event {
            PointerEvent::Enter { marker, x, y } => {
                changes.extend(self.on_enter(chart, marker, PointF::new(x, y), now));
            }
            PointerEvent::Leave { marker } => {
                if self.hovered == Some(marker) {
                    changes.extend(self.on_leave(now));
                }
            }
            PointerEvent::Move { x, y } => {
                let p = PointF::new(x, y);
                let hit = chart.hit_test(p);
                if hit != self.hovered {
                    if self.hovered.is_some() {
                        changes.extend(self.on_leave(now));
                    }
                    if let Some(marker) = hit {
                        changes.extend(self.on_enter(chart, marker, p, now));
                    }
                }
            }
            PointerEvent::Exit => {
                if self.hovered.is_some() {
                    changes.extend(self.on_leave(now));
                }
            }
        }
        changes
    }

    /// Show the tooltip for `marker` near `pointer`, fading in from the current opacity.
    pub fn on_enter(&mut self, chart: &Chart, marker: usize, pointer: PointF, now: Duration) -> Option<TooltipChange> {
        let entry = chart.dataset().get(marker)?;
        let current = self.tooltip.opacity(now);
        let [dx, dy] = self.opts.offset;
        self.tooltip.content = Some(TooltipContent::for_record(&entry.record));
        self.tooltip.position = PointF::new(pointer.x + dx, pointer.y + dy);
        self.tooltip.fade = Fade::new(current, self.opts.opacity, now, self.fade_duration());
        self.hovered = Some(marker);
        tracing::trace!(marker, year = entry.record.year, "tooltip shown");
        Some(TooltipChange::Shown { marker })
    }

    /// Fade the tooltip out; its content stays until the next hover overwrites it.
    pub fn on_leave(&mut self, now: Duration) -> Option<TooltipChange> {
        let marker = self.hovered.take()?;
        let current = self.tooltip.opacity(now);
        self.tooltip.fade = Fade::new(current, 0.0, now, self.fade_duration());
        tracing::trace!(marker, "tooltip hidden");
        Some(TooltipChange::Hidden { marker })
    }

    /// A fade is still in progress at `now`.
    pub fn is_animating(&self, now: Duration) -> bool {
        self.tooltip.fade.is_running(now)
    }
}
