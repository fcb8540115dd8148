// File: crates/viewer/src/main.rs
// Summary: Windowed viewer: loads the dataset in the background, blits the chart via RGBA (winit + softbuffer)
// and shows hover tooltips with fades.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use scatter_core::render::render_error_banner_rgba8;
use scatter_core::{
    spawn_load, Chart, ChartResult, Dataset, Interaction, PointerEvent, RenderOptions, Rgba, RgbaFrame,
    DEFAULT_DATA_PATH,
};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::WindowBuilder;

/// Redraw cadence while a tooltip fade is running.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug)]
enum UserEvent {
    DatasetLoaded(ChartResult<Dataset>),
}

enum Stage {
    Loading,
    Ready { chart: Chart, interaction: Interaction },
    Failed(String),
}

struct Viewer {
    opts: RenderOptions,
    stage: Stage,
    started: Instant,
}

impl Viewer {
    fn new(opts: RenderOptions) -> Self {
        Self { opts, stage: Stage::Loading, started: Instant::now() }
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn on_loaded(&mut self, result: ChartResult<Dataset>) {
        self.stage = match result.and_then(|ds| Chart::new(ds, self.opts.clone())) {
            Ok(chart) => {
                tracing::info!(markers = chart.dataset().len(), "chart ready");
                Stage::Ready { chart, interaction: Interaction::new(self.opts.tooltip.clone()) }
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot show chart");
                Stage::Failed(format!("Could not load cyclist data: {e}"))
            }
        };
    }

    /// Lay the chart out again for the new window size.
    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.opts.width = size.width.max(1) as i32;
        self.opts.height = size.height.max(1) as i32;
        if let Stage::Ready { chart, interaction } = &mut self.stage {
            match Chart::new(chart.dataset().clone(), self.opts.clone()) {
                Ok(resized) => {
                    *chart = resized;
                    *interaction = Interaction::new(self.opts.tooltip.clone());
                }
                Err(e) => tracing::warn!(error = %e, "relayout failed; keeping previous size"),
            }
        }
    }

    /// Feed a pointer event; true when the tooltip changed.
    fn pointer(&mut self, event: PointerEvent) -> bool {
        let now = self.now();
        match &mut self.stage {
            Stage::Ready { chart, interaction } => !interaction.handle(chart, event, now).is_empty(),
            _ => false,
        }
    }

    fn is_animating(&self) -> bool {
        match &self.stage {
            Stage::Ready { interaction, .. } => interaction.is_animating(self.now()),
            _ => false,
        }
    }

    fn frame(&self) -> Result<RgbaFrame> {
        let (w, h) = (self.opts.width, self.opts.height);
        match &self.stage {
            Stage::Loading => Ok(blank(w, h, self.opts.resolved_theme().background)),
            Stage::Ready { chart, interaction } => chart.render_to_rgba8_with_tooltip(interaction.tooltip(), self.now()),
            Stage::Failed(msg) => render_error_banner_rgba8(w, h, msg, &self.opts.resolved_theme()),
        }
    }
}

fn blank(width: i32, height: i32, bg: Rgba) -> RgbaFrame {
    let (width, height) = (width.max(1), height.max(1));
    let pixels = [bg.r, bg.g, bg.b, bg.a].repeat(width as usize * height as usize);
    RgbaFrame { pixels, width, height, stride: width as usize * 4 }
}

/// RGBA8 to softbuffer's 0RGB words.
fn blit(frame: &RgbaFrame, dst: &mut [u32]) {
    for (d, px) in dst.iter_mut().zip(frame.pixels.chunks_exact(4)) {
        *d = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
}

fn present(viewer: &Viewer, surface: &mut softbuffer::Surface) -> Result<()> {
    let frame = viewer.frame()?;
    let (Some(w), Some(h)) = (NonZeroU32::new(frame.width as u32), NonZeroU32::new(frame.height as u32)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("acquire buffer: {e}"))?;
    blit(&frame, &mut buffer);
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Args: [data.json] [options.json]
    let mut args = std::env::args().skip(1);
    let data = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
    let opts = match args.next() {
        Some(cfg) => RenderOptions::from_json_file(&cfg).with_context(|| format!("failed to read config '{cfg}'"))?,
        None => RenderOptions::default(),
    };

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let window = WindowBuilder::new()
        .with_title("Doping in Professional Bicycle Racing")
        .with_inner_size(PhysicalSize::new(opts.width.max(1) as u32, opts.height.max(1) as u32))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let proxy = event_loop.create_proxy();
    spawn_load(data, move |result| {
        if proxy.send_event(UserEvent::DatasetLoaded(result)).is_err() {
            tracing::warn!("window closed before the dataset arrived");
        }
    })
    .context("spawn loader thread")?;

    let mut viewer = Viewer::new(opts);
    viewer.resize(window.inner_size());
    let mut animating = false;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::UserEvent(UserEvent::DatasetLoaded(result)) => {
                viewer.on_loaded(result);
                window.request_redraw();
            }
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(size) => {
                    viewer.resize(size);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let event = PointerEvent::Move { x: position.x as f32, y: position.y as f32 };
                    if viewer.pointer(event) {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if viewer.pointer(PointerEvent::Exit) {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&viewer, &mut surface) {
                    tracing::error!("{e:#}");
                }
            }
            Event::MainEventsCleared => {
                let running = viewer.is_animating();
                // one more frame after a fade ends so it settles on its final opacity
                if running || animating {
                    window.request_redraw();
                }
                if running {
                    *control_flow = ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL);
                }
                animating = running;
            }
            _ => {}
        }
    })
}
