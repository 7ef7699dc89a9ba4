//! Headless demo host.
//!
//! Drives three clock configurations — default, big, and colorful — through
//! a deadline-and-sleep redraw loop for a handful of frames each, logging a
//! summary of every emitted frame. No pixels: this is the engine's view of
//! the world, with the rasterizer left out.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use cadran_engine::logging::{LoggingConfig, init_logging};
use cadran_ui::prelude::*;

const FRAMES_PER_CLOCK: u32 = 8;

/// Deferred-callback primitive backed by sleeping until the deadline.
#[derive(Default)]
struct SleepHost {
    deadline: Option<Instant>,
}

impl RedrawHost for SleepHost {
    fn schedule_redraw(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }
}

impl SleepHost {
    /// Blocks until the pending request fires. Returns false when nothing
    /// is scheduled (the loop's exit condition).
    fn wait(&mut self) -> bool {
        let Some(deadline) = self.deadline.take() else {
            return false;
        };
        if let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            thread::sleep(remaining);
        }
        true
    }
}

/// Metrics used when no system font can be found: generic 3:1 split.
struct HeuristicMetrics;

impl TextMetrics for HeuristicMetrics {
    fn ascent(&self, size: f32) -> f32 {
        size * 0.75
    }
    fn descent(&self, size: f32) -> f32 {
        size * -0.25
    }
}

fn load_system_font(fonts: &mut FontSystem) -> Option<cadran_engine::text::FontId> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
    ];

    for path in CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else { continue };
        match fonts.load_font(&bytes) {
            Ok(id) => {
                log::info!("using font metrics from {path}");
                return Some(id);
            }
            Err(err) => log::warn!("skipping {path}: {err}"),
        }
    }
    None
}

fn summarize(list: &DrawList) -> String {
    let mut circles = 0;
    let mut dots = 0;
    let mut texts = 0;
    let mut lines = 0;
    for cmd in list.items() {
        match cmd {
            DrawCmd::FilledCircle(_) | DrawCmd::StrokedCircle(_) => circles += 1,
            DrawCmd::Dot(_) => dots += 1,
            DrawCmd::Text(_) => texts += 1,
            DrawCmd::Line(_) => lines += 1,
        }
    }
    format!("{} cmds ({circles} circles, {texts} numerals, {dots} dots, {lines} hands)", list.len())
}

fn run_clock(name: &str, clock: &mut ClockView, surface: Vec2, metrics: &dyn TextMetrics) {
    log::info!("── {name}: {}×{} surface ──", surface.x, surface.y);
    clock.on_resize(surface);

    let mut host = SleepHost::default();
    let mut list = DrawList::new();

    for frame in 0..FRAMES_PER_CLOCK {
        list.clear();
        let mut painter = Painter::new(&mut list, metrics);
        clock.on_frame(&mut painter, &mut host);
        log::info!("{name} frame {frame}: {}", summarize(&list));

        if frame + 1 < FRAMES_PER_CLOCK && !host.wait() {
            break;
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut fonts = FontSystem::new();
    let font = load_system_font(&mut fonts);
    let font_metrics = font.map(|id| FontMetrics::new(&fonts, id));
    let heuristic = HeuristicMetrics;
    let metrics: &dyn TextMetrics = match &font_metrics {
        Some(m) => m,
        None => {
            log::warn!("no system font found, using heuristic metrics");
            &heuristic
        }
    };

    let mut default_clock = ClockView::new();
    run_clock("default", &mut default_clock, Vec2::splat(DEFAULT_FACE_SIZE), metrics);

    let mut big_clock = ClockView::new();
    run_clock("big", &mut big_clock, Vec2::splat(1000.0), metrics);

    let mut colorful_clock = ClockView::new().face_color(Color::from_argb(0x33FF0000));
    run_clock("colorful", &mut colorful_clock, Vec2::splat(DEFAULT_FACE_SIZE), metrics);

    Ok(())
}
