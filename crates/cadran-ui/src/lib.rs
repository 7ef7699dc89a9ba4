//! Cadran UI — the analog clock widget on top of `cadran-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cadran_ui::prelude::*;
//!
//! let mut clock = ClockView::new()
//!     .face_color(Color::from_argb(0x33FF0000));
//! clock.on_resize(Vec2::new(200.0, 300.0));
//!
//! // In your frame callback:
//! let mut painter = Painter::new(&mut draw_list, &metrics);
//! clock.on_frame(&mut painter, &mut host);
//! // Hand draw_list to your rasterizer; `host` has been asked for the
//! // next frame already.
//! ```
//!
//! The host supplies three things through engine traits: a wall-clock read
//! (`WallClock`), font metrics (`TextMetrics`), and a deferred-callback
//! primitive (`RedrawHost`). Everything else lives here.

pub mod clock;
pub mod painter;
pub mod snapshot;
pub mod style;
pub mod surface;

pub use clock::ClockView;

/// Everything needed to embed the clock in a host.
pub mod prelude {
    pub use crate::clock::{ClockView, DEFAULT_FACE_SIZE};
    pub use crate::painter::Painter;
    pub use crate::snapshot::ClockSnapshot;
    pub use crate::style::{ClockStyle, StyleOverrides, Theme};
    pub use crate::surface::Surface;

    // Re-export the engine types every host needs.
    pub use cadran_engine::coords::Vec2;
    pub use cadran_engine::paint::Color;
    pub use cadran_engine::scene::{DrawCmd, DrawList};
    pub use cadran_engine::text::{FontMetrics, FontSystem, TextMetrics};
    pub use cadran_engine::time::{
        REFRESH_PERIOD, RedrawHost, RedrawScheduler, SystemClock, TimeSample, WallClock,
    };
}
