//! Text support.
//!
//! The engine never rasterizes glyphs — that is the host's job. What it does
//! need is vertical font metrics, because numeral anchors are computed as
//! circle points and the baseline must be corrected to center the glyphs on
//! them. `TextMetrics` is that query; `FontSystem` + `FontMetrics` provide
//! the fontdue-backed implementation.

mod font_system;
mod metrics;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use metrics::{FontMetrics, TextMetrics};
