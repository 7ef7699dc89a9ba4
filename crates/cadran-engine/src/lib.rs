//! Cadran engine crate.
//!
//! Renderer-agnostic core of an analog clock face: the geometry that maps
//! time-of-day to positions, the draw-command stream a host rasterizes, and
//! the redraw scheduling that keeps the face live. The host owns the actual
//! surface and pixels; this crate never touches them.

pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
