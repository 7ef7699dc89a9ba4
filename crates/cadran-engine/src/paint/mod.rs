//! Paint model shared between the widget layer and host rasterizers.
//!
//! Scope:
//! - color representation (straight sRGB, 8-bit channels, packed-ARGB form)
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
