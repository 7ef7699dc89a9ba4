//! Coordinate types shared across the engine and the widget layer.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are standard trigonometric radians in this space: angle 0 points
//! east ("3 o'clock"), and because +Y is down, positive angles advance
//! clockwise — which is exactly the direction clock hands sweep.

mod vec2;

pub use vec2::Vec2;
