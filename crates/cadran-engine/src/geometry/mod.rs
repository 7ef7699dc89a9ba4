//! Clock-face geometry.
//!
//! Pure math, no dependencies and no failure paths:
//! - mapping tick/numeral indices and time components to angles
//! - mapping an angle + radius + center to a point
//! - deriving face radius and center from the surface size
//!
//! Callers are responsible for range-constraining inputs (tick indices in
//! `[0, 60)`, numerals in `[1, 12]`); nothing here validates or panics.

mod angles;
mod face;

pub use angles::{
    START_ANGLE, baseline_offset, hour_hand_angle, minute_hand_angle, numeral_angle,
    point_on_circle, second_hand_angle, tick_angle,
};
pub use face::FaceGeometry;
