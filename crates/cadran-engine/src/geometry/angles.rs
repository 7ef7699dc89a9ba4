use core::f32::consts::{FRAC_PI_2, PI};

use crate::coords::Vec2;

/// Rotation applied so that index 12 lands at the top of the face.
///
/// Angle 0 in our coordinate space points east ("3 o'clock"); a quarter turn
/// counter-clockwise moves it to 12 o'clock.
pub const START_ANGLE: f32 = -FRAC_PI_2;

/// Angle of minute/second tick `index` in `[0, 60)`: one step every 6°.
///
/// Unrotated — the 60 dots form a full ring, so where index 0 sits does not
/// matter visually.
#[inline]
pub fn tick_angle(index: u32) -> f32 {
    index as f32 * (PI / 30.0)
}

/// Angle of hour numeral `hour` in `[1, 12]`, rotated so 12 is at the top.
#[inline]
pub fn numeral_angle(hour: u32) -> f32 {
    hour as f32 * (PI / 6.0) + START_ANGLE
}

/// Hour-hand angle from the combined minute-of-half-day.
///
/// `hour` is in 12-hour form. Folding minutes in makes the hand sweep
/// continuously instead of snapping at each hour boundary: 2:59 and 3:00
/// differ by less than one minute of sweep.
#[inline]
pub fn hour_hand_angle(hour: u32, minute: u32) -> f32 {
    let minute_of_half_day = (hour * 60 + minute) as f32;
    minute_of_half_day / 60.0 * (PI / 6.0) + START_ANGLE
}

/// Minute-hand angle for `minute` in `[0, 60)`.
#[inline]
pub fn minute_hand_angle(minute: u32) -> f32 {
    minute as f32 * (PI / 30.0) + START_ANGLE
}

/// Second-hand angle for `second` in `[0, 60)`.
#[inline]
pub fn second_hand_angle(second: u32) -> f32 {
    second as f32 * (PI / 30.0) + START_ANGLE
}

/// Point at `angle` radians on the circle of `radius` around `center`.
#[inline]
pub fn point_on_circle(angle: f32, radius: f32, center: Vec2) -> Vec2 {
    Vec2::new(radius * angle.cos() + center.x, radius * angle.sin() + center.y)
}

/// Offset from a vertical-center anchor down to the text baseline.
///
/// Convention: `ascent >= 0` above the baseline, `descent <= 0` below it
/// (fontdue's `LineMetrics`). Adding the returned offset to an anchor's y
/// places the baseline so the glyph block is vertically centered on the
/// anchor instead of sitting on it.
#[inline]
pub fn baseline_offset(ascent: f32, descent: f32) -> f32 {
    (ascent + descent) / 2.0
}
