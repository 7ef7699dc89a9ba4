use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Solid disc.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledCircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Ring stroked along the circle of `radius`.
///
/// The stroke straddles the radius: half inside, half outside. Producers
/// that must stay inside a bound pull the radius in by half the stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedCircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub stroke_width: f32,
    pub color: Color,
}

/// Small solid disc, kept distinct from `FilledCircle` so rasterizers can
/// batch the 60 tick dots separately from the face fill.
#[derive(Debug, Clone, PartialEq)]
pub struct DotCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a solid disc.
    #[inline]
    pub fn push_filled_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCmd::FilledCircle(FilledCircleCmd { center, radius, color }));
    }

    /// Records a stroked ring.
    #[inline]
    pub fn push_stroked_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        stroke_width: f32,
        color: Color,
    ) {
        self.push(DrawCmd::StrokedCircle(StrokedCircleCmd { center, radius, stroke_width, color }));
    }

    /// Records a tick dot.
    #[inline]
    pub fn push_dot(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCmd::Dot(DotCmd { center, radius, color }));
    }
}
