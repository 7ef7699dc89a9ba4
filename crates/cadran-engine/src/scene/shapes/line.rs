use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// End-cap shape for stroked line segments.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum LineCap {
    /// Segment ends exactly at the endpoint.
    #[default]
    Butt,
    /// Semicircle of half the stroke width past each endpoint.
    Round,
}

/// Stroked line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke_width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl DrawList {
    /// Records a stroked line segment.
    #[inline]
    pub fn push_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        stroke_width: f32,
        color: Color,
        cap: LineCap,
    ) {
        self.push(DrawCmd::Line(LineCmd { from, to, stroke_width, color, cap }));
    }
}
