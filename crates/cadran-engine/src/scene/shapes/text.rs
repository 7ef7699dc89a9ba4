use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Text draw payload.
///
/// `anchor` is the horizontal center of the glyph run and its vertical
/// baseline: the rasterizer centers the run on `anchor.x` and sits it on
/// `anchor.y`. Producers that want the run vertically centered apply a
/// baseline offset (see `geometry::baseline_offset`) before pushing.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub anchor: Vec2,
    /// Horizontal glyph scale, 1.0 = unscaled. Rasterizer hint.
    pub scale_x: f32,
    /// Extra advance between glyphs in ems. Rasterizer hint.
    pub letter_spacing: f32,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        size: f32,
        color: Color,
        anchor: Vec2,
        scale_x: f32,
        letter_spacing: f32,
    ) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            size,
            color,
            anchor,
            scale_x,
            letter_spacing,
        }));
    }
}
