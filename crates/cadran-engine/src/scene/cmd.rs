use crate::scene::shapes::circle::{DotCmd, FilledCircleCmd, StrokedCircleCmd};
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::text::TextCmd;

/// Rasterizer-agnostic draw command.
///
/// Commands are produced fresh every frame and consumed immediately by the
/// host rasterizer; nothing retains them across frames.
///
/// Extending the scene:
/// - add a shape module under `scene::shapes::*` with the payload struct
/// - add the variant here
/// - implement push helpers on `DrawList` inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FilledCircle(FilledCircleCmd),
    StrokedCircle(StrokedCircleCmd),
    Dot(DotCmd),
    Text(TextCmd),
    Line(LineCmd),
}
