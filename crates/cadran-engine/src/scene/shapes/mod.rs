pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod text;

pub use circle::{DotCmd, FilledCircleCmd, StrokedCircleCmd};
pub use line::{LineCap, LineCmd};
pub use text::TextCmd;
