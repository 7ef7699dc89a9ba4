//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store rasterizer-agnostic draw commands for one frame
//! - preserve insertion order (the frame's paint order is fixed by the
//!   producer; later commands paint on top of earlier ones)
//! - keep shape-specific payloads and push helpers isolated per shape file
//!   under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
