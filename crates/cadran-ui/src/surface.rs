use cadran_engine::coords::Vec2;
use cadran_engine::time::RedrawHost;

use crate::painter::Painter;

/// Drawable-surface capability.
///
/// The host windowing layer owns the actual surface; a `Surface`
/// implementation is what it plugs drawing into. The host calls `on_resize`
/// when dimensions change, `on_frame` when the surface is ready for
/// commands, and `save_state`/`restore_state` around surface re-creation.
pub trait Surface {
    /// Size the host should use when nothing constrains the surface.
    fn preferred_size(&self) -> Vec2;

    /// Surface dimensions changed; derived geometry must be recomputed.
    fn on_resize(&mut self, size: Vec2);

    /// Emit one frame's commands and schedule the follow-up redraw.
    fn on_frame(&mut self, painter: &mut Painter<'_>, host: &mut dyn RedrawHost);

    /// Snapshot of configuration that must survive surface re-creation.
    fn save_state(&self) -> serde_json::Value {
        serde_json::Value::Null
    }

    /// Restore a snapshot produced by [`save_state`](Self::save_state).
    ///
    /// Must tolerate anything: a corrupt or foreign value means "keep
    /// current state," never an error.
    fn restore_state(&mut self, _state: &serde_json::Value) {}
}
