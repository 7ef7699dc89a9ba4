use cadran_engine::coords::Vec2;
use cadran_engine::geometry::baseline_offset;
use cadran_engine::paint::Color;
use cadran_engine::scene::DrawList;
use cadran_engine::scene::shapes::LineCap;
use cadran_engine::text::TextMetrics;

/// Drawing surface passed to [`Surface::on_frame`](crate::surface::Surface).
///
/// Wraps the engine's `DrawList` with clock-level verbs and carries the
/// host's font metrics so text can be vertically centered at record time.
/// One `Painter` is built per frame over resources the host owns.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    metrics: &'a dyn TextMetrics,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, metrics: &'a dyn TextMetrics) -> Self {
        Self { draw_list, metrics }
    }

    /// Solid disc.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_list.push_filled_circle(center, radius, color);
    }

    /// Ring stroked along `radius`.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke_width: f32, color: Color) {
        self.draw_list.push_stroked_circle(center, radius, stroke_width, color);
    }

    /// Small solid disc (tick dot).
    pub fn dot(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_list.push_dot(center, radius, color);
    }

    /// Stroked line segment.
    pub fn line(&mut self, from: Vec2, to: Vec2, stroke_width: f32, color: Color, cap: LineCap) {
        self.draw_list.push_line(from, to, stroke_width, color, cap);
    }

    /// Text centered on `anchor`, both axes.
    ///
    /// Horizontal centering is the rasterizer's contract for the recorded
    /// anchor; vertical centering happens here, by dropping the baseline
    /// below the anchor by half the glyph block height.
    pub fn text_centered(
        &mut self,
        text: impl Into<String>,
        size: f32,
        color: Color,
        anchor: Vec2,
        scale_x: f32,
        letter_spacing: f32,
    ) {
        let offset = baseline_offset(self.metrics.ascent(size), self.metrics.descent(size));
        let baseline = Vec2::new(anchor.x, anchor.y + offset);
        self.draw_list.push_text(text, size, color, baseline, scale_x, letter_spacing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadran_engine::scene::DrawCmd;

    struct FixedMetrics;

    impl TextMetrics for FixedMetrics {
        fn ascent(&self, size: f32) -> f32 {
            size * 0.75
        }
        fn descent(&self, size: f32) -> f32 {
            size * -0.25
        }
    }

    #[test]
    fn text_centered_drops_baseline_by_half_block() {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, &FixedMetrics);

        painter.text_centered("12", 40.0, Color::from_rgb(0, 0, 0), Vec2::new(100.0, 50.0), 1.0, 0.0);

        // ascent 30, descent -10 → offset (30 - 10) / 2 = 10 below the anchor.
        match &list.items()[0] {
            DrawCmd::Text(t) => {
                assert_eq!(t.anchor, Vec2::new(100.0, 60.0));
                assert_eq!(t.text, "12");
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
