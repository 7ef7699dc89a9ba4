use super::{FontId, FontSystem};

/// Vertical font metrics at a given size, in logical pixels.
///
/// Convention (fontdue's): `ascent >= 0` extends above the baseline,
/// `descent <= 0` below it. The widget layer uses these to center numeral
/// glyphs on their computed anchor points.
///
/// This is a trait so hosts and tests can supply metrics without loading a
/// real font.
pub trait TextMetrics {
    fn ascent(&self, size: f32) -> f32;
    fn descent(&self, size: f32) -> f32;
}

/// [`TextMetrics`] for one font in a [`FontSystem`].
///
/// Falls back to a generic 3:1 ascent/descent split when the font carries no
/// horizontal line metrics; metric queries never fail.
pub struct FontMetrics<'a> {
    system: &'a FontSystem,
    font: FontId,
}

impl<'a> FontMetrics<'a> {
    pub fn new(system: &'a FontSystem, font: FontId) -> Self {
        Self { system, font }
    }

    fn line_metrics(&self, size: f32) -> Option<fontdue::LineMetrics> {
        self.system.get(self.font)?.horizontal_line_metrics(size)
    }
}

impl TextMetrics for FontMetrics<'_> {
    fn ascent(&self, size: f32) -> f32 {
        self.line_metrics(size).map(|m| m.ascent).unwrap_or(size * 0.75)
    }

    fn descent(&self, size: f32) -> f32 {
        self.line_metrics(size).map(|m| m.descent).unwrap_or(size * -0.25)
    }
}
