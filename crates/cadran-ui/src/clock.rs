use cadran_engine::coords::Vec2;
use cadran_engine::geometry::{
    FaceGeometry, hour_hand_angle, minute_hand_angle, numeral_angle, point_on_circle,
    second_hand_angle, tick_angle,
};
use cadran_engine::paint::Color;
use cadran_engine::scene::shapes::LineCap;
use cadran_engine::time::{RedrawHost, RedrawScheduler, SystemClock, TimeSample, WallClock};

use crate::painter::Painter;
use crate::snapshot::ClockSnapshot;
use crate::style::{ClockStyle, StyleOverrides, Theme};
use crate::surface::Surface;

/// Square size hint, in logical pixels, when the host leaves the surface
/// unconstrained.
pub const DEFAULT_FACE_SIZE: f32 = 240.0;

/// Horizontal glyph squeeze applied to the hour numerals.
const NUMBER_SCALE_X: f32 = 0.9;
/// Letter-spacing (ems) applied to the hour numerals; tightens "10"–"12".
const NUMBER_LETTER_SPACING: f32 = -0.15;

/// The analog clock widget.
///
/// Emits one fixed-order frame per [`on_frame`](Surface::on_frame) call —
/// face fill, border, numerals, tick dots, then hour/minute/second hands —
/// and re-arms its redraw scheduler, so the face stays live for as long as
/// the host keeps delivering the scheduled callbacks.
///
/// All proportions derive from the face radius, so the clock renders
/// identically at any surface size, including a degenerate zero-size frame
/// before the first resize arrives.
///
/// # Example
///
/// ```rust,ignore
/// let mut clock = ClockView::new()
///     .face_color(Color::from_argb(0x33FF0000))
///     .second_hand_color(Color::from_rgb(0xC0, 0x3A, 0x2B));
/// clock.on_resize(Vec2::new(200.0, 300.0));
/// ```
pub struct ClockView<C: WallClock = SystemClock> {
    style: ClockStyle,
    theme: Theme,
    geometry: FaceGeometry,
    scheduler: RedrawScheduler,
    clock: C,
    /// Opaque host-view state carried through save/restore untouched.
    host_state: Option<serde_json::Value>,
}

impl ClockView<SystemClock> {
    /// Clock reading the local system time, styled by the default theme.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ClockView<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: WallClock> ClockView<C> {
    /// Clock with an injected time source (tests pass a fixed clock).
    pub fn with_clock(clock: C) -> Self {
        Self::with_config(clock, Theme::default(), StyleOverrides::default())
    }

    /// Full construction: time source, theme, and host overrides, merged
    /// once — any option the host left unset resolves to the theme.
    pub fn with_config(clock: C, theme: Theme, overrides: StyleOverrides) -> Self {
        Self {
            style: overrides.resolve(&theme),
            theme,
            geometry: FaceGeometry::empty(),
            scheduler: RedrawScheduler::new(),
            clock,
            host_state: None,
        }
    }

    // ── configuration ─────────────────────────────────────────────────────

    pub fn face_color(mut self, v: Color) -> Self {
        self.style.face_background = v;
        self
    }
    pub fn border_color(mut self, v: Color) -> Self {
        self.style.border = v;
        self
    }
    pub fn number_color(mut self, v: Color) -> Self {
        self.style.numbers = v;
        self
    }
    pub fn dot_color(mut self, v: Color) -> Self {
        self.style.dots = v;
        self
    }
    pub fn hour_hand_color(mut self, v: Color) -> Self {
        self.style.hour_hand = v;
        self
    }
    pub fn minute_hand_color(mut self, v: Color) -> Self {
        self.style.minute_hand = v;
        self
    }
    pub fn second_hand_color(mut self, v: Color) -> Self {
        self.style.second_hand = v;
        self
    }

    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    pub fn geometry(&self) -> FaceGeometry {
        self.geometry
    }

    pub fn scheduler(&self) -> &RedrawScheduler {
        &self.scheduler
    }

    // ── frame emission ────────────────────────────────────────────────────

    fn draw_face(&self, painter: &mut Painter<'_>) {
        let g = self.geometry;
        painter.fill_circle(g.center, g.radius, self.style.face_background);
    }

    fn draw_border(&self, painter: &mut Painter<'_>) {
        let g = self.geometry;
        let stroke_width = g.radius / 10.0;
        // Pull the ring in by half the stroke so it stays inside the face.
        painter.stroke_circle(g.center, g.radius - stroke_width / 2.0, stroke_width, self.style.border);
    }

    fn draw_numbers(&self, painter: &mut Painter<'_>) {
        let g = self.geometry;
        let ring_radius = g.radius * 11.0 / 16.0;
        let font_size = g.radius / 4.0;

        for hour in 1..=12 {
            let anchor = point_on_circle(numeral_angle(hour), ring_radius, g.center);
            painter.text_centered(
                hour.to_string(),
                font_size,
                self.style.numbers,
                anchor,
                NUMBER_SCALE_X,
                NUMBER_LETTER_SPACING,
            );
        }
    }

    fn draw_dots(&self, painter: &mut Painter<'_>) {
        let g = self.geometry;
        let ring_radius = g.radius * 5.0 / 6.0;
        let dot_radius = g.radius / 50.0;

        for index in 0..60 {
            let center = point_on_circle(tick_angle(index), ring_radius, g.center);
            painter.dot(center, dot_radius, self.style.dots);
        }
    }

    fn draw_hands(&self, painter: &mut Painter<'_>, time: TimeSample) {
        let g = self.geometry;

        let hour_tip = point_on_circle(hour_hand_angle(time.hour, time.minute), g.radius / 3.0, g.center);
        painter.line(hour_tip, g.center, g.radius / 20.0, self.style.hour_hand, LineCap::Round);

        let minute_tip = point_on_circle(minute_hand_angle(time.minute), g.radius / 2.0, g.center);
        painter.line(minute_tip, g.center, g.radius / 30.0, self.style.minute_hand, LineCap::Butt);

        let second_tip =
            point_on_circle(second_hand_angle(time.second), g.radius * 5.0 / 8.0, g.center);
        painter.line(second_tip, g.center, g.radius / 40.0, self.style.second_hand, LineCap::Butt);
    }
}

impl<C: WallClock> Surface for ClockView<C> {
    fn preferred_size(&self) -> Vec2 {
        Vec2::splat(DEFAULT_FACE_SIZE)
    }

    fn on_resize(&mut self, size: Vec2) {
        self.geometry = FaceGeometry::from_surface(size);
        log::debug!(
            "clock resized: radius {} center ({}, {})",
            self.geometry.radius,
            self.geometry.center.x,
            self.geometry.center.y
        );
    }

    fn on_frame(&mut self, painter: &mut Painter<'_>, host: &mut dyn RedrawHost) {
        // Sampled once per frame; every hand reads the same instant.
        let time = self.clock.now();
        log::trace!("clock frame at {:02}:{:02}:{:02}", time.hour, time.minute, time.second);

        self.draw_face(painter);
        self.draw_border(painter);
        self.draw_numbers(painter);
        self.draw_dots(painter);
        self.draw_hands(painter, time);

        self.scheduler.frame_completed(host);
    }

    fn save_state(&self) -> serde_json::Value {
        ClockSnapshot {
            host_state: self.host_state.clone(),
            clock_radius: Some(self.geometry.radius),
            face_background_color: Some(self.style.face_background.to_argb()),
            border_color: Some(self.style.border.to_argb()),
            number_color: Some(self.style.numbers.to_argb()),
            dot_color: Some(self.style.dots.to_argb()),
            hour_hand_color: Some(self.style.hour_hand.to_argb()),
            minute_hand_color: Some(self.style.minute_hand.to_argb()),
            second_hand_color: Some(self.style.second_hand.to_argb()),
        }
        .to_value()
    }

    fn restore_state(&mut self, state: &serde_json::Value) {
        let Some(snapshot) = ClockSnapshot::from_value(state) else {
            log::warn!("discarding unreadable clock snapshot, keeping current state");
            return;
        };

        let theme = self.theme.clone();

        self.geometry.radius = snapshot.clock_radius.unwrap_or(self.geometry.radius).max(0.0);
        self.style.face_background = snapshot
            .face_background_color
            .map(Color::from_argb)
            .unwrap_or(theme.face_background);
        self.style.border = snapshot.border_color.map(Color::from_argb).unwrap_or(theme.border);
        self.style.numbers = snapshot.number_color.map(Color::from_argb).unwrap_or(theme.numbers);
        self.style.dots = snapshot.dot_color.map(Color::from_argb).unwrap_or(theme.dots);
        self.style.hour_hand =
            snapshot.hour_hand_color.map(Color::from_argb).unwrap_or(theme.hour_hand);
        self.style.minute_hand =
            snapshot.minute_hand_color.map(Color::from_argb).unwrap_or(theme.minute_hand);
        self.style.second_hand =
            snapshot.second_hand_color.map(Color::from_argb).unwrap_or(theme.second_hand);
        self.host_state = snapshot.host_state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadran_engine::scene::{DrawCmd, DrawList};
    use cadran_engine::text::TextMetrics;
    use cadran_engine::time::REFRESH_PERIOD;
    use std::time::Duration;

    struct FixedClock(TimeSample);

    impl WallClock for FixedClock {
        fn now(&self) -> TimeSample {
            self.0
        }
    }

    struct FixedMetrics;

    impl TextMetrics for FixedMetrics {
        fn ascent(&self, size: f32) -> f32 {
            size * 0.75
        }
        fn descent(&self, size: f32) -> f32 {
            size * -0.25
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        delays: Vec<Duration>,
    }

    impl RedrawHost for RecordingHost {
        fn schedule_redraw(&mut self, delay: Duration) {
            self.delays.push(delay);
        }
    }

    fn frame_at(time: TimeSample, surface: Vec2) -> (DrawList, RecordingHost) {
        let mut clock = ClockView::with_clock(FixedClock(time));
        clock.on_resize(surface);

        let mut list = DrawList::new();
        let mut host = RecordingHost::default();
        let mut painter = Painter::new(&mut list, &FixedMetrics);
        clock.on_frame(&mut painter, &mut host);
        (list, host)
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} !~ {b}");
    }

    // ── frame composition ─────────────────────────────────────────────────

    #[test]
    fn frame_is_77_commands_in_fixed_order() {
        let (list, _) = frame_at(TimeSample::new(10, 9, 30), Vec2::new(200.0, 300.0));
        let items = list.items();
        assert_eq!(items.len(), 77);

        assert!(matches!(items[0], DrawCmd::FilledCircle(_)), "face first");
        assert!(matches!(items[1], DrawCmd::StrokedCircle(_)), "then border");
        assert!(items[2..14].iter().all(|c| matches!(c, DrawCmd::Text(_))), "12 numerals");
        assert!(items[14..74].iter().all(|c| matches!(c, DrawCmd::Dot(_))), "60 dots");
        assert!(items[74..].iter().all(|c| matches!(c, DrawCmd::Line(_))), "3 hands on top");
    }

    #[test]
    fn face_and_border_derive_from_radius() {
        let (list, _) = frame_at(TimeSample::new(10, 9, 30), Vec2::new(200.0, 300.0));

        match &list.items()[0] {
            DrawCmd::FilledCircle(c) => {
                assert_eq!(c.center, Vec2::new(100.0, 150.0));
                assert_eq!(c.radius, 100.0);
            }
            other => panic!("expected face fill, got {other:?}"),
        }

        match &list.items()[1] {
            DrawCmd::StrokedCircle(c) => {
                // Stroke r/10 = 10, pulled in by half: ring at 95.
                assert_eq!(c.stroke_width, 10.0);
                assert_eq!(c.radius, 95.0);
            }
            other => panic!("expected border, got {other:?}"),
        }
    }

    #[test]
    fn numerals_run_one_through_twelve_at_face_scale() {
        let (list, _) = frame_at(TimeSample::new(10, 9, 30), Vec2::new(200.0, 300.0));
        let texts: Vec<_> = list
            .items()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text(t) => Some(t),
                _ => None,
            })
            .collect();

        assert_eq!(texts.len(), 12);
        for (i, t) in texts.iter().enumerate() {
            assert_eq!(t.text, (i + 1).to_string());
            assert_eq!(t.size, 25.0); // r/4
            assert_eq!(t.scale_x, NUMBER_SCALE_X);
            assert_eq!(t.letter_spacing, NUMBER_LETTER_SPACING);
        }

        // "12" anchors at the top of the numeral ring (r·11/16 = 68.75),
        // dropped to its baseline by the metrics correction:
        // (ascent + descent)/2 at size 25 → (18.75 - 6.25)/2 = 6.25.
        let twelve = texts[11];
        assert_close(twelve.anchor.x, 100.0);
        assert_close(twelve.anchor.y, 150.0 - 68.75 + 6.25);
    }

    #[test]
    fn hands_match_the_ten_oh_nine_thirty_scenario() {
        let (list, _) = frame_at(TimeSample::new(10, 9, 30), Vec2::new(200.0, 300.0));
        let center = Vec2::new(100.0, 150.0);
        let lines: Vec<_> = list
            .items()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Line(l) => Some(l),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 3);

        // Hour hand: 609 minutes of half-day, ring r/3, round cap.
        let hour = lines[0];
        let expected = point_on_circle(hour_hand_angle(10, 9), 100.0 / 3.0, center);
        assert_close(hour.from.x, expected.x);
        assert_close(hour.from.y, expected.y);
        assert_eq!(hour.to, center);
        assert_eq!(hour.stroke_width, 5.0); // r/20
        assert_eq!(hour.cap, LineCap::Round);

        // Minute hand: ring r/2.
        let minute = lines[1];
        let expected = point_on_circle(minute_hand_angle(9), 50.0, center);
        assert_close(minute.from.x, expected.x);
        assert_close(minute.from.y, expected.y);
        assert_close(minute.stroke_width, 100.0 / 30.0);
        assert_eq!(minute.cap, LineCap::Butt);

        // Second hand at :30 points straight down: tip (100, 212.5).
        let second = lines[2];
        assert_close(second.from.x, 100.0);
        assert_close(second.from.y, 212.5);
        assert_eq!(second.to, center);
        assert_eq!(second.stroke_width, 2.5); // r/40
    }

    #[test]
    fn dots_sit_on_their_ring() {
        let (list, _) = frame_at(TimeSample::new(0, 0, 0), Vec2::new(200.0, 200.0));
        let center = Vec2::new(100.0, 100.0);

        for cmd in &list.items()[14..74] {
            let DrawCmd::Dot(d) = cmd else { panic!("expected dot, got {cmd:?}") };
            assert_eq!(d.radius, 2.0); // r/50
            let dx = d.center.x - center.x;
            let dy = d.center.y - center.y;
            // Ring radius r·5/6.
            assert_close((dx * dx + dy * dy).sqrt(), 100.0 * 5.0 / 6.0);
        }
    }

    // ── degenerate size ───────────────────────────────────────────────────

    #[test]
    fn unsized_surface_paints_a_zero_extent_frame() {
        let mut clock = ClockView::with_clock(FixedClock(TimeSample::new(3, 15, 45)));
        // No on_resize: geometry is still empty.

        let mut list = DrawList::new();
        let mut host = RecordingHost::default();
        let mut painter = Painter::new(&mut list, &FixedMetrics);
        clock.on_frame(&mut painter, &mut host);

        assert_eq!(list.len(), 77);
        for cmd in list.items() {
            match cmd {
                DrawCmd::FilledCircle(c) => assert_eq!(c.radius, 0.0),
                DrawCmd::StrokedCircle(c) => assert_eq!(c.stroke_width, 0.0),
                DrawCmd::Dot(d) => assert_eq!(d.radius, 0.0),
                DrawCmd::Text(t) => assert_eq!(t.size, 0.0),
                DrawCmd::Line(l) => {
                    assert_eq!(l.from, l.to);
                    assert_eq!(l.stroke_width, 0.0);
                }
            }
        }
    }

    // ── scheduling ────────────────────────────────────────────────────────

    #[test]
    fn each_frame_rearms_exactly_once() {
        let mut clock = ClockView::with_clock(FixedClock(TimeSample::new(1, 2, 3)));
        clock.on_resize(Vec2::splat(100.0));

        let mut host = RecordingHost::default();
        let mut list = DrawList::new();
        for _ in 0..4 {
            list.clear();
            let mut painter = Painter::new(&mut list, &FixedMetrics);
            clock.on_frame(&mut painter, &mut host);
        }

        assert_eq!(host.delays.len(), 4);
        assert!(host.delays.iter().all(|&d| d == REFRESH_PERIOD));
        assert_eq!(clock.scheduler().rearm_count(), 4);
    }

    // ── save / restore ────────────────────────────────────────────────────

    #[test]
    fn snapshot_round_trips_colors_and_radius_exactly() {
        let mut clock = ClockView::new()
            .face_color(Color::from_argb(0x33FF0000))
            .second_hand_color(Color::from_argb(0xFF00FF88));
        clock.on_resize(Vec2::new(123.5, 321.0));
        let saved = clock.save_state();

        let mut restored = ClockView::new();
        restored.restore_state(&saved);

        assert_eq!(restored.style(), clock.style());
        assert_eq!(restored.geometry().radius, 61.75);
    }

    #[test]
    fn corrupt_snapshot_leaves_the_clock_usable() {
        let mut clock = ClockView::new().border_color(Color::from_rgb(1, 2, 3));
        let before = clock.style().clone();

        clock.restore_state(&serde_json::json!([1, 2, 3]));
        assert_eq!(*clock.style(), before);

        // Partial snapshots apply what they carry; the rest falls back to
        // the theme.
        clock.restore_state(&serde_json::json!({ "dotColor": 0xFF101010u32 }));
        assert_eq!(clock.style().dots, Color::from_argb(0xFF101010));
        assert_eq!(clock.style().border, Theme::default().border);
    }

    #[test]
    fn host_state_is_carried_through_untouched() {
        let mut clock = ClockView::new();
        clock.restore_state(&serde_json::json!({
            "clockState": { "focused": true },
            "clockRadius": 50.0,
        }));

        let saved = clock.save_state();
        assert_eq!(saved["clockState"], serde_json::json!({ "focused": true }));
        assert_eq!(saved["clockRadius"], serde_json::json!(50.0));
    }

    #[test]
    fn preferred_size_is_the_default_hint() {
        assert_eq!(ClockView::new().preferred_size(), Vec2::splat(DEFAULT_FACE_SIZE));
    }
}
