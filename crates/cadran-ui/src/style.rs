use cadran_engine::paint::Color;

/// Default palette for the seven configurable clock colors.
///
/// Every style option falls back here when a host leaves it unset — a color
/// is never undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub face_background: Color,
    pub border: Color,
    pub numbers: Color,
    pub dots: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Light cream face, near-black markings, red second hand.
        Self {
            face_background: Color::from_argb(0xFFF5EFE6),
            border: Color::from_argb(0xFF2F2A26),
            numbers: Color::from_argb(0xFF2F2A26),
            dots: Color::from_argb(0xFF6B6560),
            hour_hand: Color::from_argb(0xFF2F2A26),
            minute_hand: Color::from_argb(0xFF4A443F),
            second_hand: Color::from_argb(0xFFC03A2B),
        }
    }
}

/// The seven resolved colors a frame is drawn with.
///
/// Immutable during frame emission; hosts mutate it only between frames
/// (single-threaded model — a concurrent host must snapshot or lock).
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    pub face_background: Color,
    pub border: Color,
    pub numbers: Color,
    pub dots: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
}

impl ClockStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            face_background: theme.face_background,
            border: theme.border,
            numbers: theme.numbers,
            dots: theme.dots,
            hour_hand: theme.hour_hand,
            minute_hand: theme.minute_hand,
            second_hand: theme.second_hand,
        }
    }
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Host-supplied color configuration; unset options resolve to the theme.
///
/// One-time merge at construction — the explicit equivalent of resolving
/// styled attributes against theme defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    pub face_background: Option<Color>,
    pub border: Option<Color>,
    pub numbers: Option<Color>,
    pub dots: Option<Color>,
    pub hour_hand: Option<Color>,
    pub minute_hand: Option<Color>,
    pub second_hand: Option<Color>,
}

impl StyleOverrides {
    pub fn resolve(&self, theme: &Theme) -> ClockStyle {
        ClockStyle {
            face_background: self.face_background.unwrap_or(theme.face_background),
            border: self.border.unwrap_or(theme.border),
            numbers: self.numbers.unwrap_or(theme.numbers),
            dots: self.dots.unwrap_or(theme.dots),
            hour_hand: self.hour_hand.unwrap_or(theme.hour_hand),
            minute_hand: self.minute_hand.unwrap_or(theme.minute_hand),
            second_hand: self.second_hand.unwrap_or(theme.second_hand),
        }
    }
}
