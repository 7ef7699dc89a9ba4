use chrono::Timelike;

/// One wall-clock reading, in 12-hour form.
///
/// Sampled fresh at the start of every frame and never cached; staleness is
/// bounded by the redraw period. The 12-hour `hour` is intentional — hands
/// on an analog face wrap twice a day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeSample {
    /// Hour in `[0, 12)`.
    pub hour: u32,
    /// Minute in `[0, 60)`.
    pub minute: u32,
    /// Second in `[0, 60)`.
    pub second: u32,
}

impl TimeSample {
    /// Builds a sample, folding a 24-hour `hour` into 12-hour form.
    #[inline]
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        debug_assert!(minute < 60, "minute out of range: {minute}");
        debug_assert!(second < 60, "second out of range: {second}");
        Self { hour: hour % 12, minute, second }
    }
}

/// Source of wall-clock readings.
///
/// A trait so frames can be driven by a fixed time in tests; production
/// hosts use [`SystemClock`].
pub trait WallClock {
    fn now(&self) -> TimeSample;
}

/// Reads the host's local wall clock.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> TimeSample {
        let now = chrono::Local::now();
        TimeSample::new(now.hour(), now.minute(), now.second())
    }
}
