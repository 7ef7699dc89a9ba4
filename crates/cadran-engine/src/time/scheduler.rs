use std::time::Duration;

/// Delay between consecutive redraws of the clock face.
///
/// ~5 frames per second: fast enough that the second hand never visibly
/// lags, slow enough to stay cheap on battery-bound hosts.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(180);

/// Host-provided deferred-invocation primitive.
///
/// `schedule_redraw` queues one future frame request on the thread that
/// drives drawing; it must not invoke the frame synchronously. Cancellation
/// is the host's concern — tearing down the surface drops any pending
/// request, and the scheduler holds no token of its own.
pub trait RedrawHost {
    fn schedule_redraw(&mut self, delay: Duration);
}

/// Scheduler state. `Idle` only exists before the first frame; once drawing
/// begins the loop is self-sustaining and never leaves `Scheduled`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SchedulerState {
    #[default]
    Idle,
    Scheduled,
}

/// Self-re-arming redraw loop.
///
/// Every completed frame arms exactly one future request for the fixed
/// period — no coalescing, no skipping. One instance per surface, like the
/// rest of the per-surface drawing state.
#[derive(Debug, Clone)]
pub struct RedrawScheduler {
    period: Duration,
    state: SchedulerState,
    rearm_count: u64,
}

impl RedrawScheduler {
    /// Scheduler with the standard [`REFRESH_PERIOD`].
    pub fn new() -> Self {
        Self::with_period(REFRESH_PERIOD)
    }

    /// Scheduler with a custom period.
    pub fn with_period(period: Duration) -> Self {
        Self { period, state: SchedulerState::Idle, rearm_count: 0 }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Number of redraw requests armed so far. One per completed frame.
    #[inline]
    pub fn rearm_count(&self) -> u64 {
        self.rearm_count
    }

    /// Called once per completed frame draw: unconditionally arms the next
    /// request and transitions to (or stays in) `Scheduled`.
    pub fn frame_completed(&mut self, host: &mut dyn RedrawHost) {
        host.schedule_redraw(self.period);
        self.state = SchedulerState::Scheduled;
        self.rearm_count = self.rearm_count.wrapping_add(1);
    }
}

impl Default for RedrawScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingHost {
        delays: Vec<Duration>,
    }

    impl RedrawHost for RecordingHost {
        fn schedule_redraw(&mut self, delay: Duration) {
            self.delays.push(delay);
        }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(RedrawScheduler::new().state(), SchedulerState::Idle);
    }

    #[test]
    fn every_frame_arms_exactly_one_request() {
        let mut sched = RedrawScheduler::new();
        let mut host = RecordingHost { delays: Vec::new() };

        for _ in 0..5 {
            sched.frame_completed(&mut host);
        }

        assert_eq!(sched.rearm_count(), 5);
        assert_eq!(host.delays.len(), 5);
        assert!(host.delays.iter().all(|&d| d == REFRESH_PERIOD));
        assert_eq!(sched.state(), SchedulerState::Scheduled);
    }

    #[test]
    fn custom_period_is_used_verbatim() {
        let period = Duration::from_millis(42);
        let mut sched = RedrawScheduler::with_period(period);
        let mut host = RecordingHost { delays: Vec::new() };

        sched.frame_completed(&mut host);

        assert_eq!(host.delays, vec![period]);
        assert_eq!(sched.period(), period);
    }
}
