//! Time subsystem.
//!
//! Two concerns, both behind seams the host (or a test) can replace:
//! - sampling wall-clock time-of-day once per frame (`WallClock`,
//!   `TimeSample`)
//! - keeping the face live by re-arming a deferred redraw after every frame
//!   (`RedrawScheduler`, `RedrawHost`)

mod scheduler;
mod wall_clock;

pub use scheduler::{REFRESH_PERIOD, RedrawHost, RedrawScheduler, SchedulerState};
pub use wall_clock::{SystemClock, TimeSample, WallClock};
