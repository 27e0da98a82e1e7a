//! Platform abstraction for runtime time.
//!
//! The runtime never reads a clock itself; hosts sample one of these and feed
//! the result to [`Runtime::advance_timers_to`](crate::Runtime::advance_timers_to)
//! and [`Runtime::drain_frame_callbacks`](crate::Runtime::drain_frame_callbacks).

use web_time::Instant;

/// Provides timing information for the runtime.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}

/// Wall clock backed by `web_time`, which maps to `performance.now()` on wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Instant) -> u64 {
        since.elapsed().as_millis() as u64
    }

    fn elapsed_nanos(&self, since: Instant) -> u64 {
        since.elapsed().as_nanos() as u64
    }
}
