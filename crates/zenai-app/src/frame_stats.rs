//! Frame timing for the site's animation loop.
//!
//! Fed with the same frame timestamps the runtime sees, so it reports what
//! actually ran rather than wall time spent idle.

use std::collections::VecDeque;
use zenai_core::NANOS_PER_MILLI;

/// Number of frames to average over.
const FRAME_HISTORY_SIZE: usize = 60;

/// Frame statistics snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    /// Frames per second over the recent history.
    pub fps: f32,
    /// Average frame time in milliseconds.
    pub avg_ms: f32,
    /// Total frames since start.
    pub frame_count: u64,
}

impl FrameStats {
    pub fn display(&self) -> String {
        format!("{:.0} FPS ({:.1}ms)", self.fps, self.avg_ms)
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameTracker {
    frame_times: VecDeque<u64>,
    stats: FrameStats,
}

impl FrameTracker {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(FRAME_HISTORY_SIZE + 1),
            stats: FrameStats::default(),
        }
    }

    pub fn record_frame(&mut self, frame_time_nanos: u64) {
        self.frame_times.push_back(frame_time_nanos);
        self.stats.frame_count += 1;
        while self.frame_times.len() > FRAME_HISTORY_SIZE {
            self.frame_times.pop_front();
        }

        if let (Some(first), Some(last)) = (self.frame_times.front(), self.frame_times.back()) {
            let span_nanos = last.saturating_sub(*first);
            let intervals = (self.frame_times.len() - 1) as f32;
            if span_nanos > 0 {
                let span_ms = span_nanos as f32 / NANOS_PER_MILLI as f32;
                self.stats.avg_ms = span_ms / intervals;
                self.stats.fps = intervals * 1000.0 / span_ms;
            }
        }
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}

/// Rebases host frame timestamps onto a clock that starts at zero.
///
/// A browser's `requestAnimationFrame` time counts from page navigation, so
/// the first frame can arrive seconds after zero. The runtime's clock starts
/// at zero when the shell mounts, and timers registered then must not treat
/// the load delay as elapsed time.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameOrigin {
    origin_millis: Option<f64>,
}

impl FrameOrigin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nanoseconds since the first timestamp seen. Timestamps that go
    /// backwards clamp to zero.
    pub fn frame_nanos(&mut self, timestamp_millis: f64) -> u64 {
        let origin = *self.origin_millis.get_or_insert(timestamp_millis);
        let elapsed = (timestamp_millis - origin).max(0.0);
        (elapsed * NANOS_PER_MILLI as f64) as u64
    }
}

#[cfg(test)]
#[path = "tests/frame_stats_tests.rs"]
mod tests;
