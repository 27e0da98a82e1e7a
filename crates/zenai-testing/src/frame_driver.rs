use zenai_core::{Runtime, RuntimeHandle, NANOS_PER_MILLI};

/// One frame at 60 Hz.
pub const FRAME_NANOS_60HZ: u64 = 16_666_667;

/// Drives a [`Runtime`] by hand: frames at a fixed interval and interval
/// timers at their exact due times.
pub struct FrameDriver {
    runtime: Runtime,
    frame_nanos: u64,
    now_nanos: u64,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_frame_nanos(FRAME_NANOS_60HZ)
    }

    pub fn with_frame_nanos(frame_nanos: u64) -> Self {
        Self {
            runtime: Runtime::new(),
            frame_nanos: frame_nanos.max(1),
            now_nanos: 0,
            frames: 0,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn now_nanos(&self) -> u64 {
        self.now_nanos
    }

    pub fn now_millis(&self) -> u64 {
        self.now_nanos / NANOS_PER_MILLI
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Runs a single frame.
    pub fn advance_frame(&mut self) {
        self.advance_frame_with(|_| {});
    }

    /// Runs a single frame, calling `on_frame` after the runtime's callbacks.
    pub fn advance_frame_with(&mut self, on_frame: impl FnOnce(u64)) {
        let target = self.now_nanos + self.frame_nanos;
        self.step_to(target);
        on_frame(target);
    }

    pub fn advance_by_millis(&mut self, millis: u64) {
        self.advance_by_millis_with(millis, |_| {});
    }

    /// Advances time by `millis` in frame-sized steps. The last step is
    /// shortened so time lands exactly on the requested instant, which keeps
    /// timers due at that instant firing.
    pub fn advance_by_millis_with(&mut self, millis: u64, mut on_frame: impl FnMut(u64)) {
        let end = self.now_nanos + millis * NANOS_PER_MILLI;
        while self.now_nanos < end {
            let target = (self.now_nanos + self.frame_nanos).min(end);
            self.step_to(target);
            on_frame(target);
        }
    }

    /// Runs frames until no frame callback is pending. Returns the number of
    /// frames run, or `None` if callbacks were still pending after
    /// `max_frames`.
    pub fn run_until_idle(&mut self, max_frames: usize) -> Option<usize> {
        for frame in 0..max_frames {
            if !self.runtime.has_frame_callbacks() {
                return Some(frame);
            }
            self.advance_frame();
        }
        if self.runtime.has_frame_callbacks() {
            None
        } else {
            Some(max_frames)
        }
    }

    fn step_to(&mut self, target_nanos: u64) {
        self.runtime.advance_timers_to(target_nanos / NANOS_PER_MILLI);
        self.runtime.drain_frame_callbacks(target_nanos);
        self.now_nanos = target_nanos;
        self.frames += 1;
        log::trace!("frame {} at {}ns", self.frames, target_nanos);
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/frame_driver_tests.rs"]
mod tests;
